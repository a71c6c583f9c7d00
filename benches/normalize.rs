//! Benchmarks for the normalization pipeline.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use hypertab::dom::parse_html;
use hypertab::fixture::{Block, DocumentGenerator, GeneratorConfig, TableSpec};
use hypertab::{NormalizeOptions, Normalizer};

fn generate(layout: &[Block]) -> String {
    DocumentGenerator::new(GeneratorConfig::default().with_seed(42))
        .generate_document(layout)
        .unwrap()
}

/// A wide table with a title row and nested tables in every other cell.
fn nested_document(rows: usize) -> String {
    let inner = TableSpec::new(3, 2, vec![Block::paragraph(16)]);
    let mut outer = TableSpec::new(rows, 4, vec![Block::paragraph(40)]);
    for r in (0..rows).step_by(2) {
        outer = outer.with_override(r, 1, vec![Block::Table(inner.clone())]);
    }
    generate(&[Block::heading("Report", 1), Block::Table(outer), Block::paragraph(200)])
}

/// A table whose cells carry rowspan/colspan, built as raw markup.
fn spanned_document(rows: usize) -> String {
    let mut html = String::from("<table>");
    for r in 0..rows {
        html.push_str("<tr>");
        if r % 3 == 0 {
            html.push_str(r#"<td rowspan="3">group</td><td colspan="3">wide</td>"#);
        } else {
            html.push_str("<td>a</td><td>b</td><td>c</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

// ============================================================================
// Pipeline Benchmarks
// ============================================================================

fn bench_normalize_nested(c: &mut Criterion) {
    let normalizer = Normalizer::default();
    let mut group = c.benchmark_group("normalize_nested");
    for rows in [10, 100] {
        let html = nested_document(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &html, |b, html| {
            b.iter(|| normalizer.normalize(black_box(html)).unwrap());
        });
    }
    group.finish();
}

fn bench_normalize_spans(c: &mut Criterion) {
    let normalizer = Normalizer::default();
    let mut group = c.benchmark_group("normalize_spans");
    for rows in [30, 300] {
        let html = spanned_document(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &html, |b, html| {
            b.iter(|| normalizer.normalize(black_box(html)).unwrap());
        });
    }
    group.finish();
}

// ============================================================================
// Component Benchmarks
// ============================================================================

fn bench_parse_only(c: &mut Criterion) {
    let html = nested_document(100);
    c.bench_function("parse_html", |b| {
        b.iter(|| parse_html(black_box(&html)));
    });
}

fn bench_passes_only(c: &mut Criterion) {
    let html = nested_document(100);
    let normalizer = Normalizer::new(NormalizeOptions::default());
    c.bench_function("passes_only", |b| {
        b.iter_batched(
            || parse_html(&html),
            |mut dom| normalizer.run(&mut dom).unwrap(),
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_normalize_nested,
    bench_normalize_spans,
    bench_parse_only,
    bench_passes_only
);
criterion_main!(benches);

//! Fixture generator/parser round trips, and the pipeline run over
//! generated documents.

use hypertab::dom::parse_html;
use hypertab::fixture::{Block, DocumentGenerator, GeneratorConfig, LayoutParser, TableSpec};
use hypertab::normalize;
use hypertab::table::find_tables;

fn generate(layout: &[Block], seed: u64) -> String {
    DocumentGenerator::new(GeneratorConfig::default().with_seed(seed))
        .generate_document(layout)
        .expect("layout should render")
}

fn assert_same_shape(parsed: &[Block], layout: &[Block]) {
    assert_eq!(parsed.len(), layout.len(), "{parsed:?}");
    for (p, l) in parsed.iter().zip(layout) {
        assert!(p.same_shape(l), "{p:?} vs {l:?}");
    }
}

fn nested_layout() -> Vec<Block> {
    let inner = TableSpec::new(2, 2, vec![Block::paragraph(12)]);
    let outer = TableSpec::new(3, 3, vec![Block::paragraph(30)])
        .with_override(1, 1, vec![Block::heading("Inner", 3), Block::Table(inner)])
        .with_override(2, 0, vec![Block::heading("Cell", 4)]);
    vec![
        Block::heading("Report", 1),
        Block::paragraph(120),
        Block::Table(outer),
        Block::paragraph(40),
    ]
}

#[test]
fn test_round_trip_recovers_shapes() {
    let layout = nested_layout();
    for seed in 0..5 {
        let parsed = LayoutParser::default().parse_document(&generate(&layout, seed));
        assert_same_shape(&parsed, &layout);
    }
}

#[test]
fn test_round_trip_recovers_nested_override() {
    let layout = nested_layout();
    let parsed = LayoutParser::default().parse_document(&generate(&layout, 1));

    let Block::Table(outer) = &parsed[2] else {
        panic!("expected table, got {:?}", parsed[2]);
    };
    let content = outer.cell_content(1, 1);
    assert_eq!(content[0], Block::heading("Inner", 3));
    assert!(content[1].same_shape(&Block::Table(TableSpec::new(2, 2, vec![]))));
    assert_eq!(outer.cell_content(2, 0), &[Block::heading("Cell", 4)]);
}

#[test]
fn test_paragraph_lengths_bounded() {
    let layout = vec![Block::paragraph(50), Block::paragraph(7)];
    let parsed = LayoutParser::default().parse_document(&generate(&layout, 9));
    for (p, l) in parsed.iter().zip(&layout) {
        let (Block::Paragraph { length: got }, Block::Paragraph { length: max }) = (p, l) else {
            panic!("expected paragraphs");
        };
        assert!(got <= max, "{got} > {max}");
    }
}

#[test]
fn test_normalizing_generated_document_hoists_everything() {
    let html = generate(&nested_layout(), 3);
    let out = normalize(&html).unwrap();

    let dom = parse_html(&out);
    let tables = find_tables(&dom, dom.document(), 512);
    assert_eq!(tables.len(), 2);
    assert!(tables.iter().all(|t| !t.nested));
    assert!(out.starts_with("<html>"));
}

#[test]
fn test_single_column_generated_table_flattens() {
    let layout = vec![Block::Table(TableSpec::new(3, 1, vec![Block::heading("Row", 2)]))];
    let out = normalize(&generate(&layout, 0)).unwrap();
    assert_eq!(
        out,
        "<html><head></head><body><h2>Row</h2><br/><h2>Row</h2><br/><h2>Row</h2><br/></body></html>"
    );
}

#[cfg(feature = "cli")]
#[test]
fn test_json_layout_renders() {
    let json = r#"[
        {"type": "heading", "text": "T", "level": 2},
        {"type": "table", "rows": 1, "cols": 2, "cell_fill": [{"type": "heading", "text": "x"}]}
    ]"#;
    let layout: Vec<Block> = serde_json::from_str(json).unwrap();
    let html = generate(&layout, 0);
    assert_eq!(
        html,
        "<html><body><h2>T</h2><table border='1' cellspacing='0' cellpadding='5'>\
         <tr><td><h1>x</h1></td><td><h1>x</h1></td></tr></table></body></html>"
    );
}

//! hypertab - HTML table normalizer

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use hypertab::dom::parse_html;
use hypertab::fixture::{Block, DocumentGenerator, GeneratorConfig, LayoutParser};
use hypertab::table::{SpanGrid, captions, find_tables, rows};
use hypertab::{NormalizeOptions, Normalizer, decode_html};

#[derive(Parser)]
#[command(name = "hypertab")]
#[command(version, about = "Normalize HTML tables for text conversion", long_about = None)]
#[command(after_help = "EXAMPLES:
    hypertab normalize page.html -o clean.html    Normalize a file
    cat page.html | hypertab normalize --stats    Normalize stdin, report changes
    hypertab inspect page.html                    Show the document layout
    hypertab inspect --tables page.html           List tables and their grids
    hypertab generate layout.json --seed 7        Build a synthetic document")]
struct Cli {
    /// Log pass details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the normalization pipeline
    Normalize {
        /// Input HTML file (stdin if omitted or "-")
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Maximum element depth searched for tables
        #[arg(long, default_value_t = NormalizeOptions::default().max_depth)]
        max_depth: usize,

        /// Heading level for promoted title rows (1-6)
        #[arg(long, default_value_t = NormalizeOptions::default().heading_level)]
        heading_level: u8,

        /// Print per-pass change counts to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Render a JSON layout to a synthetic HTML document
    Generate {
        /// Layout file: a JSON array of blocks
        #[arg(value_name = "LAYOUT")]
        layout: PathBuf,

        /// Seed for generated paragraph text
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Print the block layout of a document as JSON
    Inspect {
        /// Input HTML file (stdin if omitted or "-")
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// List tables with their depth and grid size instead
        #[arg(long)]
        tables: bool,
    },
}

struct TableSummary {
    index: usize,
    depth: usize,
    nested: bool,
    rows: usize,
    grid: Option<(usize, usize)>,
    captions: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Normalize {
            input,
            output,
            max_depth,
            heading_level,
            stats,
        } => {
            let options = NormalizeOptions::default()
                .with_max_depth(max_depth)
                .with_heading_level(heading_level);
            normalize(input.as_deref(), output.as_deref(), options, stats)
        }
        Command::Generate { layout, seed } => generate(&layout, seed),
        Command::Inspect { input, tables } => inspect(input.as_deref(), tables),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "hypertab=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&Path>) -> hypertab::Result<Vec<u8>> {
    match path {
        Some(p) if p != Path::new("-") => Ok(fs::read(p)?),
        _ => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn normalize(
    input: Option<&Path>,
    output: Option<&Path>,
    options: NormalizeOptions,
    stats: bool,
) -> hypertab::Result<()> {
    let bytes = read_input(input)?;
    let html = decode_html(&bytes);
    debug!(bytes = bytes.len(), "read input");

    let (out, report) = Normalizer::new(options).normalize_with_report(&html)?;

    match output {
        Some(path) => {
            fs::write(path, &out)?;
            info!(path = %path.display(), "wrote output");
        }
        None => io::stdout().write_all(out.as_bytes())?,
    }

    if stats {
        eprintln!("Tables flattened: {}", report.tables_flattened);
        eprintln!("Headers promoted: {}", report.headers_promoted);
        eprintln!("Tables hoisted: {}", report.tables_hoisted);
        eprintln!("Cells inserted: {}", report.cells_inserted);
        eprintln!("Rows removed: {}", report.rows_removed);
        eprintln!("Captions promoted: {}", report.captions_promoted);
    }

    Ok(())
}

fn generate(layout: &Path, seed: u64) -> hypertab::Result<()> {
    let text = fs::read_to_string(layout)?;
    let blocks: Vec<Block> = serde_json::from_str(&text)?;

    let mut generator = DocumentGenerator::new(GeneratorConfig::default().with_seed(seed));
    let html = generator.generate_document(&blocks)?;
    println!("{html}");
    Ok(())
}

fn inspect(input: Option<&Path>, tables: bool) -> hypertab::Result<()> {
    let bytes = read_input(input)?;
    let html = decode_html(&bytes);

    if !tables {
        let layout = LayoutParser::default().parse_document(&html);
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }

    let dom = parse_html(&html);
    let options = NormalizeOptions::default();
    let summaries: Vec<TableSummary> = find_tables(&dom, dom.document(), options.max_depth)
        .into_iter()
        .enumerate()
        .map(|(index, table)| {
            let table_rows = rows(&dom, table.id);
            let grid =
                SpanGrid::build(&dom, &table_rows, &options).map(|g| (g.height(), g.width()));
            TableSummary {
                index,
                depth: table.depth,
                nested: table.nested,
                rows: table_rows.len(),
                grid,
                captions: captions(&dom, table.id).len(),
            }
        })
        .collect();

    println!("Tables: {}", summaries.len());
    for s in &summaries {
        let grid = s
            .grid
            .map_or_else(|| "too large".to_string(), |(h, w)| format!("{h}x{w}"));
        println!(
            "  #{} depth={} nested={} rows={} grid={} captions={}",
            s.index, s.depth, s.nested, s.rows, grid, s.captions
        );
    }
    Ok(())
}

//! Synthetic documents for tests and benchmarks.
//!
//! A layout is a list of [`Block`]s. [`DocumentGenerator`] renders a layout
//! to HTML with seeded random paragraph text, and [`LayoutParser`] reads the
//! block structure of a document back.
//!
//! # Example
//!
//! ```
//! use hypertab::fixture::{Block, DocumentGenerator, GeneratorConfig, LayoutParser, TableSpec};
//!
//! let layout = vec![
//!     Block::heading("Results", 2),
//!     Block::Table(TableSpec::new(3, 2, vec![Block::paragraph(20)])),
//! ];
//! let html = DocumentGenerator::new(GeneratorConfig::default())
//!     .generate_document(&layout)
//!     .unwrap();
//!
//! let parsed = LayoutParser::default().parse_document(&html);
//! assert!(parsed.iter().zip(&layout).all(|(a, b)| a.same_shape(b)));
//! ```

mod generator;
mod layout;
mod parser;

pub use generator::{DocumentGenerator, GeneratorConfig};
pub use layout::{Block, CellOverride, TableSpec};
pub use parser::LayoutParser;

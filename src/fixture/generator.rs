//! HTML generation from layouts.

use std::fmt::Write;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::dom::escape_text;
use crate::error::{Error, Result};

use super::layout::{Block, TableSpec};

const LOREM: &str = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod tempor \
                     incididunt ut labore et dolore magna aliqua";

/// Settings for [`DocumentGenerator`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Vocabulary for paragraph text.
    pub words: Vec<String>,
    /// Seed for word choice; equal seeds give equal documents.
    pub seed: u64,
    /// Raw attribute text placed on every `<table>` tag.
    pub table_attrs: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            words: LOREM.split_whitespace().map(str::to_string).collect(),
            seed: 0,
            table_attrs: "border='1' cellspacing='0' cellpadding='5'".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Builds synthetic HTML documents with (nested) tables.
pub struct DocumentGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl DocumentGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// Random words filling at most `length` characters.
    ///
    /// The last word is cut short to land exactly on `length` when it would
    /// overflow.
    pub fn generate_text(&mut self, length: usize) -> String {
        let mut words: Vec<String> = Vec::new();
        let mut used = 0usize;

        while used < length {
            let Some(word) = self.config.words.choose(&mut self.rng) else {
                break;
            };
            let word_len = word.chars().count();
            if used + word_len + 1 <= length {
                words.push(word.clone());
                used += word_len + 1;
            } else {
                words.push(word.chars().take(length - used).collect());
                break;
            }
        }

        words.join(" ")
    }

    /// Render a full `<html><body>` document.
    pub fn generate_document(&mut self, layout: &[Block]) -> Result<String> {
        let mut body = String::new();
        for block in layout {
            self.render_block(block, &mut body)?;
        }
        Ok(format!("<html><body>{body}</body></html>"))
    }

    fn render_block(&mut self, block: &Block, out: &mut String) -> Result<()> {
        match block {
            Block::Heading { text, level } => {
                if !(1..=6).contains(level) {
                    return Err(Error::InvalidLayout(format!("heading level {level}")));
                }
                let _ = write!(out, "<h{level}>{}</h{level}>", escape_text(text));
            }
            Block::Paragraph { length } => {
                let text = self.generate_text(*length);
                let _ = write!(out, "<p>{}</p>", escape_text(&text));
            }
            Block::Table(spec) => self.render_table(spec, out)?,
        }
        Ok(())
    }

    fn render_table(&mut self, spec: &TableSpec, out: &mut String) -> Result<()> {
        if let Some(o) = spec
            .overrides
            .iter()
            .find(|o| o.row >= spec.rows || o.col >= spec.cols)
        {
            return Err(Error::InvalidLayout(format!(
                "override at ({}, {}) outside {}x{} table",
                o.row, o.col, spec.rows, spec.cols
            )));
        }

        if self.config.table_attrs.is_empty() {
            out.push_str("<table>");
        } else {
            let _ = write!(out, "<table {}>", self.config.table_attrs);
        }
        for r in 0..spec.rows {
            out.push_str("<tr>");
            for c in 0..spec.cols {
                out.push_str("<td>");
                for block in spec.cell_content(r, c) {
                    self.render_block(block, out)?;
                }
                out.push_str("</td>");
            }
            out.push_str("</tr>");
        }
        out.push_str("</table>");
        Ok(())
    }
}

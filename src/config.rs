//! Normalization options.
//!
//! # Example
//!
//! ```
//! use hypertab::NormalizeOptions;
//!
//! let options = NormalizeOptions::default()
//!     .with_max_depth(64)
//!     .with_heading_level(3);
//! assert_eq!(options.heading_marker(), "###");
//! ```

/// Limits and rendering knobs for the normalization pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Maximum element depth searched when locating tables.
    pub max_depth: usize,
    /// Upper bound applied to `colspan` values.
    pub max_colspan: u32,
    /// Upper bound applied to `rowspan` values.
    pub max_rowspan: u32,
    /// Tables whose span grid would exceed this many slots are not expanded.
    pub max_grid_cells: usize,
    /// Heading level used for promoted header rows (1-6).
    pub heading_level: u8,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_depth: 512,
            max_colspan: 1000,
            max_rowspan: 65534,
            max_grid_cells: 1_000_000,
            heading_level: 2,
        }
    }
}

impl NormalizeOptions {
    /// Set the traversal depth guard.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the span clamps.
    pub fn with_max_spans(mut self, colspan: u32, rowspan: u32) -> Self {
        self.max_colspan = colspan.max(1);
        self.max_rowspan = rowspan.max(1);
        self
    }

    /// Set the grid size above which span expansion is skipped.
    pub fn with_max_grid_cells(mut self, cells: usize) -> Self {
        self.max_grid_cells = cells;
        self
    }

    /// Set the heading level for promoted header rows, clamped to 1-6.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level.clamp(1, 6);
        self
    }

    /// Markdown heading marker, e.g. `##`.
    pub fn heading_marker(&self) -> String {
        "#".repeat(self.heading_level.clamp(1, 6) as usize)
    }
}

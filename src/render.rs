use colored::Colorize;

use crate::grid::Grid;

/// Text used to draw each cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub filled: String,
    pub empty: String,
    /// Written after every cell, including the last in a row.
    pub line_space: String,
}

impl Glyphs {
    /// The pattern file format, so rendered output parses back.
    pub fn pattern() -> Self {
        Self {
            filled: "1".to_string(),
            empty: "0".to_string(),
            line_space: String::new(),
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            filled: "■".to_string(),
            empty: " ".to_string(),
            line_space: String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Colorizer {
    #[default]
    None,
    Green,
    Yellow,
}

impl Colorizer {
    pub fn paint(self, s: &str) -> String {
        match self {
            Colorizer::None => s.to_string(),
            Colorizer::Green => s.green().to_string(),
            Colorizer::Yellow => s.yellow().to_string(),
        }
    }
}

/// Draws one line per row. Only live cells are colorized.
pub fn render(grid: &Grid, glyphs: &Glyphs, colorizer: Colorizer) -> String {
    let filled = colorizer.paint(&glyphs.filled);
    let mut out = String::new();
    for row in grid.rows() {
        for &alive in row {
            out.push_str(if alive { &filled } else { &glyphs.empty });
            out.push_str(&glyphs.line_space);
        }
        out.push('\n');
    }
    out
}

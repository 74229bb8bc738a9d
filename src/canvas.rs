use unicode_width::UnicodeWidthStr;

use crate::{
    grid::{Dimensions, Grid},
    render::Glyphs,
};

/// Rows the view spends on padding and the footer around the canvas.
pub const VIEW_CHROME_ROWS: usize = 6;

impl Grid {
    /// Copies `self` into the middle of an all-dead grid of size `target`.
    ///
    /// The offset is floored, so odd leftover space goes to the bottom and
    /// right. The column count is taken from the first row.
    ///
    /// `self` must be rectangular; a ragged grid is laid out from its first row
    /// and the result is unspecified.
    ///
    /// # Panics
    ///
    /// If `self` does not fit inside `target`.
    pub fn centered_in(&self, target: Dimensions) -> Grid {
        let source = self.dimensions();
        assert!(
            target.contains(source),
            "cannot center a {source} grid in {target}"
        );
        let (start_row, start_col) = (
            (target.rows - source.rows) / 2,
            (target.cols - source.cols) / 2,
        );
        let mut resized = Grid::empty(target);
        for (i, row) in self.rows().iter().enumerate() {
            for (j, &alive) in row.iter().enumerate() {
                resized.set_bit((start_row + i, start_col + j), alive);
            }
        }
        resized
    }
}

/// Screen columns taken by one rendered cell.
pub fn cell_width(glyphs: &Glyphs) -> usize {
    let glyph = usize::max(glyphs.filled.width(), glyphs.empty.width());
    usize::max(glyph + glyphs.line_space.width(), 1)
}

/// The largest canvas that renders inside a terminal of `terminal` rows and
/// columns, leaving room for the view's padding and footer.
pub fn fit_terminal(terminal: Dimensions, glyphs: &Glyphs) -> Dimensions {
    Dimensions {
        rows: terminal.rows.saturating_sub(VIEW_CHROME_ROWS).max(1),
        cols: (terminal.cols / cell_width(glyphs)).max(1),
    }
}

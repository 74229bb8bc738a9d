use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use itertools::Itertools;

use crate::error::{LifeError, Result};

/// A rows-by-columns size, both positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether something of size `other` fits inside `self`.
    pub fn contains(&self, other: Dimensions) -> bool {
        other.rows <= self.rows && other.cols <= self.cols
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl FromStr for Dimensions {
    type Err = LifeError;

    /// Parses `"M,N"`: exactly two comma-separated positive integers.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || LifeError::InvalidDimensions(s.to_string());
        let (rows, cols) = s
            .split(',')
            .map(|part| part.trim().parse::<usize>())
            .collect_tuple()
            .ok_or_else(invalid)?;
        match (rows, cols) {
            (Ok(rows), Ok(cols)) if rows > 0 && cols > 0 => Ok(Self { rows, cols }),
            _ => Err(invalid()),
        }
    }
}

/// One generation of cells, `true` meaning alive.
///
/// Rows are expected to share a length. The parser does not enforce this, so
/// a freshly parsed grid should go through [`Grid::check_rectangular`] before
/// being resized.
///
/// Two grids are equal when they have the same shape and the same cells,
/// which is how a fixed point is detected.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<bool>>,
}

impl Grid {
    /// An all-dead grid of the given size.
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            rows: vec![vec![false; dims.cols]; dims.rows],
        }
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Row count, and the length of the first row as the column count.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            rows: self.rows.len(),
            cols: self.rows.first().map_or(0, Vec::len),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Out-of-bounds positions read as dead.
    pub fn alive(&self, (i, j): (usize, usize)) -> bool {
        self.rows
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(false)
    }

    pub fn set_bit(&mut self, (i, j): (usize, usize), alive: bool) {
        self.rows[i][j] = alive;
    }

    pub fn population(&self) -> usize {
        self.rows.iter().flatten().filter(|&&alive| alive).count()
    }

    pub fn check_rectangular(&self) -> Result<()> {
        let expected = self.dimensions().cols;
        match self.rows.iter().find_position(|row| row.len() != expected) {
            Some((row, cells)) => Err(LifeError::RaggedRows {
                row,
                expected,
                found: cells.len(),
            }),
            None => Ok(()),
        }
    }

    /// Live cells among the up to 8 neighbours of `(i, j)`. The grid does not
    /// wrap, so positions past an edge are skipped.
    pub fn live_neighbours(&self, p: (usize, usize)) -> usize {
        neighbours(p).filter(|&q| self.alive(q)).count()
    }

    /// The next generation under B3/S23. Every cell is computed from `self`,
    /// so updates are simultaneous.
    pub fn step(&self) -> Self {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, &alive)| {
                        matches!(
                            (alive, self.live_neighbours((i, j))),
                            (true, 2 | 3) | (false, 3)
                        )
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }
}

fn neighbours((i, j): (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
    (-1isize..=1)
        .cartesian_product(-1isize..=1)
        .filter(|&d| d != (0, 0))
        .filter_map(move |(di, dj)| {
            Some((i.checked_add_signed(di)?, j.checked_add_signed(dj)?))
        })
}

impl From<Vec<Vec<bool>>> for Grid {
    fn from(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }
}

/// Writes the grid in the pattern file format: `1` alive, `0` dead.
impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for &alive in row {
                f.write_char(if alive { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[u8]]) -> Grid {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|&c| c == 1).collect::<Vec<bool>>())
            .collect::<Vec<_>>();
        Grid::from(rows)
    }

    #[test]
    fn test_neighbours() {
        let g = grid(&[&[0, 1, 0], &[0, 0, 0], &[0, 0, 0]]);
        assert_eq!(g.live_neighbours((1, 1)), 1);
        assert_eq!(g.live_neighbours((0, 1)), 0);
        assert_eq!(g.live_neighbours((2, 2)), 0);
        assert_eq!(g.live_neighbours((1, 0)), 1);
        assert_eq!(g.live_neighbours((0, 2)), 1);
        assert_eq!(g.live_neighbours((1, 2)), 1);
        assert_eq!(g.live_neighbours((0, 0)), 1);
    }

    #[test]
    fn test_neighbours_skip_self_and_edges() {
        let full = Grid::from(vec![vec![true; 3]; 3]);
        assert_eq!(full.live_neighbours((1, 1)), 8);
        assert_eq!(full.live_neighbours((0, 0)), 3);
        assert_eq!(full.live_neighbours((0, 1)), 5);
        assert_eq!(full.live_neighbours((2, 2)), 3);
    }

    #[test]
    fn test_no_wrap() {
        // Opposite corners would be neighbours on a torus.
        let g = grid(&[&[1, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 1]]);
        assert_eq!(g.live_neighbours((2, 3)), 0);
        assert_eq!(g.live_neighbours((0, 0)), 0);
    }

    #[test]
    fn test_step_keeps_dimensions() {
        let g = grid(&[&[1, 1, 0, 1, 0], &[0, 1, 1, 0, 0]]);
        assert_eq!(g.step().dimensions(), g.dimensions());
        let empty = Grid::empty(Dimensions::new(4, 7));
        assert_eq!(empty.step(), empty);
    }

    #[test]
    fn test_blinker() {
        let horizontal = grid(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 0]]);
        let vertical = grid(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
        assert_eq!(horizontal.step(), vertical);
        assert_eq!(vertical.step(), horizontal);
    }

    #[test]
    fn test_overcrowding() {
        // The centre has 4 neighbours and dies, the corners are born.
        let g = grid(&[&[0, 1, 0], &[1, 1, 1], &[0, 1, 0]]);
        assert_eq!(g.step(), grid(&[&[1, 1, 1], &[1, 0, 1], &[1, 1, 1]]));
    }

    #[test]
    fn test_dimensions_from_str() {
        assert_eq!("3,4".parse::<Dimensions>().unwrap(), Dimensions::new(3, 4));
        assert_eq!(" 10 , 2 ".parse::<Dimensions>().unwrap(), Dimensions::new(10, 2));
        for bad in ["", "3", "3,4,5", "3x4", "a,4", "0,4", "4,-1"] {
            assert!(
                matches!(bad.parse::<Dimensions>(), Err(LifeError::InvalidDimensions(s)) if s == bad),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_check_rectangular() {
        assert!(grid(&[&[0, 1], &[1, 0]]).check_rectangular().is_ok());
        let err = grid(&[&[0, 1], &[1, 0, 1]]).check_rectangular().unwrap_err();
        assert!(matches!(
            err,
            LifeError::RaggedRows {
                row: 1,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_display() {
        let g = grid(&[&[0, 1], &[1, 1], &[0, 0]]);
        assert_eq!(g.to_string(), "01\n11\n00");
        assert_eq!(g.population(), 3);
    }
}

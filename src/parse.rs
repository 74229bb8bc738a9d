use std::str::FromStr;

use crate::{
    error::{LifeError, Result},
    grid::Grid,
};

impl Grid {
    /// Reads a pattern from raw bytes, as found in a pattern file.
    ///
    /// A byte that is not valid UTF-8 is reported as an invalid character at
    /// its position, the same as any other byte outside the pattern alphabet.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match std::str::from_utf8(bytes) {
            Ok(s) => s.parse(),
            Err(e) => {
                let valid = &bytes[..e.valid_up_to()];
                // Everything before `valid_up_to` is valid UTF-8.
                let prefix = std::str::from_utf8(valid).unwrap_or_default();
                prefix.parse::<Grid>()?;
                let (line, column) = position_after(prefix);
                Err(LifeError::InvalidCharacter {
                    ch: char::from(bytes[e.valid_up_to()]),
                    line,
                    column: column + 1,
                })
            }
        }
    }
}

/// Line and column (1-based line, column of the last char) at the end of `s`.
fn position_after(s: &str) -> (usize, usize) {
    let line = 1 + s.matches('\n').count();
    let column = s.rsplit('\n').next().map_or(0, |last| last.chars().count());
    (line, column)
}

impl FromStr for Grid {
    type Err = LifeError;

    /// Reads a pattern: `1` alive, `0` dead, one row per line.
    ///
    /// Surrounding whitespace is trimmed and spaces are dropped wherever they
    /// appear, so they never become cells. Rows are taken as written; a ragged
    /// pattern parses fine and is only caught by [`Grid::check_rectangular`].
    fn from_str(s: &str) -> Result<Self> {
        let mut rows = vec![];
        let mut row = vec![];
        let body = s.trim_start();
        let (mut line, mut column) = position_after(&s[..s.len() - body.len()]);
        for c in body.trim_end().chars() {
            column += 1;
            match c {
                '1' => row.push(true),
                '0' => row.push(false),
                ' ' => (),
                '\n' => {
                    rows.push(std::mem::take(&mut row));
                    (line, column) = (line + 1, 0);
                }
                ch => return Err(LifeError::InvalidCharacter { ch, line, column }),
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
        Ok(rows.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let g: Grid = "010\n111\n000".parse().unwrap();
        assert_eq!(
            g.rows(),
            [
                vec![false, true, false],
                vec![true, true, true],
                vec![false, false, false]
            ]
        );
    }

    #[test]
    fn test_surrounding_whitespace() {
        let g: Grid = "\n\n  01\n10\n\n\n".parse().unwrap();
        assert_eq!(g.to_string(), "01\n10");
    }

    #[test]
    fn test_spaces_are_filler() {
        let g: Grid = "0 1 0\n 1 1 1 ".parse().unwrap();
        assert_eq!(g.to_string(), "010\n111");
    }

    #[test]
    fn test_interior_blank_line_is_empty_row() {
        let g: Grid = "11\n\n11".parse().unwrap();
        assert_eq!(g.rows().len(), 3);
        assert!(g.rows()[1].is_empty());
        assert!(g.check_rectangular().is_err());
    }

    #[test]
    fn test_ragged_rows_pass_through() {
        let g: Grid = "1\n101\n10".parse().unwrap();
        let lens: Vec<_> = g.rows().iter().map(Vec::len).collect();
        assert_eq!(lens, [1, 3, 2]);
    }

    #[test]
    fn test_empty_input() {
        assert!("".parse::<Grid>().unwrap().is_empty());
        assert!(" \n \n".parse::<Grid>().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_character_counts_leading_lines() {
        let err = "\n\n  01\n0?".parse::<Grid>().unwrap_err();
        assert!(matches!(
            err,
            LifeError::InvalidCharacter {
                ch: '?',
                line: 4,
                column: 2
            }
        ));
    }

    #[test]
    fn test_from_bytes() {
        let g = Grid::from_bytes(b"01\n10\n").unwrap();
        assert_eq!(g.to_string(), "01\n10");
    }

    #[test]
    fn test_from_bytes_not_utf8() {
        let err = Grid::from_bytes(&[b'0', b'1', b'\n', b'0', 0xff, b'1']).unwrap_err();
        assert!(matches!(
            err,
            LifeError::InvalidCharacter {
                ch: '\u{ff}',
                line: 2,
                column: 2
            }
        ));
    }

    #[test]
    fn test_from_bytes_reports_earlier_character_first() {
        let err = Grid::from_bytes(&[b'x', b'0', 0xff]).unwrap_err();
        assert!(matches!(
            err,
            LifeError::InvalidCharacter {
                ch: 'x',
                line: 1,
                column: 1
            }
        ));
    }

    #[test]
    fn test_invalid_character() {
        let err = "010\n0x0".parse::<Grid>().unwrap_err();
        assert!(matches!(
            err,
            LifeError::InvalidCharacter {
                ch: 'x',
                line: 2,
                column: 2
            }
        ));
        for bad in ["2", "o", "01\t1", "01\r\n10", "."] {
            assert!(
                matches!(bad.parse::<Grid>(), Err(LifeError::InvalidCharacter { .. })),
                "{bad:?} should be rejected"
            );
        }
    }
}

use std::path::PathBuf;

use thiserror::Error;

use crate::grid::Dimensions;

#[derive(Error, Debug)]
pub enum LifeError {
    #[error("Error opening file {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error reading file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error parsing canvas: unknown character {ch:?} at line {line}, column {column}")]
    InvalidCharacter { ch: char, line: usize, column: usize },

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Pattern row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Pattern has no cells")]
    EmptyPattern,

    #[error("Pattern is {pattern}, but the terminal only fits {terminal}")]
    PatternTooLarge {
        pattern: Dimensions,
        terminal: Dimensions,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;

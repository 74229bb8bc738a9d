use std::time::Duration;

use crate::render::{Colorizer, Glyphs};

pub const DEFAULT_REFRESH_MS: u64 = 100;

/// Display settings, built once from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub glyphs: Glyphs,
    pub refresh: Duration,
    pub color: bool,
}

impl Config {
    /// Live cells are yellow while the pattern is changing and green once it
    /// has settled.
    pub fn palette(&self, stable: bool) -> Colorizer {
        match (self.color, stable) {
            (false, _) => Colorizer::None,
            (true, false) => Colorizer::Yellow,
            (true, true) => Colorizer::Green,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::default(),
            refresh: Duration::from_millis(DEFAULT_REFRESH_MS),
            color: true,
        }
    }
}

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use term_life::{config::Config, render::Glyphs};

#[derive(Parser, Debug)]
#[command(name = "term-life")]
#[command(about = "Animate Conway's Game of Life in the terminal", long_about = None)]
pub struct Cli {
    /// Pattern file: rows of 1 (alive) and 0 (dead)
    #[arg(required_unless_present = "canvas_only")]
    pub file: Option<PathBuf>,

    /// Filled cell character
    #[arg(long, default_value = "■")]
    pub filled: String,

    /// Empty cell character
    #[arg(long, default_value = " ")]
    pub empty: String,

    /// Printed after every cell
    #[arg(long, default_value = "")]
    pub line_space: String,

    /// Print an empty M,N canvas and exit
    #[arg(long, value_name = "M,N")]
    pub canvas_only: Option<String>,

    /// Refresh interval in milliseconds
    #[arg(long, value_name = "MS", default_value_t = term_life::config::DEFAULT_REFRESH_MS)]
    pub freq: u64,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            glyphs: Glyphs {
                filled: self.filled.clone(),
                empty: self.empty.clone(),
                line_space: self.line_space.clone(),
            },
            refresh: Duration::from_millis(self.freq),
            color: !self.no_color,
        }
    }
}

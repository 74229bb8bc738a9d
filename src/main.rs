use std::path::Path;

use clap::Parser;
use log::debug;
use term_life::{
    Dimensions, Grid, Result,
    app::{App, Outcome},
    config::Config,
    load::{fit_pattern, read_pattern},
    render::{Colorizer, Glyphs, render},
};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.config();
    debug!("{config:?}");

    match (&cli.canvas_only, &cli.file) {
        (Some(dims), _) => print_empty_canvas(dims),
        (None, Some(path)) => animate(path, config),
        // clap requires one of the two
        (None, None) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn print_empty_canvas(dims: &str) -> Result<()> {
    let dims: Dimensions = dims.parse()?;
    let canvas = Grid::empty(dims);
    print!("{}", render(&canvas, &Glyphs::pattern(), Colorizer::None));
    Ok(())
}

fn animate(path: &Path, config: Config) -> Result<()> {
    let pattern = read_pattern(path)?;
    let (cols, rows) = crossterm::terminal::size()?;
    let terminal = Dimensions::new(rows.into(), cols.into());
    let grid = fit_pattern(&pattern, terminal, &config.glyphs)?;

    let mut app = App::new(config, grid);
    if app.run()? == Outcome::Stable {
        // Leave the settled pattern on the normal screen.
        print!("{}", app.view());
    }
    Ok(())
}

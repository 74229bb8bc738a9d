use std::{fs::File, io::Read, path::Path};

use log::{debug, info};

use crate::{
    canvas::fit_terminal,
    error::{LifeError, Result},
    grid::{Dimensions, Grid},
    render::Glyphs,
};

/// Reads the pattern file at `path`.
pub fn read_pattern(path: &Path) -> Result<Grid> {
    let mut file = File::open(path).map_err(|source| LifeError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut bytes = vec![];
    file.read_to_end(&mut bytes)
        .map_err(|source| LifeError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    Grid::from_bytes(&bytes)
}

/// Centers `pattern` in the largest canvas that `terminal` can show.
pub fn fit_pattern(pattern: &Grid, terminal: Dimensions, glyphs: &Glyphs) -> Result<Grid> {
    if pattern.is_empty() {
        return Err(LifeError::EmptyPattern);
    }
    pattern.check_rectangular()?;
    let size = pattern.dimensions();
    let canvas = fit_terminal(terminal, glyphs);
    if !canvas.contains(size) {
        return Err(LifeError::PatternTooLarge {
            pattern: size,
            terminal: canvas,
        });
    }
    info!("centering {size} pattern in {canvas} canvas (terminal {terminal})");
    Ok(pattern.centered_in(canvas))
}

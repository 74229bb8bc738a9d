//! Conway's Game of Life on a finite grid, animated in the terminal.

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod grid;
pub mod life;
pub mod load;
mod parse;
pub mod render;


pub use crate::{
    error::{LifeError, Result},
    grid::{Dimensions, Grid},
    life::{Life, Tick},
};

use crate::grid::Grid;

/// What a call to [`Life::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Stepped to a new, different generation.
    Advanced,
    /// Stepped, and the new generation equals the previous one.
    Stable,
    /// Already stable; nothing left to do.
    Done,
}

/// A running simulation: the current generation plus whether it has reached
/// a fixed point.
#[derive(Clone, Debug)]
pub struct Life {
    grid: Grid,
    generation: u64,
    stable: bool,
}

impl Life {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            stable: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_stable(&self) -> bool {
        self.stable
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn tick(&mut self) -> Tick {
        if self.stable {
            return Tick::Done;
        }
        let next = self.grid.step();
        self.stable = next == self.grid;
        self.grid = next;
        self.generation += 1;
        if self.stable {
            Tick::Stable
        } else {
            Tick::Advanced
        }
    }
}

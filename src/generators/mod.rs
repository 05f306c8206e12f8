mod cave;
mod recur_backtrack;

pub use cave::cellular_automata;
pub use recur_backtrack::recursive_backtrack;

use crate::{dungeon::Grid, rng::Lcg};

/// Tuning for the cellular automata cave generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaveParams {
    /// Number of smoothing passes.
    pub iterations: usize,
    /// Chance, in percent, that an interior cell starts out as a wall.
    pub wall_probability: i32,
}

impl Default for CaveParams {
    fn default() -> Self {
        Self {
            iterations: 5,
            wall_probability: 45,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    CellularAutomata(CaveParams),
    RecurBacktrack,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::CellularAutomata(_) => write!(f, "Cellular Automata"),
            Generator::RecurBacktrack => write!(f, "Recursive Backtracker"),
        }
    }
}

/// Resets `grid` to walls and repopulates it with the chosen algorithm.
pub fn generate(grid: &mut Grid, rng: &mut Lcg, generator: Generator) {
    match generator {
        Generator::CellularAutomata(params) => cellular_automata(grid, rng, params),
        Generator::RecurBacktrack => recursive_backtrack(grid, rng),
    }
}

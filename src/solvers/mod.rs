mod best_first;
mod route;

pub use best_first::find_route;
pub use route::{path_glyph, render_route};

use crate::dungeon::Point;

/// Cost of a node that has not been reached yet. Larger than any path on a grid this size.
pub const UNREACHED: u32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    AStar,
    Dijkstra,
}

impl Solver {
    /// A* steers with the Manhattan estimate; Dijkstra expands by cost alone.
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Solver::AStar)
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::AStar => write!(f, "A* Search"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
        }
    }
}

/// A route found by [`find_route`], from start to end inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    points: Vec<Point>,
}

impl Route {
    pub(crate) fn new(points: Vec<Point>) -> Self {
        Route { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of moves between start and end.
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

use super::{Route, Solver, UNREACHED};
use crate::dungeon::{Grid, Point};

/// Neighbour offsets in expansion order: S, N, E, W, SE, SW, NE, NW.
/// Every move costs 1, diagonals included.
const STEPS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

struct SearchNode {
    /// Cost to reach this node from the start
    g: u32,
    /// Estimated cost to the goal, zero for Dijkstra
    h: u32,
    /// g + h, the priority in the open set
    f: u32,
    /// Index of the node this one was reached from
    parent: Option<usize>,
    open: bool,
    closed: bool,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: UNREACHED,
            h: 0,
            f: UNREACHED,
            parent: None,
            open: false,
            closed: false,
        }
    }
}

/// Node table for one search, indexed row-major like the grid.
struct NodeTable {
    nodes: Vec<SearchNode>,
    width: i32,
}

impl NodeTable {
    fn new(grid: &Grid) -> Self {
        let len = grid.width() as usize * grid.height() as usize;
        NodeTable {
            nodes: std::iter::repeat_with(SearchNode::default).take(len).collect(),
            width: grid.width(),
        }
    }

    fn idx(&self, p: Point) -> usize {
        p.y as usize * self.width as usize + p.x as usize
    }

    fn point(&self, idx: usize) -> Point {
        let width = self.width as usize;
        Point::new((idx % width) as i32, (idx / width) as i32)
    }

    /// Follows parent links back from `goal` and returns the points start-first.
    fn trace(&self, goal: usize) -> Vec<Point> {
        let mut points = Vec::new();
        let mut current = Some(goal);
        while let Some(idx) = current {
            points.push(self.point(idx));
            current = self.nodes[idx].parent;
        }
        points.reverse();
        points
    }
}

/// Removes and returns the open node with the lowest `f`.
///
/// Scans linearly and keeps the first strictly smaller value, so among equal `f` the
/// node sitting earliest in the open list wins. The hole is filled by the last entry.
fn pop_lowest(open: &mut Vec<usize>, table: &NodeTable) -> Option<usize> {
    let first = *open.first()?;
    let mut best = 0;
    let mut best_f = table.nodes[first].f;
    for (i, &idx) in open.iter().enumerate().skip(1) {
        if table.nodes[idx].f < best_f {
            best = i;
            best_f = table.nodes[idx].f;
        }
    }
    Some(open.swap_remove(best))
}

/// Searches for a shortest route from `start` to `end` with 8-directional unit-cost moves
/// that avoid walls.
///
/// Both points must be inside the grid; callers are expected to reject anything else.
/// Returns `None` when the end cannot be reached.
pub fn find_route(grid: &Grid, start: Point, end: Point, solver: Solver) -> Option<Route> {
    debug_assert!(grid.in_bounds(start) && grid.in_bounds(end));

    let heuristic = |p: Point| {
        if solver.uses_heuristic() {
            p.manhattan(end)
        } else {
            0
        }
    };

    let mut table = NodeTable::new(grid);
    let start_idx = table.idx(start);
    {
        let node = &mut table.nodes[start_idx];
        node.g = 0;
        node.h = heuristic(start);
        node.f = node.g + node.h;
        node.open = true;
    }
    let mut open = vec![start_idx];
    let mut expanded = 0usize;

    while let Some(current) = pop_lowest(&mut open, &table) {
        expanded += 1;
        table.nodes[current].open = false;
        table.nodes[current].closed = true;

        let current_point = table.point(current);
        if current_point == end {
            let route = Route::new(table.trace(current));
            tracing::debug!(
                "[search] {} reached {:?} from {:?} in {} steps, {} nodes expanded",
                solver,
                end,
                start,
                route.steps(),
                expanded
            );
            return Some(route);
        }

        let tentative_g = table.nodes[current].g + 1;
        for (dx, dy) in STEPS {
            let np = current_point.offset(dx, dy);
            if !grid.in_bounds(np) || grid[np].is_wall() {
                continue;
            }
            let ni = table.idx(np);
            let neighbor = &mut table.nodes[ni];
            if neighbor.closed || tentative_g >= neighbor.g {
                continue;
            }

            neighbor.parent = Some(current);
            neighbor.g = tentative_g;
            neighbor.h = heuristic(np);
            neighbor.f = neighbor.g + neighbor.h;
            if !neighbor.open {
                neighbor.open = true;
                open.push(ni);
            }
        }
    }

    tracing::debug!(
        "[search] {} found no route from {:?} to {:?}, {} nodes expanded",
        solver,
        start,
        end,
        expanded
    );
    None
}

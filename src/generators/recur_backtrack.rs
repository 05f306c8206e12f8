use crate::{
    dungeon::{Grid, Point, Tile},
    rng::Lcg,
};

/// Offsets to the lattice cells two steps away, in the order they are considered:
/// south, north, east, west.
const LATTICE_STEPS: [(i32, i32); 4] = [(0, 2), (0, -2), (2, 0), (-2, 0)];

/// Carves a perfect maze with a depth-first recursive backtracker.
///
/// Cells with two odd coordinates are rooms; the cells between them are walls that get
/// knocked out as the carver moves. The outermost ring is never carved.
pub fn recursive_backtrack(grid: &mut Grid, rng: &mut Lcg) {
    grid.fill(Tile::Wall);

    if grid.width() < 3 || grid.height() < 3 {
        return;
    }

    // Initialize the starting point on a random odd cell
    let start = Point::new(
        lattice_start(rng.next_in_range(0, grid.width() / 2), grid.width()),
        lattice_start(rng.next_in_range(0, grid.height() / 2), grid.height()),
    );
    grid.set(start, Tile::Floor);

    // The stack keeps only carved lattice cells
    let mut stack = vec![start];
    let mut carved = 1usize;

    while let Some(&cell) = stack.last() {
        let neighbors = unvisited_neighbors(cell, grid);

        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let idx = rng.next_in_range(0, neighbors.len() as i32 - 1) as usize;
        let next = neighbors[idx];

        // Knock out the wall between the two cells
        let between = Point::new(cell.x + (next.x - cell.x) / 2, cell.y + (next.y - cell.y) / 2);
        grid.set(next, Tile::Floor);
        grid.set(between, Tile::Floor);
        carved += 1;

        stack.push(next);
    }

    tracing::debug!(
        "[maze] carved {} lattice cells from {:?} on a {}x{} grid",
        carved,
        start,
        grid.width(),
        grid.height()
    );
}

/// Maps a draw from `0..=len / 2` to an odd coordinate. Draws that would land on or past
/// the far border are pulled back to the last interior odd coordinate.
fn lattice_start(draw: i32, len: i32) -> i32 {
    let coord = draw * 2 + 1;
    if coord > len - 2 {
        (len - 3) / 2 * 2 + 1
    } else {
        coord
    }
}

/// Lattice cells two steps away that are inside the border and still walls.
fn unvisited_neighbors(cell: Point, grid: &Grid) -> Vec<Point> {
    LATTICE_STEPS
        .iter()
        .map(|&(dx, dy)| cell.offset(dx, dy))
        .filter(|&p| grid.in_bounds(p) && !grid.is_boundary(p) && grid[p] == Tile::Wall)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::*;

    fn maze(seed: u32, width: i32, height: i32) -> Grid {
        let mut grid = Grid::new(width, height, Tile::Floor);
        recursive_backtrack(&mut grid, &mut Lcg::new(seed));
        grid
    }

    fn floor_count(grid: &Grid, pred: impl Fn(Point) -> bool) -> usize {
        grid.points()
            .filter(|&p| pred(p) && grid[p] == Tile::Floor)
            .count()
    }

    #[test]
    fn test_get_unvisited_neighbors() {
        let grid = Grid::new(7, 7, Tile::Wall);
        let neighbors = unvisited_neighbors(Point::new(3, 3), &grid);
        assert_eq!(
            neighbors,
            vec![
                Point::new(3, 5),
                Point::new(3, 1),
                Point::new(5, 3),
                Point::new(1, 3)
            ]
        );
        // The border ring is never a candidate
        let neighbors = unvisited_neighbors(Point::new(1, 1), &grid);
        assert_eq!(neighbors, vec![Point::new(1, 3), Point::new(3, 1)]);
    }

    #[test]
    fn test_lattice_start() {
        assert_eq!(lattice_start(0, 79), 1);
        assert_eq!(lattice_start(38, 79), 77);
        // 79 and 25 are past the grid
        assert_eq!(lattice_start(39, 79), 77);
        assert_eq!(lattice_start(12, 25), 23);
        // Even sizes: 9 is the border of a 10-wide grid
        assert_eq!(lattice_start(4, 10), 7);
        assert_eq!(lattice_start(5, 10), 7);
    }

    #[test]
    fn test_out_of_range_start_is_pulled_inside() {
        // Seed 29 draws x = 39, which would put the start at x = 79
        let mut rng = Lcg::new(29);
        assert_eq!(rng.next_in_range(0, 39), 39);

        let grid = maze(29, 79, 25);
        assert_eq!(floor_count(&grid, |p| p.x % 2 == 1 && p.y % 2 == 1), 39 * 12);
        assert!(
            grid.points()
                .filter(|&p| grid.is_boundary(p))
                .all(|p| grid[p] == Tile::Wall)
        );
    }

    #[test]
    fn test_maze_is_deterministic() {
        assert_eq!(maze(42, 79, 25), maze(42, 79, 25));
        assert_ne!(maze(42, 79, 25), maze(43, 79, 25));
    }

    #[test]
    fn test_maze_seed_42_top_rows() {
        let grid = maze(42, 79, 25);
        let rows = grid.rows();
        let expected = [
            "###############################################################################",
            "#       #           #   #     #       # #       #   #     #       #         # #",
            "##### # ### ##### # # # # ### # ##### # # # ### # # # ### ### ### # ##### # # #",
        ];
        for (row, expected) in rows.iter().zip(expected) {
            assert_eq!(*row, expected.replace('#', "█"));
        }
    }

    #[test]
    fn test_maze_is_spanning_tree() {
        for seed in [0, 1, 42, 7777, u32::MAX] {
            let grid = maze(seed, 79, 25);
            let rooms = floor_count(&grid, |p| p.x % 2 == 1 && p.y % 2 == 1);
            let corridors = floor_count(&grid, |p| (p.x + p.y) % 2 == 1);
            let pillars = floor_count(&grid, |p| p.x % 2 == 0 && p.y % 2 == 0);

            // Every odd cell is reached on a connected lattice
            assert_eq!(rooms, 39 * 12);
            // A tree over n rooms has n - 1 edges
            assert_eq!(corridors, rooms - 1);
            assert_eq!(pillars, 0);

            // All floor is connected through cardinal moves
            let start = Point::new(1, 1);
            let mut seen = HashSet::from([start]);
            let mut queue = VecDeque::from([start]);
            while let Some(p) = queue.pop_front() {
                for (dx, dy) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
                    let n = p.offset(dx, dy);
                    if grid.get(n) == Some(Tile::Floor) && seen.insert(n) {
                        queue.push_back(n);
                    }
                }
            }
            assert_eq!(seen.len(), rooms + corridors);
        }
    }

    #[test]
    fn test_even_sized_grid_keeps_border() {
        for seed in 0..10 {
            let grid = maze(seed, 10, 8);
            assert!(
                grid.points()
                    .filter(|&p| grid.is_boundary(p))
                    .all(|p| grid[p] == Tile::Wall)
            );
            assert!(floor_count(&grid, |_| true) > 0);
        }
    }

    #[test]
    fn test_tiny_grid_stays_solid() {
        let grid = maze(3, 2, 2);
        assert!(grid.tiles().iter().all(|&t| t == Tile::Wall));
    }
}

use crate::{
    dungeon::{Grid, Point, Tile},
    generators::CaveParams,
    rng::Lcg,
};

/// Offsets of the 8 cells surrounding a cell.
const RING: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Grows a cave by seeding random walls and smoothing them with cellular automata rules.
///
/// The outermost ring is never touched and stays wall. No connectivity is guaranteed
/// between the resulting open areas.
pub fn cellular_automata(grid: &mut Grid, rng: &mut Lcg, params: CaveParams) {
    grid.fill(Tile::Wall);

    let interior = interior_points(grid).collect::<Vec<_>>();

    // Random fill; the roll covers 0..=100
    for &p in &interior {
        let tile = if rng.next_in_range(0, 100) < params.wall_probability {
            Tile::Wall
        } else {
            Tile::Floor
        };
        grid.set(p, tile);
    }

    for _ in 0..params.iterations {
        smooth_pass(grid, &interior);
    }

    tracing::debug!(
        "[cave] generated {}x{} cave, {} passes, {} floor tiles",
        grid.width(),
        grid.height(),
        params.iterations,
        grid.tiles().iter().filter(|&&t| t == Tile::Floor).count()
    );
}

/// Cells not on the outermost ring, row-major.
fn interior_points(grid: &Grid) -> impl Iterator<Item = Point> + use<> {
    let (width, height) = (grid.width(), grid.height());
    (1..height - 1).flat_map(move |y| (1..width - 1).map(move |x| Point::new(x, y)))
}

/// One smoothing pass: walls with fewer than 4 wall neighbours open up, floors with more
/// than 4 fill in.
fn smooth_pass(grid: &mut Grid, interior: &[Point]) {
    // Every cell in a pass must see the neighbours from the previous pass
    let snapshot = grid.clone();
    for &p in interior {
        let walls = wall_neighbors(&snapshot, p);
        match snapshot[p] {
            Tile::Wall if walls < 4 => grid.set(p, Tile::Floor),
            Tile::Floor if walls > 4 => grid.set(p, Tile::Wall),
            _ => {}
        }
    }
}

/// Count of wall tiles among the 8 neighbours of an interior cell.
fn wall_neighbors(grid: &Grid, p: Point) -> usize {
    RING.iter()
        .filter(|&&(dx, dy)| grid[p.offset(dx, dy)].is_wall())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cave(seed: u32, params: CaveParams) -> Grid {
        let mut grid = Grid::new(79, 25, Tile::Floor);
        cellular_automata(&mut grid, &mut Lcg::new(seed), params);
        grid
    }

    #[test]
    fn test_cave_is_deterministic() {
        for seed in [0, 1, 42, 123_456_789] {
            assert_eq!(
                cave(seed, CaveParams::default()),
                cave(seed, CaveParams::default())
            );
        }
        assert_ne!(
            cave(1, CaveParams::default()),
            cave(2, CaveParams::default())
        );
    }

    #[test]
    fn test_cave_border_is_wall() {
        for seed in 0..20 {
            for wall_probability in [0, 45, 100] {
                let grid = cave(
                    seed,
                    CaveParams {
                        iterations: 5,
                        wall_probability,
                    },
                );
                assert!(
                    grid.points()
                        .filter(|&p| grid.is_boundary(p))
                        .all(|p| grid[p] == Tile::Wall)
                );
            }
        }
    }

    #[test]
    fn test_cave_seed_42_top_rows() {
        let grid = cave(42, CaveParams::default());
        let rows = grid.rows();
        assert_eq!(rows[0], "█".repeat(79));
        let expected = [
            "##########   ###############   ################################################",
            "##            #############     ##  ###########  ###############    #####  ####",
        ];
        for (row, expected) in rows[1..].iter().zip(expected) {
            assert_eq!(*row, expected.replace('#', "█"));
        }
    }

    #[test]
    fn test_zero_probability_never_walls() {
        let grid = cave(
            9,
            CaveParams {
                iterations: 0,
                wall_probability: 0,
            },
        );
        let floors = grid.tiles().iter().filter(|&&t| t == Tile::Floor).count();
        assert_eq!(floors, 77 * 23);
    }

    #[test]
    fn test_smoothing_rule() {
        // A lone wall in an open room has no wall neighbours and disappears;
        // a floor cell boxed in by walls fills in
        let room = Grid::from_rows(&[
            "#######", //
            "#     #", //
            "#  #  #", //
            "#     #", //
            "#######", //
        ]);
        assert_eq!(wall_neighbors(&room, Point::new(3, 2)), 0);
        assert_eq!(wall_neighbors(&room, Point::new(1, 1)), 5);

        let boxed_in = Grid::from_rows(&[
            "#####", //
            "#####", //
            "## ##", //
            "#####", //
            "#####", //
        ]);
        assert_eq!(wall_neighbors(&boxed_in, Point::new(2, 2)), 8);
    }

    #[test]
    fn test_smooth_pass() {
        // Corners see 6 walls and fill in, edges see exactly 4 and stay open,
        // the lone centre wall sees none and opens up
        let mut grid = Grid::from_rows(&[
            "#####", //
            "#   #", //
            "# # #", //
            "#   #", //
            "#####", //
        ]);
        let interior = interior_points(&grid).collect::<Vec<_>>();
        smooth_pass(&mut grid, &interior);
        assert_eq!(
            grid,
            Grid::from_rows(&[
                "#####", //
                "## ##", //
                "#   #", //
                "## ##", //
                "#####", //
            ])
        );

        // A wall with exactly 4 wall neighbours stays
        let mut grid = Grid::from_rows(&[
            "#####", //
            "#####", //
            "### #", //
            "#   #", //
            "#####", //
        ]);
        assert_eq!(wall_neighbors(&grid, Point::new(2, 2)), 4);
        let interior = interior_points(&grid).collect::<Vec<_>>();
        smooth_pass(&mut grid, &interior);
        assert_eq!(grid[Point::new(2, 2)], Tile::Wall);
    }
}

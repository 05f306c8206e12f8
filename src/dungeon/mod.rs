mod grid;
pub mod tile;

pub use grid::{Grid, Point};
pub use tile::{RouteGlyph, Tile};

use crate::{
    generators::{self, CaveParams, Generator},
    rng::Lcg,
    solvers::{self, Route, Solver},
};

/// A dungeon map together with the random sequence that generates it.
///
/// Cloning gives an independent working copy, which is how routes are drawn without
/// disturbing the generated map.
#[derive(Debug, Clone)]
pub struct Dungeon {
    grid: Grid,
    rng: Lcg,
}

impl Dungeon {
    pub const WIDTH: i32 = 79;
    pub const HEIGHT: i32 = 25;

    /// Creates a dungeon filled with walls, seeded for generation.
    pub fn new(seed: u32) -> Self {
        Dungeon {
            grid: Grid::new(Dungeon::WIDTH, Dungeon::HEIGHT, Tile::Wall),
            rng: Lcg::new(seed),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        self.grid.in_bounds(p)
    }

    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.grid.get(p)
    }

    /// Writes a tile; points outside the dungeon are ignored.
    pub fn set(&mut self, p: Point, tile: Tile) {
        self.grid.set(p, tile);
    }

    pub fn generate(&mut self, generator: Generator) {
        generators::generate(&mut self.grid, &mut self.rng, generator);
    }

    pub fn generate_cave(&mut self, params: CaveParams) {
        self.generate(Generator::CellularAutomata(params));
    }

    pub fn generate_maze(&mut self) {
        self.generate(Generator::RecurBacktrack);
    }

    /// Searches for a route and draws it onto this dungeon's floor tiles.
    ///
    /// Both points must be in bounds. Run this on a clone to keep the generated map clean.
    pub fn find_route(&mut self, start: Point, end: Point, solver: Solver) -> Option<Route> {
        let route = solvers::find_route(&self.grid, start, end, solver)?;
        solvers::render_route(&mut self.grid, &route);
        Some(route)
    }

    /// Places the start and end markers, overwriting whatever is there.
    pub fn mark_endpoints(&mut self, start: Point, end: Point) {
        self.grid.set(start, Tile::Start);
        self.grid.set(end, Tile::End);
    }

    /// The map framed with X axis labels along the top, Y labels down the side and a
    /// border around the tiles.
    pub fn render_to_text(&self) -> Vec<String> {
        let width = self.width();
        let indent = "    ";
        let border = format!("   +{}+", "-".repeat(width as usize));

        let tens = (0..width)
            .map(|x| {
                if x % 10 == 0 {
                    char::from_digit((x / 10 % 10) as u32, 10).unwrap_or(' ')
                } else {
                    ' '
                }
            })
            .collect::<String>();
        let units = (0..width)
            .map(|x| char::from_digit((x % 10) as u32, 10).unwrap_or(' '))
            .collect::<String>();

        let mut lines = vec![
            format!("{indent}{tens}"),
            format!("{indent}{units}"),
            border.clone(),
        ];
        lines.extend(
            self.grid
                .rows()
                .into_iter()
                .enumerate()
                .map(|(y, row)| format!("{y:>2} |{row}|")),
        );
        lines.push(border);
        lines
    }
}

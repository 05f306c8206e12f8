use super::tile::Tile;

/// A coordinate on the grid. Signed so that neighbour offsets can step off the edge and be
/// rejected by the bounds check instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Manhattan (L1) distance between two points.
    pub fn manhattan(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

/// Fixed-size tile buffer stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Tile]>,
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, tile: Tile) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let data = vec![tile; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Builds a grid from text rows, `#` for walls and anything else for floor.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let mut grid = Grid::new(width, height, Tile::Floor);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    grid.set(Point::new(x as i32, y as i32), Tile::Wall);
                }
            }
        }
        grid
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.data
    }

    pub fn fill(&mut self, tile: Tile) {
        self.data.fill(tile);
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// True for cells on the outermost ring.
    pub fn is_boundary(&self, p: Point) -> bool {
        p.x == 0 || p.y == 0 || p.x == self.width - 1 || p.y == self.height - 1
    }

    fn ravel_index(&self, p: Point) -> usize {
        p.y as usize * self.width as usize + p.x as usize
    }

    pub fn get(&self, p: Point) -> Option<Tile> {
        self.in_bounds(p).then(|| self.data[self.ravel_index(p)])
    }

    /// Writes `tile` at `p`. Writes outside the grid are ignored.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if self.in_bounds(p) {
            let idx = self.ravel_index(p);
            self.data[idx] = tile;
        }
    }

    /// Iterates over every point in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    /// Plain text rows, one `String` per grid row.
    pub fn rows(&self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height as usize];
        }
        self.data
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|t| t.symbol()).collect())
            .collect()
    }
}

impl std::ops::Index<Point> for Grid {
    type Output = Tile;

    fn index(&self, p: Point) -> &Self::Output {
        debug_assert!(self.in_bounds(p), "{:?} is out of bounds", p);
        &self.data[self.ravel_index(p)]
    }
}

use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// Represents a cell in the dungeon grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
    /// Marker placed on the first cell of a route.
    Start,
    /// Marker placed on the last cell of a route.
    End,
    /// A cell on a rendered route, drawn with a box-drawing glyph.
    Route(RouteGlyph),
}

/// Box-drawing glyphs used to draw a route through the dungeon.
///
/// Corner names list the two neighbours the glyph connects, e.g. `UpRight` is `└`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGlyph {
    Vertical,
    Horizontal,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
    /// Fallback for combinations no other glyph matches.
    Junction,
}

impl RouteGlyph {
    pub fn symbol(self) -> char {
        match self {
            RouteGlyph::Vertical => '│',
            RouteGlyph::Horizontal => '─',
            RouteGlyph::UpRight => '└',
            RouteGlyph::UpLeft => '┘',
            RouteGlyph::DownRight => '┌',
            RouteGlyph::DownLeft => '┐',
            RouteGlyph::Junction => '+',
        }
    }
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const TILE_WIDTH: usize = 1;

    /// Plain character used in text output.
    pub fn symbol(self) -> char {
        match self {
            Tile::Wall => '█',
            Tile::Floor => ' ',
            Tile::Start => 'S',
            Tile::End => 'E',
            Tile::Route(glyph) => glyph.symbol(),
        }
    }

    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }

    /// Terminal-coloured version of [`Tile::symbol`].
    pub fn styled(self) -> StyledContent<char> {
        let symbol = self.symbol();
        match self {
            Tile::Wall => symbol.with(Color::DarkGrey),
            Tile::Floor => symbol.with(Color::Reset),
            Tile::Start => symbol.with(Color::Green).bold(),
            Tile::End => symbol.with(Color::Red).bold(),
            Tile::Route(_) => symbol.with(Color::Yellow),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.symbol();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthChar;
            assert_eq!(
                symbol.width(),
                Some(Tile::TILE_WIDTH),
                "Each tile must occupy exactly one character width."
            );
        }

        write!(f, "{}", symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthChar;

    const ALL_TILES: [Tile; 11] = [
        Tile::Wall,
        Tile::Floor,
        Tile::Start,
        Tile::End,
        Tile::Route(RouteGlyph::Vertical),
        Tile::Route(RouteGlyph::Horizontal),
        Tile::Route(RouteGlyph::UpRight),
        Tile::Route(RouteGlyph::UpLeft),
        Tile::Route(RouteGlyph::DownRight),
        Tile::Route(RouteGlyph::DownLeft),
        Tile::Route(RouteGlyph::Junction),
    ];

    #[test]
    fn test_every_tile_is_one_column_wide() {
        for tile in ALL_TILES {
            assert_eq!(tile.symbol().width(), Some(Tile::TILE_WIDTH), "{:?}", tile);
            assert_eq!(tile.to_string().chars().count(), 1);
        }
    }

    #[test]
    fn test_symbols_are_distinct() {
        let mut symbols = ALL_TILES.iter().map(|t| t.symbol()).collect::<Vec<_>>();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), ALL_TILES.len());
    }

    #[test]
    fn test_styled_keeps_symbol() {
        for tile in ALL_TILES {
            assert_eq!(*tile.styled().content(), tile.symbol());
        }
    }
}

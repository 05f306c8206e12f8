use super::Route;
use crate::dungeon::{Grid, Point, RouteGlyph, Tile};

/// Picks the box-drawing glyph for `current` given the route point before and after it.
///
/// Rules are checked top to bottom and the first match wins, so a turn towards the west
/// from above or below draws as a straight horizontal segment.
pub fn path_glyph(prev: Point, current: Point, next: Point) -> RouteGlyph {
    let from_up = prev.y < current.y;
    let from_down = prev.y > current.y;
    let from_left = prev.x < current.x;

    let to_up = next.y < current.y;
    let to_down = next.y > current.y;
    let to_left = next.x < current.x;
    let to_right = next.x > current.x;

    if (from_up && to_down) || (from_down && to_up) {
        RouteGlyph::Vertical
    } else if (from_left && to_right) || (to_left && !from_left) {
        RouteGlyph::Horizontal
    } else if (from_down && to_right) || (from_left && to_up) {
        RouteGlyph::UpRight
    } else if (from_down && to_left) || (!from_left && to_up) {
        RouteGlyph::UpLeft
    } else if (from_up && to_right) || (from_left && to_down) {
        RouteGlyph::DownRight
    } else if (from_up && to_left) || (!from_left && to_down) {
        RouteGlyph::DownLeft
    } else {
        RouteGlyph::Junction
    }
}

/// Draws the interior points of `route` onto `grid`.
///
/// Only floor tiles are overwritten; the two endpoints are left for the caller to mark.
pub fn render_route(grid: &mut Grid, route: &Route) {
    for window in route.points().windows(3) {
        let [prev, current, next] = [window[0], window[1], window[2]];
        if grid.get(current) == Some(Tile::Floor) {
            grid.set(current, Tile::Route(path_glyph(prev, current, next)));
        }
    }
}

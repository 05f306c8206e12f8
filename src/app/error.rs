use thiserror::Error;

use crate::dungeon::Point;

/// Problems the menu loop reports and recovers from. Only `Io` ends the session.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid choice '{0}'. Please enter a number from 1 to 6.")]
    InvalidChoice(String),

    #[error("Please generate a dungeon first (option 1 or 2).")]
    NoDungeon,

    #[error("Could not read a point from '{0}'. Enter two whole numbers, e.g. `1 1`.")]
    MalformedPoint(String),

    #[error("One or both coordinates are out of bounds: start {start}, end {end}.")]
    OutOfBounds { start: Point, end: Point },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

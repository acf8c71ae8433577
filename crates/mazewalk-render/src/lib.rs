//! Text renderings for solved mazes.
//!
//! Every rendering is first laid out as a [`Frame`] of [`Tile`]s, one per
//! grid cell, so that front ends can style tiles by [`TileKind`] before
//! printing. The free functions return the unstyled text directly.

mod frame;
mod report;

pub use frame::{Frame, Tile, TileKind};
pub use report::{Report, report};

use mazewalk_core::{Direction, DirectionCodes, Grid, Labels, MazeError, Pos};

/// Default mark for path cells in [`trace`].
pub const PATH_MARK: char = '·';

/// The grid labels row by row, with every path cell other than the two
/// endpoints replaced by `mark`.
pub fn trace(grid: &Grid, path: &[Pos], mark: char) -> String {
    Frame::trace(grid, path, mark).to_string()
}

/// Three-column rendering: walls ` # `, roads blank, ` S ` and ` E ` for
/// the endpoints, and an arrow on each intermediate path cell pointing to
/// the next one.
pub fn pretty(grid: &Grid, labels: &Labels, path: Option<&[Pos]>) -> String {
    Frame::pretty(grid, labels, path).to_string()
}

/// Like [`pretty`], but the path is given as an encoded move string which
/// is walked from the start marker.
///
/// Fails with [`MazeError::UnknownDirection`] if `moves` contains a symbol
/// `codes` does not know.
pub fn pretty_moves(
    grid: &Grid,
    labels: &Labels,
    codes: &DirectionCodes,
    moves: &str,
) -> Result<String, MazeError> {
    Frame::pretty_moves(grid, labels, codes, moves).map(|f| f.to_string())
}

/// The route as arrows, one per move.
pub fn arrows(directions: &[Direction]) -> String {
    directions.iter().map(|d| d.arrow()).collect()
}

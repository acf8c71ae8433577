//! Start/end marker lookup.

use mazewalk_core::{Grid, MazeError, Pos, Role};

/// The resolved start and end positions of a maze.
///
/// A missing marker is not an error here; the search reports it as a
/// "not found" result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Markers {
    pub start: Option<Pos>,
    pub end: Option<Pos>,
}

/// Scan the grid once, row-major, for the cells labelled `start_label` and
/// `end_label`.
///
/// Fails with [`MazeError::AmbiguousMarker`] if either label appears more
/// than once; the error lists every matching position in scan order. A cell
/// that matches `start_label` is never also counted as an end.
pub fn locate(grid: &Grid, start_label: &str, end_label: &str) -> Result<Markers, MazeError> {
    let mut starts = Vec::new();
    let mut ends = Vec::new();
    for (p, label) in grid.iter() {
        if label == start_label {
            starts.push(p);
        } else if label == end_label {
            ends.push(p);
        }
    }

    if starts.len() > 1 {
        return Err(MazeError::AmbiguousMarker {
            role: Role::Start,
            label: start_label.to_string(),
            positions: starts,
        });
    }
    if ends.len() > 1 {
        return Err(MazeError::AmbiguousMarker {
            role: Role::End,
            label: end_label.to_string(),
            positions: ends,
        });
    }

    Ok(Markers {
        start: starts.first().copied(),
        end: ends.first().copied(),
    })
}

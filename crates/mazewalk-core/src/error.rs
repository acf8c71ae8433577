//! The [`MazeError`] taxonomy shared by every mazewalk crate.
//!
//! An unsolvable maze is not an error: it comes back as a path result with
//! `found == false`. Everything here is fatal to the call that raised it.

use std::fmt;

use crate::geom::Pos;
use crate::labels::Role;

/// The structural problem found by grid validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridDefect {
    /// The grid has no rows.
    NoRows,
    /// A row has no cells.
    EmptyRow { row: usize },
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRows => f.write_str("grid has no rows"),
            Self::EmptyRow { row } => write!(f, "row {row} has no cells"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
        }
    }
}

/// Errors raised by validation, configuration, construction and search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A structural grid invariant is violated.
    MalformedGrid(GridDefect),
    /// More than one cell carries the start or end label.
    AmbiguousMarker {
        role: Role,
        label: String,
        positions: Vec<Pos>,
    },
    /// Direction codes are empty or duplicated.
    InvalidCode(String),
    /// Role labels are empty or duplicated.
    InvalidSymbolSet(String),
    /// Non-positive or otherwise unusable maze dimensions.
    InvalidDimensions(String),
    /// Unusable constructor input (empty source, bad pad token, bad mode).
    InvalidInput(String),
    /// A direction name or symbol outside the known set.
    UnknownDirection(String),
    /// The search exceeded its cell-visit budget.
    SearchAborted { visited: usize, budget: usize },
    /// The solver was asked to work on its stored maze before one was set.
    MazeNotSet,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedGrid(defect) => write!(f, "malformed grid: {defect}"),
            Self::AmbiguousMarker {
                role,
                label,
                positions,
            } => {
                write!(f, "found {} {role} cells labelled '{label}':", positions.len())?;
                for p in positions {
                    write!(f, " {p}")?;
                }
                Ok(())
            }
            Self::InvalidCode(msg) => write!(f, "invalid direction codes: {msg}"),
            Self::InvalidSymbolSet(msg) => write!(f, "invalid role labels: {msg}"),
            Self::InvalidDimensions(msg) => write!(f, "invalid dimensions: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::UnknownDirection(s) => write!(f, "unknown direction \u{201c}{s}\u{201d}"),
            Self::SearchAborted { visited, budget } => {
                write!(f, "search aborted after visiting {visited} cells (budget {budget})")
            }
            Self::MazeNotSet => f.write_str("no maze has been set"),
        }
    }
}

impl std::error::Error for MazeError {}

impl From<GridDefect> for MazeError {
    fn from(defect: GridDefect) -> Self {
        Self::MalformedGrid(defect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_marker_lists_positions() {
        let e = MazeError::AmbiguousMarker {
            role: Role::Start,
            label: "*".into(),
            positions: vec![Pos::new(0, 0), Pos::new(0, 1)],
        };
        assert_eq!(e.to_string(), "found 2 start cells labelled '*': (0, 0) (0, 1)");
    }

    #[test]
    fn defect_converts_into_malformed_grid() {
        let e: MazeError = GridDefect::EmptyRow { row: 3 }.into();
        assert_eq!(e.to_string(), "malformed grid: row 3 has no cells");
    }
}

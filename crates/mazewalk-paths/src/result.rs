//! The structured outcome of a maze search.

use std::fmt;

use mazewalk_core::{Dims, Direction, Pos};

use crate::locate::Markers;

/// How often each direction was used along a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionCounts {
    pub up: usize,
    pub down: usize,
    pub left: usize,
    pub right: usize,
}

impl DirectionCounts {
    /// Tally a direction sequence.
    pub fn tally(directions: &[Direction]) -> Self {
        let mut counts = Self::default();
        for &d in directions {
            *counts.get_mut(d) += 1;
        }
        counts
    }

    /// The count for `dir`.
    pub fn get(&self, dir: Direction) -> usize {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn get_mut(&mut self, dir: Direction) -> &mut usize {
        match dir {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// `(direction, count)` pairs in up, down, left, right order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, usize)> + '_ {
        Direction::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Sum of all counts, i.e. the number of steps.
    pub fn total(&self) -> usize {
        self.up + self.down + self.left + self.right
    }
}

/// Search statistics, reported whether or not a path was found.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Grid dimensions.
    pub dims: Dims,
    pub total_cells: usize,
    /// Resolved start position, if the start marker exists.
    pub start: Option<Pos>,
    /// Resolved end position, if the end marker exists.
    pub end: Option<Pos>,
    /// Cells marked visited when the search stopped.
    pub visited_cells: usize,
    pub direction_counts: DirectionCounts,
    /// Why no path was produced; `None` when one was found.
    pub diagnostic: Option<String>,
}

impl Statistics {
    pub(crate) fn new(dims: Dims, markers: Markers) -> Self {
        Self {
            dims,
            total_cells: dims.len(),
            start: markers.start,
            end: markers.end,
            visited_cells: 0,
            direction_counts: DirectionCounts::default(),
            diagnostic: None,
        }
    }

    /// Grid size as `"<rows>x<cols>"`.
    pub fn maze_size(&self) -> String {
        self.dims.to_string()
    }

    /// Visited cells as a percentage of all cells, rounded to two decimals.
    pub fn coverage_percentage(&self) -> f64 {
        if self.total_cells == 0 {
            return 0.0;
        }
        let pct = self.visited_cells as f64 / self.total_cells as f64 * 100.0;
        (pct * 100.0).round() / 100.0
    }
}

/// The result of one search call.
///
/// Produced fresh by every call and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub found: bool,
    /// Start to end, inclusive. Empty when not found.
    pub positions: Vec<Pos>,
    /// One entry per step; `positions.len() - 1` long when found.
    pub directions: Vec<Direction>,
    /// The directions rendered with the configured codes.
    pub encoded: String,
    pub stats: Statistics,
}

impl PathResult {
    /// A "not found" result carrying `diagnostic`.
    pub(crate) fn not_found(stats: Statistics, diagnostic: String) -> Self {
        Self {
            found: false,
            positions: Vec::new(),
            directions: Vec::new(),
            encoded: String::new(),
            stats: Statistics {
                diagnostic: Some(diagnostic),
                ..stats
            },
        }
    }

    /// Number of positions on the path (0 when not found).
    pub fn length(&self) -> usize {
        self.positions.len()
    }

    /// Number of moves on the path (0 when not found).
    pub fn steps(&self) -> usize {
        self.directions.len()
    }

    /// The diagnostic of a failed search.
    pub fn diagnostic(&self) -> Option<&str> {
        self.stats.diagnostic.as_deref()
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found {
            write!(f, "found {} in {} steps", self.encoded, self.steps())
        } else {
            write!(f, "not found: {}", self.diagnostic().unwrap_or("unknown reason"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn tally_counts_each_direction() {
        let c = DirectionCounts::tally(&[Right, Down, Right, Up]);
        assert_eq!(c.right, 2);
        assert_eq!(c.get(Down), 1);
        assert_eq!(c.left, 0);
        assert_eq!(c.total(), 4);
        let pairs: Vec<_> = c.iter().collect();
        assert_eq!(pairs, vec![(Up, 1), (Down, 1), (Left, 0), (Right, 2)]);
    }

    #[test]
    fn coverage_rounds_to_two_decimals() {
        let mut s = Statistics::new(Dims::new(3, 3), Markers::default());
        s.visited_cells = 1;
        assert_eq!(s.coverage_percentage(), 11.11);
        s.visited_cells = 9;
        assert_eq!(s.coverage_percentage(), 100.0);
        assert_eq!(s.maze_size(), "3x3");
    }

    #[test]
    fn not_found_keeps_stats() {
        let mut s = Statistics::new(Dims::new(1, 2), Markers::default());
        s.visited_cells = 1;
        let r = PathResult::not_found(s, "no way".into());
        assert!(!r.found);
        assert_eq!(r.length(), 0);
        assert_eq!(r.steps(), 0);
        assert_eq!(r.stats.visited_cells, 1);
        assert_eq!(r.diagnostic(), Some("no way"));
        assert_eq!(r.to_string(), "not found: no way");
    }
}

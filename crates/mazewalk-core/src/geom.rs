//! Geometry primitives: [`Pos`], [`Dims`] and [`Direction`].
//!
//! Positions are `(row, col)` pairs in matrix order: rows grow downwards,
//! columns grow to the right, and `(0, 0)` is the top-left cell.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::MazeError;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A zero-based grid position.
///
/// Ordering is row-major (row first, then column), which is also the scan
/// order of [`Dims::iter`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The position one unit step away in direction `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let d = dir.delta();
        self.shift(d.row, d.col)
    }

    /// The four cardinal neighbours, in search order (up, down, left, right).
    #[inline]
    pub fn neighbors_4(self) -> [Pos; 4] {
        Direction::ALL.map(|d| self.step(d))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Pos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four unit moves. There are no diagonal moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the fixed expansion order used by the search.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector as a `(row, col)` delta.
    #[inline]
    pub const fn delta(self) -> Pos {
        match self {
            Self::Up => Pos::new(-1, 0),
            Self::Down => Pos::new(1, 0),
            Self::Left => Pos::new(0, -1),
            Self::Right => Pos::new(0, 1),
        }
    }

    /// Symbolic name: `"up"`, `"down"`, `"left"` or `"right"`.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Index into [`ALL`](Self::ALL).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// Arrow glyph used by the text renderers.
    #[inline]
    pub const fn arrow(self) -> char {
        match self {
            Self::Up => '↑',
            Self::Down => '↓',
            Self::Left => '←',
            Self::Right => '→',
        }
    }

    /// Parse a symbolic name.
    ///
    /// Fails with [`MazeError::UnknownDirection`] for anything other than
    /// the four lowercase names.
    pub fn from_name(name: &str) -> Result<Self, MazeError> {
        match name {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(MazeError::UnknownDirection(other.to_string())),
        }
    }

    /// The direction of the unit step `from -> to`, if they are adjacent.
    pub fn between(from: Pos, to: Pos) -> Option<Self> {
        let d = to - from;
        Self::ALL.into_iter().find(|dir| dir.delta() == d)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions. Valid positions are `0 <= row < rows`, `0 <= col < cols`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl Dims {
    /// Create new dimensions.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Whether there are no cells at all.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as usize) < self.rows && (p.col as usize) < self.cols
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols + p.col as usize)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn pos(self, idx: usize) -> Pos {
        Pos::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Row-major iterator over every position.
    #[inline]
    pub fn iter(self) -> DimsIter {
        DimsIter {
            dims: self,
            next: 0,
        }
    }
}

impl IntoIterator for Dims {
    type Item = Pos;
    type IntoIter = DimsIter;
    #[inline]
    fn into_iter(self) -> DimsIter {
        self.iter()
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the positions of a [`Dims`].
#[derive(Clone, Debug)]
pub struct DimsIter {
    dims: Dims,
    next: usize,
}

impl Iterator for DimsIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.next >= self.dims.len() {
            return None;
        }
        let p = self.dims.pos(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dims.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DimsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_arithmetic() {
        let a = Pos::new(1, 2);
        let b = Pos::new(3, 4);
        assert_eq!(a + b, Pos::new(4, 6));
        assert_eq!(b - a, Pos::new(2, 2));
        assert_eq!(a.shift(-1, 1), Pos::new(0, 3));
    }

    #[test]
    fn pos_orders_row_major() {
        let mut v = vec![Pos::new(1, 0), Pos::new(0, 2), Pos::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 0)]);
    }

    #[test]
    fn neighbors_follow_search_order() {
        let n = Pos::new(2, 2).neighbors_4();
        assert_eq!(
            n,
            [Pos::new(1, 2), Pos::new(3, 2), Pos::new(2, 1), Pos::new(2, 3)]
        );
    }

    #[test]
    fn direction_names_round_trip() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_name(d.name()).unwrap(), d);
            assert_eq!(d.to_string().parse::<Direction>().unwrap(), d);
            assert_eq!(Direction::ALL[d.index()], d);
        }
        assert_eq!(
            Direction::from_name("north"),
            Err(MazeError::UnknownDirection("north".into()))
        );
    }

    #[test]
    fn direction_between_adjacent_only() {
        let p = Pos::new(1, 1);
        assert_eq!(Direction::between(p, Pos::new(0, 1)), Some(Direction::Up));
        assert_eq!(Direction::between(p, Pos::new(1, 2)), Some(Direction::Right));
        assert_eq!(Direction::between(p, Pos::new(2, 2)), None);
        assert_eq!(Direction::between(p, p), None);
    }

    #[test]
    fn dims_contains_and_index() {
        let d = Dims::new(2, 3);
        assert_eq!(d.len(), 6);
        assert!(d.contains(Pos::new(1, 2)));
        assert!(!d.contains(Pos::new(2, 0)));
        assert!(!d.contains(Pos::new(0, -1)));
        assert_eq!(d.index(Pos::new(1, 1)), Some(4));
        assert_eq!(d.pos(4), Pos::new(1, 1));
        assert_eq!(d.index(Pos::new(0, 3)), None);
        assert_eq!(d.to_string(), "2x3");
    }

    #[test]
    fn dims_iter_row_major() {
        let pts: Vec<_> = Dims::new(2, 2).iter().collect();
        assert_eq!(
            pts,
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]
        );
        assert_eq!(Dims::new(3, 4).iter().len(), 12);
        assert_eq!(Dims::new(0, 4).iter().count(), 0);
    }
}

//! The [`Grid`] type — a rectangular maze of string cell labels.
//!
//! A `Grid` can only be obtained through validation, so every value of the
//! type has at least one row, at least one column, and rows of equal length.
//! Cells are stored in a flat row-major buffer.

use std::fmt;

use crate::error::{GridDefect, MazeError};
use crate::geom::{Dims, DimsIter, Pos};

/// Check the structural invariants of a row-of-rows grid.
///
/// Returns the grid dimensions on success. Fails with
/// [`MazeError::MalformedGrid`] if there are no rows, a row is empty, or
/// row lengths differ. Cell contents are not inspected.
pub fn validate<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Dims, MazeError> {
    let Some(first) = rows.first() else {
        return Err(GridDefect::NoRows.into());
    };
    let cols = first.len();
    for (row, cells) in rows.iter().enumerate() {
        if cells.is_empty() {
            return Err(GridDefect::EmptyRow { row }.into());
        }
        if cells.len() != cols {
            return Err(GridDefect::RaggedRow {
                row,
                expected: cols,
                found: cells.len(),
            }
            .into());
        }
    }
    Ok(Dims::new(rows.len(), cols))
}

/// A validated rectangular grid of cell labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<String>,
    dims: Dims,
}

impl Grid {
    /// Build a grid from a sequence of rows, validating its shape.
    pub fn from_rows<R, C, S>(rows: R) -> Result<Self, MazeError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|r| r.into_iter().map(Into::into).collect())
            .collect();
        let dims = validate(&rows)?;
        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
            dims,
        })
    }

    /// Parse newline-separated text where every character is one cell.
    ///
    /// Leading and trailing whitespace of the whole text is trimmed, but not
    /// of individual lines.
    pub fn from_lines(text: &str) -> Result<Self, MazeError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GridDefect::NoRows.into());
        }
        Self::from_rows(text.split('\n').map(|line| {
            line.trim_end_matches('\r')
                .chars()
                .map(String::from)
                .collect::<Vec<_>>()
        }))
    }

    /// Build a grid from an already-flattened row-major cell buffer.
    ///
    /// The caller guarantees `cells.len() == dims.len()` and non-empty dims.
    pub(crate) fn from_flat(dims: Dims, cells: Vec<String>) -> Self {
        debug_assert_eq!(cells.len(), dims.len());
        debug_assert!(!dims.is_empty());
        Self { cells, dims }
    }

    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: validated grids are never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.dims.contains(p)
    }

    /// The label at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<&str> {
        self.dims.index(p).map(|i| self.cells[i].as_str())
    }

    /// Replace the label at `p`. No-op if `p` is outside the grid.
    pub fn set(&mut self, p: Pos, label: impl Into<String>) {
        if let Some(i) = self.dims.index(p) {
            self.cells[i] = label.into();
        }
    }

    /// The cells of row `r`.
    pub fn row(&self, r: usize) -> Option<&[String]> {
        if r >= self.dims.rows {
            return None;
        }
        let start = r * self.dims.cols;
        Some(&self.cells[start..start + self.dims.cols])
    }

    /// Iterator over the rows as slices.
    pub fn row_iter(&self) -> impl Iterator<Item = &[String]> {
        self.cells.chunks(self.dims.cols)
    }

    /// Row-major iterator over `(Pos, label)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.dims.iter(),
        }
    }

    /// Copy the grid back out into a row-of-rows representation.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.row_iter().map(<[String]>::to_vec).collect()
    }
}

impl fmt::Display for Grid {
    /// One line per row, labels concatenated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                f.write_str(cell)?;
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<String>>> for Grid {
    type Error = MazeError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

/// Iterator over `(Pos, label)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: DimsIter,
}

impl<'a> Iterator for GridIter<'a> {
    type Item = (Pos, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let i = self.grid.dims.index(p)?;
        Some((p, self.grid.cells[i].as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.rows()))?;
        for row in self.row_iter() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<String>>::deserialize(deserializer)?;
        Grid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

//! Maze constructors that lay a flat character sequence out as a [`Grid`].
//!
//! Every character of the source becomes one single-character cell, filled
//! row by row. When the source is shorter than the target area, a
//! [`FillMode`] decides what goes into the remaining cells; excess input is
//! always cut off.

use std::fmt;
use std::str::FromStr;

use crate::error::MazeError;
use crate::geom::Dims;
use crate::grid::Grid;

/// Default pad character: the default road label.
pub const DEFAULT_PAD: char = '0';

/// How [`from_dimensions`] handles a source shorter than `width * height`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FillMode {
    /// Fill the shortfall with the pad character.
    #[default]
    Pad,
    /// Tile the source until the area is covered.
    Repeat,
    /// Only cut excess input. A shortfall is still backfilled with the pad
    /// character so the grid stays rectangular, which makes this behave like
    /// [`Pad`](Self::Pad) on short input.
    Truncate,
}

impl FillMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pad => "pad",
            Self::Repeat => "repeat",
            Self::Truncate => "truncate",
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FillMode {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pad" => Ok(Self::Pad),
            "repeat" => Ok(Self::Repeat),
            "truncate" => Ok(Self::Truncate),
            other => Err(MazeError::InvalidInput(format!(
                "fill mode must be 'pad', 'repeat' or 'truncate', got '{other}'"
            ))),
        }
    }
}

/// Validate a textual pad token: it must be exactly one character.
pub fn pad_token(token: &str) -> Result<char, MazeError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(MazeError::InvalidInput(format!(
            "pad must be a single character, got '{token}'"
        ))),
    }
}

/// Build a square grid. The source length must be a perfect square.
///
/// ```
/// use mazewalk_core::build;
///
/// let g = build::square("*0110000#").unwrap();
/// assert_eq!((g.rows(), g.cols()), (3, 3));
/// assert!(build::square("XXXXXXXX").is_err());
/// ```
pub fn square(source: &str) -> Result<Grid, MazeError> {
    let chars: Vec<char> = source.chars().collect();
    if chars.is_empty() {
        return Err(MazeError::InvalidInput("source must not be empty".into()));
    }
    let side = chars.len().isqrt();
    if side * side != chars.len() {
        return Err(MazeError::InvalidDimensions(format!(
            "length {} is not a perfect square",
            chars.len()
        )));
    }
    lay_out(Dims::new(side, side), chars.into_iter())
}

/// Build a grid `width` cells wide.
///
/// Without an explicit `height`, the height is `ceil(len / width)`. A
/// shortfall is padded with `pad`; excess input is cut off.
///
/// ```
/// use mazewalk_core::build;
///
/// let g = build::from_width("*0110#", 3, Some(2), '0').unwrap();
/// assert_eq!(g.to_string(), "*01\n10#");
/// let g = build::from_width("*01", 2, None, '0').unwrap();
/// assert_eq!(g.to_string(), "*0\n10");
/// ```
pub fn from_width(
    source: &str,
    width: usize,
    height: Option<usize>,
    pad: char,
) -> Result<Grid, MazeError> {
    check_positive("width", width)?;
    if let Some(h) = height {
        check_positive("height", h)?;
    }
    let chars: Vec<char> = source.chars().collect();
    if chars.is_empty() {
        return Err(MazeError::InvalidInput("source must not be empty".into()));
    }
    let height = height.unwrap_or_else(|| chars.len().div_ceil(width));
    let dims = area(width, height)?;
    lay_out(dims, padded(chars, pad))
}

/// Build a `width` × `height` grid with an explicit fill policy.
///
/// ```
/// use mazewalk_core::build::{self, FillMode};
///
/// let g = build::from_dimensions("*01#", 3, 2, FillMode::Pad, '0').unwrap();
/// assert_eq!(g.to_string(), "*01\n#00");
/// let g = build::from_dimensions("*01#", 3, 2, FillMode::Repeat, '0').unwrap();
/// assert_eq!(g.to_string(), "*01\n#*0");
/// ```
pub fn from_dimensions(
    source: &str,
    width: usize,
    height: usize,
    mode: FillMode,
    pad: char,
) -> Result<Grid, MazeError> {
    check_positive("width", width)?;
    check_positive("height", height)?;
    let chars: Vec<char> = source.chars().collect();
    if chars.is_empty() {
        return Err(MazeError::InvalidInput("source must not be empty".into()));
    }
    let dims = area(width, height)?;
    match mode {
        FillMode::Pad | FillMode::Truncate => lay_out(dims, padded(chars, pad)),
        FillMode::Repeat => lay_out(dims, chars.into_iter().cycle()),
    }
}

fn check_positive(name: &str, value: usize) -> Result<(), MazeError> {
    if value == 0 {
        return Err(MazeError::InvalidDimensions(format!(
            "{name} must be a positive integer"
        )));
    }
    Ok(())
}

/// Positions are `i32` pairs, so neither side may exceed `i32::MAX`.
const MAX_SIDE: usize = i32::MAX as usize;

fn area(width: usize, height: usize) -> Result<Dims, MazeError> {
    if width > MAX_SIDE || height > MAX_SIDE || width.checked_mul(height).is_none() {
        return Err(MazeError::InvalidDimensions(format!(
            "{width}x{height} is too large"
        )));
    }
    Ok(Dims::new(height, width))
}

fn padded(chars: Vec<char>, pad: char) -> impl Iterator<Item = char> {
    chars.into_iter().chain(std::iter::repeat(pad))
}

/// Take exactly `dims.len()` characters from `source`, row by row.
///
/// The cell buffer is reserved up front so an area that cannot be allocated
/// is reported instead of aborting.
fn lay_out(dims: Dims, source: impl Iterator<Item = char>) -> Result<Grid, MazeError> {
    let mut cells: Vec<String> = Vec::new();
    cells.try_reserve_exact(dims.len()).map_err(|_| {
        MazeError::InvalidDimensions(format!("{dims} is too large to allocate"))
    })?;
    cells.extend(source.take(dims.len()).map(String::from));
    Ok(Grid::from_flat(dims, cells))
}

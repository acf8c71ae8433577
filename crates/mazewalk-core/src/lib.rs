//! **mazewalk-core** — grid model and configuration types for maze solving.
//!
//! This crate provides the foundational types used across the *mazewalk*
//! crates: `(row, col)` geometry and the four unit [`Direction`]s, the
//! validated label [`Grid`], the role [`Labels`] and [`DirectionCodes`]
//! bundles, flat-string maze constructors, and the shared [`MazeError`].

pub mod build;
pub mod error;
pub mod geom;
pub mod grid;
pub mod labels;

pub use build::FillMode;
pub use error::{GridDefect, MazeError};
pub use geom::{Dims, Direction, Pos};
pub use grid::Grid;
pub use labels::{DirectionCodes, Labels, Role};

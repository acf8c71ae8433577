//! **mazewalk** — breadth-first maze solving.
//!
//! A maze is a rectangular [`Grid`] of cell labels. Four of those labels
//! carry a role ([`Labels`]: road, wall, start, end); everything else
//! blocks movement. [`Solver`] finds a shortest 4-directional path from the
//! start cell to the end cell and encodes it with caller-chosen
//! [`DirectionCodes`].
//!
//! ```
//! use mazewalk::{Solver, build};
//!
//! let mut solver = Solver::new();
//! solver.set_code("↑", "↓", "←", "→").unwrap();
//! let grid = build::square("*0110000#").unwrap();
//! let result = solver.solve_grid(&grid).unwrap();
//! assert_eq!(result.encoded, "→↓↓→");
//! ```
//!
//! The member crates are re-exported here:
//!
//! - [`mazewalk_core`]: geometry, the grid model, role labels, codes and
//!   constructors
//! - [`mazewalk_paths`]: the reusable [`Search`] context and path encoding
//! - [`mazewalk_render`] as [`render`]: text renderings and reports

pub mod presets;
mod quick;
mod solver;

pub use mazewalk_core::{
    Dims, Direction, DirectionCodes, FillMode, Grid, GridDefect, Labels, MazeError, Pos, Role,
    build,
};
pub use mazewalk_paths::{
    DirectionCounts, Markers, PathResult, Search, Statistics, decode, encode, locate, walk,
};
pub use mazewalk_render as render;
pub use presets::Preset;
pub use quick::{quick_solve, solve_maze};
pub use solver::{Solver, SolverConfig};

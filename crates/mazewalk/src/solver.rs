use std::fmt;

use log::trace;
use mazewalk_core::{Dims, DirectionCodes, Grid, Labels, MazeError, Pos};
use mazewalk_paths::{PathResult, Search};
use mazewalk_render::{Frame, report};

// ---------------------------------------------------------------------------
// SolverConfig
// ---------------------------------------------------------------------------

/// Settings for a [`Solver`].
///
/// With the `serde` feature every field is optional when deserialising and
/// falls back to its default; labels and codes are re-validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    pub labels: Labels,
    pub codes: DirectionCodes,
    /// Upper bound on cells a single search may mark visited.
    pub visit_budget: Option<usize>,
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// A maze solver holding its labels, direction codes and optionally a
/// stored maze.
///
/// Each solve returns a fresh [`PathResult`]; nothing about earlier solves
/// is kept apart from the reusable search buffers.
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
    maze: Option<Grid>,
    search: Search,
}

impl Solver {
    /// A solver with default labels (`0`, `1`, `*`, `#`) and codes
    /// (`U`, `D`, `L`, `R`).
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        let mut search = Search::new(Dims::default());
        search.set_budget(config.visit_budget);
        Self {
            config,
            maze: None,
            search,
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    // -- Codes --

    /// Replace the direction codes from four symbols.
    ///
    /// Fails with [`MazeError::InvalidCode`]; the previous codes stay in
    /// place on failure.
    pub fn set_code(
        &mut self,
        up: impl Into<String>,
        down: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Result<(), MazeError> {
        let codes = DirectionCodes::new(up, down, left, right)?;
        self.use_codes(codes);
        Ok(())
    }

    /// Replace the direction codes with a pre-built bundle.
    pub fn use_codes(&mut self, codes: DirectionCodes) {
        trace!("solver codes set to {codes}");
        self.config.codes = codes;
    }

    pub fn codes(&self) -> &DirectionCodes {
        &self.config.codes
    }

    // -- Labels --

    /// Replace the role labels from four strings.
    ///
    /// Fails with [`MazeError::InvalidSymbolSet`]; the previous labels stay
    /// in place on failure.
    pub fn set_labels(
        &mut self,
        road: impl Into<String>,
        wall: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Result<(), MazeError> {
        let labels = Labels::new(road, wall, start, end)?;
        self.use_labels(labels);
        Ok(())
    }

    /// Replace the role labels with a pre-built bundle.
    pub fn use_labels(&mut self, labels: Labels) {
        trace!("solver labels set to {labels}");
        self.config.labels = labels;
    }

    pub fn labels(&self) -> &Labels {
        &self.config.labels
    }

    /// Replace (or clear) the visit budget.
    pub fn set_budget(&mut self, budget: Option<usize>) {
        trace!("solver visit budget set to {budget:?}");
        self.config.visit_budget = budget;
        self.search.set_budget(budget);
    }

    // -- Maze --

    /// Store a maze for later [`solve`](Self::solve) and
    /// [`show`](Self::show) calls. The grid is owned, so later changes to
    /// the caller's data do not affect it.
    pub fn set_maze(&mut self, grid: Grid) {
        trace!("solver maze set to {}", grid.dims());
        self.maze = Some(grid);
    }

    pub fn maze(&self) -> Option<&Grid> {
        self.maze.as_ref()
    }

    // -- Solving --

    /// Solve the stored maze. Fails with [`MazeError::MazeNotSet`] if there
    /// is none.
    pub fn solve(&mut self) -> Result<PathResult, MazeError> {
        let grid = self.maze.as_ref().ok_or(MazeError::MazeNotSet)?;
        self.search
            .solve(grid, &self.config.labels, &self.config.codes)
    }

    /// Solve `grid` with the solver's labels and codes.
    pub fn solve_grid(&mut self, grid: &Grid) -> Result<PathResult, MazeError> {
        self.search
            .solve(grid, &self.config.labels, &self.config.codes)
    }

    /// Solve `grid` with `labels` for this call only.
    pub fn solve_with(&mut self, grid: &Grid, labels: &Labels) -> Result<PathResult, MazeError> {
        self.search.solve(grid, labels, &self.config.codes)
    }

    /// The encoded path through `grid`, or an empty string if there is
    /// none.
    pub fn encode_path(&mut self, grid: &Grid) -> Result<String, MazeError> {
        self.solve_grid(grid).map(|r| r.encoded)
    }

    // -- Display --

    /// Pretty rendering of the stored maze, with `path` if given.
    pub fn show(&self, path: Option<&[Pos]>) -> Result<String, MazeError> {
        let grid = self.maze.as_ref().ok_or(MazeError::MazeNotSet)?;
        Ok(self.show_grid(grid, path))
    }

    /// Pretty rendering of `grid` with the solver's labels.
    pub fn show_grid(&self, grid: &Grid, path: Option<&[Pos]>) -> String {
        Frame::pretty(grid, &self.config.labels, path).to_string()
    }

    /// Solve `grid`, then render it with the path (when found) followed by
    /// the statistics report.
    pub fn solve_and_show(&mut self, grid: &Grid) -> Result<(PathResult, String), MazeError> {
        let result = self.solve_grid(grid)?;
        let path = result.found.then_some(result.positions.as_slice());
        let text = format!(
            "{}\n\n{}",
            self.show_grid(grid, path),
            report(&result, &self.config.codes)
        );
        Ok((result, text))
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Solver(maze=")?;
        match &self.maze {
            Some(grid) => write!(f, "{}", grid.dims())?,
            None => f.write_str("unset")?,
        }
        write!(
            f,
            ", labels={}, codes={})",
            self.config.labels, self.config.codes
        )
    }
}

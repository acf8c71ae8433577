//! Command-line options.

use std::path::PathBuf;

use clap::Parser;
use mazewalk::build::pad_token;
use mazewalk::{DirectionCodes, FillMode, Labels, MazeError};

/// Solve a maze by breadth-first search and print the shortest path.
///
/// Exit status: 0 when a path was found, 2 when there is none, 1 on error.
#[derive(Parser, Debug, Clone)]
#[command(name = "mazewalk", version)]
pub struct Cli {
    /// Maze as a flat string, newline-separated rows, or `-` for stdin.
    pub maze: Option<String>,

    /// Solve a built-in maze instead (see --list).
    #[arg(long, short = 'p', conflicts_with = "maze")]
    pub preset: Option<String>,

    /// List the built-in mazes and exit.
    #[arg(long)]
    pub list: bool,

    /// Lay a flat string out this many cells wide.
    #[arg(long, short = 'w')]
    pub width: Option<usize>,

    /// Row count for --width; derived from the input length if omitted.
    #[arg(long, requires = "width")]
    pub height: Option<usize>,

    /// Fill policy when --width and --height leave cells uncovered.
    #[arg(long, default_value_t = FillMode::Pad, requires = "height")]
    pub fill: FillMode,

    /// Single pad character for uncovered cells [default: 0].
    #[arg(long, requires = "width", value_parser = pad_token)]
    pub pad: Option<char>,

    /// Require a flat string to be a square maze (the default without --width).
    #[arg(long, conflicts_with = "width")]
    pub square: bool,

    /// Cell labels as ROAD,WALL,START,END.
    #[arg(long, value_name = "R,W,S,E", value_parser = parse_labels)]
    pub labels: Option<Labels>,

    /// Direction codes as UP,DOWN,LEFT,RIGHT.
    #[arg(long, value_name = "U,D,L,R", value_parser = parse_codes)]
    pub codes: Option<DirectionCodes>,

    /// Abort once a search has marked this many cells visited.
    #[arg(long)]
    pub budget: Option<usize>,

    /// JSON file with `labels`, `codes` and `visit_budget`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print raw labels with the path dotted in, instead of the boxed view.
    #[arg(long)]
    pub plain: bool,

    /// Colour the rendering.
    #[arg(long)]
    pub color: bool,

    /// Print the search result as JSON instead of text.
    #[arg(long, conflicts_with_all = ["plain", "color"])]
    pub json: bool,
}

impl Cli {
    /// Whether any flag that lays out a flat string was given.
    ///
    /// `--height`, `--fill` and `--pad` all require `--width`.
    pub fn has_layout_flags(&self) -> bool {
        self.square || self.width.is_some()
    }
}

fn split4(s: &str) -> Result<[&str; 4], MazeError> {
    let parts: Vec<&str> = s.split(',').collect();
    <[&str; 4]>::try_from(parts).map_err(|parts| {
        MazeError::InvalidInput(format!(
            "expected 4 comma-separated values, got {}",
            parts.len()
        ))
    })
}

fn parse_labels(s: &str) -> Result<Labels, MazeError> {
    let [road, wall, start, end] = split4(s)?;
    Labels::new(road, wall, start, end)
}

fn parse_codes(s: &str) -> Result<DirectionCodes, MazeError> {
    let [up, down, left, right] = split4(s)?;
    DirectionCodes::new(up, down, left, right)
}

//! The `mazewalk` command-line front end.
//!
//! Reads a maze from a preset, a flat string, newline-separated rows or
//! standard input, solves it and prints a rendering plus the statistics
//! report (or the raw result as JSON).

mod config;
mod options;
mod paint;

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use log::{debug, info};
use mazewalk::render::{Frame, PATH_MARK, report};
use mazewalk::build::DEFAULT_PAD;
use mazewalk::{Grid, MazeError, Solver, SolverConfig, build, presets};

pub use config::ConfigFile;
pub use options::Cli;
pub use paint::paint;

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    NotFound,
}

impl From<Outcome> for ExitCode {
    fn from(o: Outcome) -> Self {
        match o {
            Outcome::Found => ExitCode::SUCCESS,
            Outcome::NotFound => ExitCode::from(2),
        }
    }
}

/// Execute one command line, writing everything but errors to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<Outcome, Box<dyn Error>> {
    if cli.list {
        for p in presets::ALL {
            writeln!(out, "{:<15} {}", p.name, p.summary)?;
        }
        return Ok(Outcome::Found);
    }

    let (grid, config) = load(cli)?;
    debug!("solving {} maze with {config:?}", grid.dims());
    let mut solver = Solver::with_config(config);
    let result = solver.solve_grid(&grid)?;
    info!("{result}");

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        let path = result.found.then_some(result.positions.as_slice());
        let frame = if cli.plain {
            Frame::trace(&grid, path.unwrap_or_default(), PATH_MARK)
        } else {
            Frame::pretty(&grid, solver.labels(), path)
        };
        if cli.color {
            paint(&frame, out)?;
        } else {
            write!(out, "{frame}")?;
        }
        writeln!(out, "\n\n{}", report(&result, solver.codes()))?;
    }

    Ok(if result.found {
        Outcome::Found
    } else {
        Outcome::NotFound
    })
}

/// Resolve the maze and solver settings.
///
/// Settings are layered: preset (or defaults), then the `--config` file,
/// then individual flags. Each layer only replaces what it sets.
fn load(cli: &Cli) -> Result<(Grid, SolverConfig), Box<dyn Error>> {
    let (grid, mut config) = match (&cli.preset, &cli.maze) {
        (Some(_), _) if cli.has_layout_flags() => {
            return Err(layout_conflict("a preset").into());
        }
        (Some(name), _) => {
            let p = presets::by_name(name).ok_or_else(|| {
                MazeError::InvalidInput(format!(
                    "unknown preset '{name}', expected one of: {}",
                    presets::NAMES.join(", ")
                ))
            })?;
            (p.grid()?, p.config()?)
        }
        (None, Some(source)) => (grid_from_source(cli, source)?, SolverConfig::default()),
        (None, None) => {
            let msg = "no maze given; pass a maze or --preset";
            return Err(MazeError::InvalidInput(msg.into()).into());
        }
    };

    if let Some(path) = &cli.config {
        let text = fs::read_to_string(path)?;
        serde_json::from_str::<ConfigFile>(&text)?.apply(&mut config);
        debug!("loaded solver config from {}", path.display());
    }
    if let Some(labels) = &cli.labels {
        config.labels = labels.clone();
    }
    if let Some(codes) = &cli.codes {
        config.codes = codes.clone();
    }
    if cli.budget.is_some() {
        config.visit_budget = cli.budget;
    }
    Ok((grid, config))
}

fn grid_from_source(cli: &Cli, source: &str) -> Result<Grid, Box<dyn Error>> {
    let text = if source == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        source.to_string()
    };
    let text = text.trim();

    if text.contains('\n') {
        if cli.has_layout_flags() {
            return Err(layout_conflict("newline-separated rows").into());
        }
        return Ok(Grid::from_lines(text)?);
    }

    let pad = cli.pad.unwrap_or(DEFAULT_PAD);
    let grid = match (cli.square, cli.width, cli.height) {
        (true, ..) | (false, None, _) => build::square(text)?,
        (false, Some(width), Some(height)) => {
            build::from_dimensions(text, width, height, cli.fill, pad)?
        }
        (false, Some(width), None) => build::from_width(text, width, None, pad)?,
    };
    Ok(grid)
}

fn layout_conflict(source: &str) -> MazeError {
    MazeError::InvalidInput(format!(
        "--square, --width, --height, --fill and --pad only lay out a flat maze string, not {source}"
    ))
}

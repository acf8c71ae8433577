//! Ready-made demo mazes.

use mazewalk_core::{DirectionCodes, Grid, Labels, MazeError};

use crate::SolverConfig;

/// A named maze together with the labels and codes it is meant to be
/// solved with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub summary: &'static str,
    /// Rows separated by `\n`, one character per cell.
    pub text: &'static str,
    /// Road, wall, start, end.
    pub labels: [&'static str; 4],
    /// Up, down, left, right.
    pub codes: [&'static str; 4],
}

const DEFAULT_LABELS: [&str; 4] = ["0", "1", "*", "#"];
const DEFAULT_CODES: [&str; 4] = ["U", "D", "L", "R"];

pub const BASIC: Preset = Preset {
    name: "basic",
    summary: "5x5 maze, start top-left, end bottom-right",
    text: "*0100\n10101\n00000\n11110\n0000#",
    labels: DEFAULT_LABELS,
    codes: DEFAULT_CODES,
};

pub const CUSTOM_SYMBOLS: Preset = Preset {
    name: "custom_symbols",
    summary: "5x5 maze drawn with '.', 'X', 'S' and 'E', arrow codes",
    text: "S.X.E\nX.X.X\n.....\nXXX.X\n.....",
    labels: [".", "X", "S", "E"],
    codes: ["↑", "↓", "←", "→"],
};

pub const COMPLEX: Preset = Preset {
    name: "complex",
    summary: "8x8 maze, end top-left, start bottom-right",
    text: "#1111111\n\
           00010001\n\
           11010101\n\
           10000101\n\
           10111101\n\
           10000001\n\
           11111100\n\
           1111111*",
    labels: DEFAULT_LABELS,
    codes: DEFAULT_CODES,
};

pub const IMPOSSIBLE: Preset = Preset {
    name: "impossible",
    summary: "3x3 maze whose start is walled in",
    text: "*11\n111\n11#",
    labels: DEFAULT_LABELS,
    codes: DEFAULT_CODES,
};

pub const SHOWCASE: Preset = Preset {
    name: "showcase",
    summary: "5x5 maze with the end in the top-right corner",
    text: "*010#\n10101\n00000\n11110\n00000",
    labels: DEFAULT_LABELS,
    codes: DEFAULT_CODES,
};

pub const SMALL: Preset = Preset {
    name: "small",
    summary: "4x4 maze with WASD codes",
    text: "*001\n1101\n0000\n111#",
    labels: DEFAULT_LABELS,
    codes: ["W", "S", "A", "D"],
};

pub const ALL: [Preset; 6] = [BASIC, CUSTOM_SYMBOLS, COMPLEX, IMPOSSIBLE, SHOWCASE, SMALL];

/// Preset names in listing order.
pub const NAMES: [&str; 6] = [
    BASIC.name,
    CUSTOM_SYMBOLS.name,
    COMPLEX.name,
    IMPOSSIBLE.name,
    SHOWCASE.name,
    SMALL.name,
];

/// Look up a preset by name.
pub fn by_name(name: &str) -> Option<Preset> {
    ALL.into_iter().find(|p| p.name == name)
}

impl Preset {
    pub fn grid(&self) -> Result<Grid, MazeError> {
        Grid::from_lines(self.text)
    }

    pub fn labels(&self) -> Result<Labels, MazeError> {
        let [road, wall, start, end] = self.labels;
        Labels::new(road, wall, start, end)
    }

    pub fn codes(&self) -> Result<DirectionCodes, MazeError> {
        let [up, down, left, right] = self.codes;
        DirectionCodes::new(up, down, left, right)
    }

    /// Solver settings for this preset, without a visit budget.
    pub fn config(&self) -> Result<SolverConfig, MazeError> {
        Ok(SolverConfig {
            labels: self.labels()?,
            codes: self.codes()?,
            visit_budget: None,
        })
    }
}

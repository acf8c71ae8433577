use mazewalk_core::build::{self, DEFAULT_PAD, FillMode};
use mazewalk_core::{DirectionCodes, Grid, Labels, MazeError};
use mazewalk_paths::{PathResult, solve};

/// Solve `grid` once with explicit labels and codes.
pub fn solve_maze(
    grid: &Grid,
    labels: &Labels,
    codes: &DirectionCodes,
) -> Result<PathResult, MazeError> {
    solve(grid, labels, codes)
}

/// Build a maze from a flat string and solve it.
///
/// Without `size` the source must form a perfect square. With `size` the
/// grid is `size × size`, taken from the first `size²` characters and
/// padded with `'0'` when the source is shorter. Missing labels or codes
/// fall back to the defaults.
///
/// ```
/// let r = mazewalk::quick_solve("*00100001000010000#", None, None, Some(5)).unwrap();
/// assert_eq!(r.encoded, "DDDRRR");
/// ```
pub fn quick_solve(
    source: &str,
    labels: Option<&Labels>,
    codes: Option<&DirectionCodes>,
    size: Option<usize>,
) -> Result<PathResult, MazeError> {
    let grid = match size {
        None => build::square(source)?,
        Some(n) => build::from_dimensions(source, n, n, FillMode::Truncate, DEFAULT_PAD)?,
    };
    let default_labels;
    let labels = match labels {
        Some(l) => l,
        None => {
            default_labels = Labels::default();
            &default_labels
        }
    };
    let default_codes;
    let codes = match codes {
        Some(c) => c,
        None => {
            default_codes = DirectionCodes::default();
            &default_codes
        }
    };
    solve(&grid, labels, codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_source() {
        let r = quick_solve("*0110000#", None, None, None).unwrap();
        assert_eq!(r.encoded, "RDDR");
        assert!(matches!(
            quick_solve("*00100#", None, None, None),
            Err(MazeError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn sized_source_is_cut_and_padded() {
        let r = quick_solve("*00100001000010000#", None, None, Some(5)).unwrap();
        assert_eq!(r.stats.maze_size(), "5x5");
        assert_eq!(r.steps(), 6);

        // only the first 16 characters fit, so the end marker is lost
        let r = quick_solve("*00100001000010000#", None, None, Some(4)).unwrap();
        assert!(!r.found);
        assert_eq!(r.diagnostic(), Some("end label '#' not found"));
    }

    #[test]
    fn custom_labels_and_codes() {
        let labels = Labels::new(".", "X", "S", "E").unwrap();
        let codes = DirectionCodes::new("n", "s", "w", "e").unwrap();
        let r = quick_solve("S.X.E", Some(&labels), Some(&codes), Some(3)).unwrap();
        // padding is always '0', which these labels treat as a stray label
        assert_eq!(r.encoded, "se");
        assert_eq!(r.stats.visited_cells, 4);
    }

    #[test]
    fn solve_maze_matches_solver() {
        let grid = Grid::from_lines("*0\n1#").unwrap();
        let r = solve_maze(&grid, &Labels::default(), &DirectionCodes::default()).unwrap();
        assert_eq!(r.encoded, "RD");
    }
}

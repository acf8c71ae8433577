//! The full pipeline: locate markers, search, encode, collect statistics.

use log::{debug, warn};
use mazewalk_core::{DirectionCodes, Grid, Labels, MazeError};

use crate::encode::{directions_of, encode};
use crate::locate::{Markers, locate};
use crate::result::{DirectionCounts, PathResult, Statistics};
use crate::search::Search;
use crate::traits::MazePather;

impl Search {
    /// Search `grid` between already-resolved `markers`.
    ///
    /// A missing marker or an unreachable end produces a result with
    /// `found == false` and a diagnostic; only a blown visit budget is an
    /// error.
    pub fn search(
        &mut self,
        grid: &Grid,
        labels: &Labels,
        markers: Markers,
        codes: &DirectionCodes,
    ) -> Result<PathResult, MazeError> {
        if self.dims != grid.dims() {
            self.set_dims(grid.dims());
        }
        let stats = Statistics::new(grid.dims(), markers);

        let Some(start) = markers.start else {
            warn!("start label '{}' not found in {} grid", labels.start(), grid.dims());
            let msg = format!("start label '{}' not found", labels.start());
            return Ok(PathResult::not_found(stats, msg));
        };
        let Some(end) = markers.end else {
            warn!("end label '{}' not found in {} grid", labels.end(), grid.dims());
            let msg = format!("end label '{}' not found", labels.end());
            return Ok(PathResult::not_found(stats, msg));
        };

        let pather = MazePather::new(grid, labels);
        let path = self.shortest_path(&pather, start, end)?;
        let visited = self.visited();

        let Some(positions) = path else {
            debug!("no path from {start} to {end}, visited {visited} cells");
            let stats = Statistics {
                visited_cells: visited,
                ..stats
            };
            return Ok(PathResult::not_found(
                stats,
                format!("end {end} is unreachable from start {start}"),
            ));
        };

        let directions = directions_of(&positions)?;
        let encoded = encode(&directions, codes);
        debug!(
            "path from {start} to {end}: {} steps, visited {visited} cells",
            directions.len()
        );

        Ok(PathResult {
            found: true,
            stats: Statistics {
                visited_cells: visited,
                direction_counts: DirectionCounts::tally(&directions),
                ..stats
            },
            positions,
            directions,
            encoded,
        })
    }

    /// Locate the start and end markers of `grid`, then [`search`](Self::search).
    ///
    /// Fails with [`MazeError::AmbiguousMarker`] before any search work if a
    /// marker appears more than once.
    pub fn solve(
        &mut self,
        grid: &Grid,
        labels: &Labels,
        codes: &DirectionCodes,
    ) -> Result<PathResult, MazeError> {
        let markers = locate(grid, labels.start(), labels.end())?;
        self.search(grid, labels, markers, codes)
    }
}

/// Solve `grid` once with a throwaway [`Search`].
pub fn solve(grid: &Grid, labels: &Labels, codes: &DirectionCodes) -> Result<PathResult, MazeError> {
    Search::new(grid.dims()).solve(grid, labels, codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_core::{Direction, Pos, Role};

    fn defaults() -> (Labels, DirectionCodes) {
        (Labels::default(), DirectionCodes::default())
    }

    #[test]
    fn scenario_wall_forces_detour() {
        let (labels, codes) = defaults();
        let grid = Grid::from_rows([["*", "0"], ["1", "#"]]).unwrap();
        let r = solve(&grid, &labels, &codes).unwrap();
        assert!(r.found);
        assert_eq!(
            r.positions,
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1)]
        );
        assert_eq!(r.directions, vec![Direction::Right, Direction::Down]);
        assert_eq!(r.encoded, "RD");
        assert_eq!(r.steps(), 2);
        assert_eq!(r.length(), 3);
        assert_eq!(r.stats.direction_counts.right, 1);
        assert_eq!(r.stats.diagnostic, None);
    }

    #[test]
    fn scenario_unreachable_end() {
        let (labels, codes) = defaults();
        let grid = Grid::from_rows([["*", "1"], ["1", "#"]]).unwrap();
        let r = solve(&grid, &labels, &codes).unwrap();
        assert!(!r.found);
        assert_eq!(r.stats.visited_cells, 1);
        assert_eq!(r.encoded, "");
        assert!(r.diagnostic().unwrap().contains("unreachable"));
    }

    #[test]
    fn scenario_two_starts() {
        let (labels, codes) = defaults();
        let grid = Grid::from_rows([["*", "*"], ["0", "#"]]).unwrap();
        assert!(matches!(
            solve(&grid, &labels, &codes),
            Err(MazeError::AmbiguousMarker { role: Role::Start, .. })
        ));
    }

    #[test]
    fn missing_markers_are_soft_failures() {
        let (labels, codes) = defaults();
        let grid = Grid::from_lines("00#").unwrap();
        let r = solve(&grid, &labels, &codes).unwrap();
        assert!(!r.found);
        assert_eq!(r.diagnostic(), Some("start label '*' not found"));
        assert_eq!(r.stats.end, Some(Pos::new(0, 2)));

        let grid = Grid::from_lines("*00").unwrap();
        let r = solve(&grid, &labels, &codes).unwrap();
        assert_eq!(r.diagnostic(), Some("end label '#' not found"));
        assert_eq!(r.stats.visited_cells, 0);
    }

    #[test]
    fn stray_labels_block_movement() {
        let (labels, codes) = defaults();
        let grid = Grid::from_lines("*x#").unwrap();
        let r = solve(&grid, &labels, &codes).unwrap();
        assert!(!r.found);
    }

    #[test]
    fn custom_labels_and_codes() {
        let labels = Labels::new(".", "X", "S", "E").unwrap();
        let codes = DirectionCodes::new("↑", "↓", "←", "→").unwrap();
        let grid = Grid::from_lines("S.X.E\nX.X.X\n.....\nXXX.X\n.....").unwrap();
        let r = solve(&grid, &labels, &codes).unwrap();
        assert!(r.found);
        assert_eq!(r.encoded, "→↓↓→→↑↑→");
        assert_eq!(r.stats.start, Some(Pos::new(0, 0)));
        assert_eq!(r.stats.end, Some(Pos::new(0, 4)));
    }

    #[test]
    fn start_and_end_can_be_anywhere() {
        let (labels, codes) = defaults();
        let grid = Grid::from_lines(
            "#1111111\n\
             00010001\n\
             11010101\n\
             10000101\n\
             10111101\n\
             10000001\n\
             11111100\n\
             1111111*",
        )
        .unwrap();
        let r = solve(&grid, &labels, &codes).unwrap();
        assert!(r.found);
        assert_eq!(r.stats.start, Some(Pos::new(7, 7)));
        assert_eq!(r.stats.end, Some(Pos::new(0, 0)));
        assert_eq!(r.encoded, "ULULLLLLUURUULLU");
        assert_eq!(r.steps(), 16);
        assert_eq!(r.stats.visited_cells, 26);
    }

    #[test]
    fn search_reuses_context_across_sizes() {
        let (labels, codes) = defaults();
        let mut search = Search::new(mazewalk_core::Dims::new(1, 1));
        let big = Grid::from_lines("*000\n1110\n#000").unwrap();
        let small = Grid::from_lines("*#").unwrap();
        assert_eq!(search.solve(&big, &labels, &codes).unwrap().encoded, "RRRDDLLL");
        assert_eq!(search.solve(&small, &labels, &codes).unwrap().encoded, "R");
        assert_eq!(search.solve(&big, &labels, &codes).unwrap().encoded, "RRRDDLLL");
    }
}

use std::fmt;

use mazewalk_core::{DirectionCodes, Pos};
use mazewalk_paths::PathResult;

/// Multi-line statistics block for one search result.
///
/// Lists the grid size, cell counts, markers and coverage; then either the
/// path details with per-direction counts (zero counts omitted) or the
/// reason no path was found.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    result: &'a PathResult,
    codes: &'a DirectionCodes,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a PathResult, codes: &'a DirectionCodes) -> Self {
        Self { result, codes }
    }
}

/// Render a [`Report`] to a string.
pub fn report(result: &PathResult, codes: &DirectionCodes) -> String {
    Report::new(result, codes).to_string()
}

struct Marker(Option<Pos>);

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, "{p}"),
            None => f.write_str("not found"),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        let s = &r.stats;
        writeln!(f, "=== Search statistics ===")?;
        writeln!(f, "Maze size:     {}", s.maze_size())?;
        writeln!(f, "Total cells:   {}", s.total_cells)?;
        writeln!(f, "Start:         {}", Marker(s.start))?;
        writeln!(f, "End:           {}", Marker(s.end))?;
        writeln!(f, "Visited cells: {}", s.visited_cells)?;
        write!(f, "Coverage:      {:.2}%", s.coverage_percentage())?;

        if !r.found {
            let reason = r.diagnostic().unwrap_or("unknown reason");
            return write!(f, "\nNo path: {reason}");
        }
        writeln!(f)?;
        writeln!(f, "Path length:   {}", r.length())?;
        writeln!(f, "Steps:         {}", r.steps())?;
        write!(f, "Encoded path:  {}", r.encoded)?;
        let counts: Vec<_> = s.direction_counts.iter().filter(|&(_, n)| n > 0).collect();
        if !counts.is_empty() {
            write!(f, "\nDirections:")?;
            for (dir, n) in counts {
                write!(f, "\n  {dir} ({}): {n}", self.codes.code(dir))?;
            }
        }
        Ok(())
    }
}

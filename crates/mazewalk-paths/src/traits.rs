use mazewalk_core::{Direction, Grid, Labels, Pos};

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the neighbors of `p` that can be stepped onto into `buf`, in
    /// expansion order. The caller clears `buf` before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// Pather over a label grid: a cell is passable when its label is the road,
/// start or end label. Walls and stray labels block movement.
///
/// Neighbors are produced in the fixed order up, down, left, right, which
/// decides which of several equally short paths a search returns.
#[derive(Clone, Copy, Debug)]
pub struct MazePather<'a> {
    grid: &'a Grid,
    labels: &'a Labels,
}

impl<'a> MazePather<'a> {
    pub fn new(grid: &'a Grid, labels: &'a Labels) -> Self {
        Self { grid, labels }
    }

    /// Whether `p` is inside the grid and passable.
    #[inline]
    pub fn passable(&self, p: Pos) -> bool {
        self.grid
            .at(p)
            .is_some_and(|label| self.labels.is_passable(label))
    }
}

impl Pather for MazePather<'_> {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        for d in Direction::ALL {
            let n = p.step(d);
            if self.passable(n) {
                buf.push(n);
            }
        }
    }
}

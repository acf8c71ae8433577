use mazewalk_core::{MazeError, Pos};

use crate::search::{NO_PARENT, Search};
use crate::traits::Pather;

impl Search {
    /// Compute a shortest path from `from` to `to` by breadth-first search.
    ///
    /// Every step has cost 1. Neighbors are explored in the order the
    /// `pather` yields them and marked visited when enqueued, so the first
    /// time `to` is dequeued its predecessor chain is a shortest path.
    ///
    /// Returns the full path (including both endpoints), or `None` if `to`
    /// cannot be reached. Either way [`visited`](Self::visited) afterwards
    /// reports how many cells were marked. Fails with
    /// [`MazeError::SearchAborted`] when the visit budget runs out.
    pub fn shortest_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Pos,
        to: Pos,
    ) -> Result<Option<Vec<Pos>>, MazeError> {
        self.next_generation();
        self.visited_count = 0;
        self.queue.clear();

        let Some(start_idx) = self.dims.index(from) else {
            return Ok(None);
        };
        let goal_idx = self.dims.index(to);

        self.mark(start_idx, NO_PARENT)?;
        self.queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = 'search: loop {
            let Some(ci) = self.queue.pop_front() else {
                break 'search Ok(false);
            };
            if Some(ci) == goal_idx {
                break 'search Ok(true);
            }

            nbuf.clear();
            pather.neighbors(self.dims.pos(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.dims.index(np) else {
                    continue;
                };
                if self.visited[ni] == self.generation {
                    continue;
                }
                if let Err(e) = self.mark(ni, ci) {
                    break 'search Err(e);
                }
                self.queue.push_back(ni);
            }
        };

        self.nbuf = nbuf;
        self.queue.clear();
        let found = outcome?;

        let Some(goal_idx) = goal_idx.filter(|_| found) else {
            return Ok(None);
        };

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(self.dims.pos(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        Ok(Some(path))
    }

    /// Mark cell `i` visited with predecessor `parent`, honouring the budget.
    fn mark(&mut self, i: usize, parent: usize) -> Result<(), MazeError> {
        if let Some(budget) = self.budget {
            if self.visited_count >= budget {
                return Err(MazeError::SearchAborted {
                    visited: self.visited_count,
                    budget,
                });
            }
        }
        self.visited[i] = self.generation;
        self.parent[i] = parent;
        self.visited_count += 1;
        Ok(())
    }
}

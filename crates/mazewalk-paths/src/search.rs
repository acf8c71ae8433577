use std::collections::VecDeque;

use mazewalk_core::{Dims, Pos};

/// Sentinel parent index marking the search root.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Reusable breadth-first search context for grids of a given size.
///
/// `Search` owns all internal caches (visited stamps, predecessor links,
/// the frontier queue and a neighbor buffer) so that repeated queries on
/// same-sized grids incur no allocations after the first use. Paths are
/// rebuilt from the predecessor links rather than carried in the queue.
#[derive(Debug, Clone)]
pub struct Search {
    pub(crate) dims: Dims,
    // visited[i] == generation means cell i was reached by the current query
    pub(crate) visited: Vec<u32>,
    pub(crate) generation: u32,
    pub(crate) parent: Vec<usize>,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) visited_count: usize,
    pub(crate) budget: Option<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Pos>,
}

impl Search {
    /// Create a new search context for grids of size `dims`, with no visit
    /// budget.
    pub fn new(dims: Dims) -> Self {
        let len = dims.len();
        Self {
            dims,
            visited: vec![0; len],
            generation: 0,
            parent: vec![NO_PARENT; len],
            queue: VecDeque::new(),
            visited_count: 0,
            budget: None,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Limit every query to marking at most `budget` cells as visited.
    ///
    /// A query that needs more fails with
    /// [`MazeError::SearchAborted`](mazewalk_core::MazeError::SearchAborted).
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Replace (or clear) the visit budget.
    pub fn set_budget(&mut self, budget: Option<usize>) {
        self.budget = budget;
    }

    /// The current visit budget.
    #[inline]
    pub fn budget(&self) -> Option<usize> {
        self.budget
    }

    /// Replace the grid size, reallocating caches only when they are too
    /// small. Otherwise the generation is bumped so stale stamps are ignored.
    pub fn set_dims(&mut self, dims: Dims) {
        let new_len = dims.len();
        self.dims = dims;
        self.visited_count = 0;
        self.queue.clear();

        if new_len <= self.visited.len() {
            self.next_generation();
            return;
        }

        self.visited.clear();
        self.visited.resize(new_len, 0);
        self.generation = 0;
        self.parent.clear();
        self.parent.resize(new_len, NO_PARENT);
    }

    /// The grid size this context currently serves.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of cells marked visited by the last query.
    #[inline]
    pub fn visited(&self) -> usize {
        self.visited_count
    }

    /// Whether `p` was marked visited by the last query.
    pub fn was_visited(&self, p: Pos) -> bool {
        self.generation != 0
            && self
                .dims
                .index(p)
                .is_some_and(|i| self.visited[i] == self.generation)
    }

    /// Start a new query: every cell becomes unvisited.
    pub(crate) fn next_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Stamps from 2^32 queries ago would alias; wipe them.
            self.visited.iter_mut().for_each(|v| *v = 0);
            self.generation = 1;
        }
    }
}

//! Shortest-path search over label grids.
//!
//! The search is a plain breadth-first search on the 4-neighbourhood.
//! Neighbours are expanded in a fixed order (up, down, left, right) and
//! marked visited when enqueued, so for a given grid and configuration the
//! returned path is always the same one.
//!
//! All queries run through [`Search`], which owns and reuses its caches so
//! that repeated queries on same-sized grids allocate nothing after warm-up.
//! [`solve`] is the one-shot convenience wrapper.
//!
//! | Item | Role |
//! |---|---|
//! | [`Pather`] | neighbour source for [`Search::shortest_path`] |
//! | [`locate`] | start/end marker lookup |
//! | [`encode`] / [`decode`] | direction sequences to and from symbols |
//! | [`PathResult`] | the structured outcome with [`Statistics`] |

mod bfs;
mod encode;
mod locate;
mod result;
mod search;
mod solve;
mod traits;

#[cfg(test)]
mod proptests;

pub use encode::{decode, directions_of, encode, encode_names, walk};
pub use locate::{Markers, locate};
pub use result::{DirectionCounts, PathResult, Statistics};
pub use search::Search;
pub use solve::solve;
pub use traits::{MazePather, Pather};

use std::collections::VecDeque;

use mazewalk_core::{Dims, DirectionCodes, Grid, Labels, Pos};
use proptest::prelude::*;

use crate::{Search, decode, encode, solve, walk};

/// Random maze: `rows x cols`, walls where `walls[i]` is set, with start and
/// end forced onto two distinct cells.
fn arb_maze() -> impl Strategy<Value = (Grid, Pos, Pos)> {
    (1usize..8, 2usize..8).prop_flat_map(|(rows, cols)| {
        let n = rows * cols;
        (
            proptest::collection::vec(proptest::bool::weighted(0.3), n),
            0..n,
            1..n,
        )
            .prop_map(move |(walls, s, offset)| {
                let e = (s + offset) % n;
                let dims = Dims::new(rows, cols);
                let cells: Vec<Vec<&str>> = (0..rows)
                    .map(|r| {
                        (0..cols)
                            .map(|c| {
                                let i = r * cols + c;
                                if i == s {
                                    "*"
                                } else if i == e {
                                    "#"
                                } else if walls[i] {
                                    "1"
                                } else {
                                    "0"
                                }
                            })
                            .collect()
                    })
                    .collect();
                let grid = Grid::from_rows(cells).unwrap();
                (grid, dims.pos(s), dims.pos(e))
            })
    })
}

/// Distances from `from` over passable cells, by a textbook queue walk.
fn distances(grid: &Grid, labels: &Labels, from: Pos) -> Vec<Option<usize>> {
    let dims = grid.dims();
    let mut dist = vec![None; dims.len()];
    let mut queue = VecDeque::new();
    dist[dims.index(from).unwrap()] = Some(0);
    queue.push_back(from);
    while let Some(p) = queue.pop_front() {
        let d = dist[dims.index(p).unwrap()].unwrap();
        for n in p.neighbors_4() {
            let Some(i) = dims.index(n) else { continue };
            if dist[i].is_none() && grid.at(n).is_some_and(|l| labels.is_passable(l)) {
                dist[i] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

proptest! {
    #[test]
    fn path_is_shortest_and_walkable((grid, start, end) in arb_maze()) {
        let labels = Labels::default();
        let codes = DirectionCodes::default();
        let r = solve(&grid, &labels, &codes).unwrap();
        let dist = distances(&grid, &labels, start);
        let expected = dist[grid.dims().index(end).unwrap()];

        prop_assert_eq!(r.found, expected.is_some());
        prop_assert_eq!(r.stats.start, Some(start));
        prop_assert_eq!(r.stats.end, Some(end));
        if let Some(d) = expected {
            prop_assert_eq!(r.steps(), d);
            prop_assert_eq!(r.positions.first(), Some(&start));
            prop_assert_eq!(r.positions.last(), Some(&end));
            prop_assert_eq!(walk(start, &r.directions), r.positions.clone());
            for p in &r.positions {
                prop_assert!(labels.is_passable(grid.at(*p).unwrap()));
            }
            prop_assert_eq!(r.stats.direction_counts.total(), r.steps());
        } else {
            let component = dist.iter().filter(|d| d.is_some()).count();
            prop_assert_eq!(r.stats.visited_cells, component);
            prop_assert!(r.encoded.is_empty());
        }
    }

    #[test]
    fn repeated_solves_agree((grid, _, _) in arb_maze()) {
        let labels = Labels::default();
        let codes = DirectionCodes::default();
        let mut search = Search::new(Dims::new(1, 1));
        let first = search.solve(&grid, &labels, &codes).unwrap();
        let second = search.solve(&grid, &labels, &codes).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, solve(&grid, &labels, &codes).unwrap());
    }

    #[test]
    fn encoded_path_decodes_back((grid, _, _) in arb_maze()) {
        let labels = Labels::default();
        let codes = DirectionCodes::new("↑", "↓", "←", "→").unwrap();
        let r = solve(&grid, &labels, &codes).unwrap();
        prop_assert_eq!(encode(&r.directions, &codes), r.encoded.clone());
        prop_assert_eq!(decode(&r.encoded, &codes).unwrap(), r.directions);
    }
}

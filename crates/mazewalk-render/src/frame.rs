use std::fmt;

use mazewalk_core::{Dims, Direction, DirectionCodes, Grid, Labels, MazeError, Pos, Role};
use mazewalk_paths::walk;

/// What a tile depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Road,
    Wall,
    Start,
    End,
    /// An intermediate path cell, with the move that leaves it when known.
    Path(Option<Direction>),
    /// A label with no role, or any label in an unclassified frame.
    Other,
}

/// One rendered grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileKind,
    pub text: String,
}

/// A grid laid out as text tiles, row-major.
///
/// `Display` prints each row's tiles back to back, rows separated by `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    dims: Dims,
    tiles: Vec<Tile>,
}

impl Frame {
    /// Raw labels, intermediate path cells replaced by `mark`.
    pub fn trace(grid: &Grid, path: &[Pos], mark: char) -> Self {
        let tiles = grid
            .iter()
            .map(|(_, label)| Tile {
                kind: TileKind::Other,
                text: label.to_string(),
            })
            .collect();
        let mut frame = Self {
            dims: grid.dims(),
            tiles,
        };
        frame.overlay(path, |_| mark.to_string());
        frame
    }

    /// Three-column tiles with role glyphs and direction arrows.
    pub fn pretty(grid: &Grid, labels: &Labels, path: Option<&[Pos]>) -> Self {
        let tiles = grid
            .iter()
            .map(|(_, label)| match labels.role_of(label) {
                Some(Role::Wall) => Tile::new(TileKind::Wall, " # "),
                Some(Role::Road) => Tile::new(TileKind::Road, "   "),
                Some(Role::Start) => Tile::new(TileKind::Start, " S "),
                Some(Role::End) => Tile::new(TileKind::End, " E "),
                None => Tile::new(TileKind::Other, format!(" {label} ")),
            })
            .collect();
        let mut frame = Self {
            dims: grid.dims(),
            tiles,
        };
        if let Some(path) = path {
            frame.overlay(path, |dir| match dir {
                Some(d) => format!(" {} ", d.arrow()),
                None => " · ".to_string(),
            });
        }
        frame
    }

    /// [`pretty`](Self::pretty) with the path given as an encoded move
    /// string, walked from the first start-labelled cell.
    ///
    /// Without a start cell the grid is drawn without a path.
    pub fn pretty_moves(
        grid: &Grid,
        labels: &Labels,
        codes: &DirectionCodes,
        moves: &str,
    ) -> Result<Self, MazeError> {
        let directions = codes.decode(moves)?;
        let start = grid
            .iter()
            .find(|&(_, label)| label == labels.start())
            .map(|(p, _)| p);
        let path = start.map(|s| walk(s, &directions));
        Ok(Self::pretty(grid, labels, path.as_deref()))
    }

    /// Replace every path cell but the first and last. Cells outside the
    /// grid are skipped.
    fn overlay(&mut self, path: &[Pos], text: impl Fn(Option<Direction>) -> String) {
        let n = path.len();
        if n < 3 {
            return;
        }
        for i in 1..n - 1 {
            let Some(idx) = self.dims.index(path[i]) else {
                continue;
            };
            let dir = Direction::between(path[i], path[i + 1]);
            self.tiles[idx] = Tile {
                kind: TileKind::Path(dir),
                text: text(dir),
            };
        }
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// The tile at `p`, if in range.
    pub fn get(&self, p: Pos) -> Option<&Tile> {
        self.dims.index(p).map(|i| &self.tiles[i])
    }

    /// Tiles one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.dims.cols.max(1))
    }
}

impl Tile {
    fn new(kind: TileKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for tile in row {
                f.write_str(&tile.text)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_are_classified_by_role() {
        let grid = Grid::from_lines("*0\n1#").unwrap();
        let frame = Frame::pretty(&grid, &Labels::default(), None);
        let kinds: Vec<TileKind> = frame.rows().flatten().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TileKind::Start, TileKind::Road, TileKind::Wall, TileKind::End]
        );
    }

    #[test]
    fn path_tiles_carry_outgoing_direction() {
        let grid = Grid::from_lines("*00#").unwrap();
        let path = walk(Pos::new(0, 0), &[Direction::Right; 3]);
        let frame = Frame::pretty(&grid, &Labels::default(), Some(&path));
        assert_eq!(
            frame.get(Pos::new(0, 1)).map(|t| t.kind),
            Some(TileKind::Path(Some(Direction::Right)))
        );
        assert_eq!(frame.get(Pos::new(0, 3)).map(|t| t.kind), Some(TileKind::End));
        assert_eq!(frame.get(Pos::new(1, 0)), None);
    }

    #[test]
    fn two_cell_path_has_no_intermediate_cells() {
        let grid = Grid::from_lines("*#").unwrap();
        let path = [Pos::new(0, 0), Pos::new(0, 1)];
        assert_eq!(Frame::trace(&grid, &path, '+').to_string(), "*#");
    }

    #[test]
    fn moves_leaving_the_grid_are_clipped() {
        let grid = Grid::from_lines("*0\n0#").unwrap();
        let labels = Labels::default();
        let codes = DirectionCodes::default();
        let frame = Frame::pretty_moves(&grid, &labels, &codes, "UUR").unwrap();
        assert_eq!(frame.to_string(), " S    \n    E ");
    }

    #[test]
    fn moves_without_start_draw_plain_grid() {
        let grid = Grid::from_lines("00\n0#").unwrap();
        let frame =
            Frame::pretty_moves(&grid, &Labels::default(), &DirectionCodes::default(), "RD")
                .unwrap();
        assert_eq!(frame.to_string(), "      \n    E ");
    }
}

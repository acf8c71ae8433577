use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use mazewalk::render::{Frame, TileKind};

fn tile_color(kind: TileKind) -> Option<Color> {
    match kind {
        TileKind::Road => None,
        TileKind::Wall => Some(Color::DarkGrey),
        TileKind::Start => Some(Color::Green),
        TileKind::End => Some(Color::Red),
        TileKind::Path(_) => Some(Color::Yellow),
        TileKind::Other => Some(Color::Magenta),
    }
}

/// Write `frame` with ANSI colours: endpoints and path in bold.
pub fn paint(frame: &Frame, out: &mut impl Write) -> io::Result<()> {
    for (r, row) in frame.rows().enumerate() {
        if r > 0 {
            queue!(out, Print('\n'))?;
        }
        for tile in row {
            let Some(color) = tile_color(tile.kind) else {
                queue!(out, Print(&tile.text))?;
                continue;
            };
            let bold = matches!(
                tile.kind,
                TileKind::Start | TileKind::End | TileKind::Path(_)
            );
            queue!(out, SetForegroundColor(color))?;
            if bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, Print(&tile.text), SetAttribute(Attribute::Reset), ResetColor)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk::{Grid, Labels};

    #[test]
    fn plain_text_survives_escape_codes() {
        let grid = Grid::from_lines("*0\n1#").unwrap();
        let frame = Frame::pretty(&grid, &Labels::default(), None);
        let mut out = Vec::new();
        paint(&frame, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.contains(" S "));
        assert!(text.contains(" E "));
        assert_eq!(text.matches('\n').count(), 1);
    }

    #[test]
    fn roads_are_left_unstyled() {
        assert_eq!(tile_color(TileKind::Road), None);
        assert_eq!(tile_color(TileKind::Path(None)), Some(Color::Yellow));
    }
}

//! Cell role labels and direction codes.
//!
//! Both are four-string bundles with the same invariant: every string is
//! non-empty and the four are pairwise distinct. They are validated when
//! built, so a [`Labels`] or [`DirectionCodes`] value is always usable.

use std::fmt;

use crate::error::MazeError;
use crate::geom::Direction;

/// The semantic role of a cell label.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    Road,
    Wall,
    Start,
    End,
}

impl Role {
    /// Lowercase role name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Road => "road",
            Self::Wall => "wall",
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check that four named values are non-empty and pairwise distinct.
fn check_bundle(entries: [(&str, &str); 4]) -> Result<(), String> {
    for (name, value) in entries {
        if value.is_empty() {
            return Err(format!("{name} must not be empty"));
        }
    }
    for i in 0..entries.len() {
        for j in i + 1..entries.len() {
            if entries[i].1 == entries[j].1 {
                return Err(format!(
                    "'{}' is used for both {} and {}",
                    entries[i].1, entries[i].0, entries[j].0
                ));
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// The labels assigned to the road, wall, start and end roles.
///
/// Labels are arbitrary non-empty strings; cells are matched against them by
/// plain string equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "LabelsRepr", into = "LabelsRepr"))]
pub struct Labels {
    road: String,
    wall: String,
    start: String,
    end: String,
}

impl Labels {
    /// Build a validated label set.
    ///
    /// Fails with [`MazeError::InvalidSymbolSet`] if a label is empty or two
    /// roles share a label.
    pub fn new(
        road: impl Into<String>,
        wall: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Result<Self, MazeError> {
        let labels = Self {
            road: road.into(),
            wall: wall.into(),
            start: start.into(),
            end: end.into(),
        };
        check_bundle([
            ("road", labels.road.as_str()),
            ("wall", labels.wall.as_str()),
            ("start", labels.start.as_str()),
            ("end", labels.end.as_str()),
        ])
        .map_err(MazeError::InvalidSymbolSet)?;
        Ok(labels)
    }

    pub fn road(&self) -> &str {
        &self.road
    }

    pub fn wall(&self) -> &str {
        &self.wall
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// The label assigned to `role`.
    pub fn label(&self, role: Role) -> &str {
        match role {
            Role::Road => &self.road,
            Role::Wall => &self.wall,
            Role::Start => &self.start,
            Role::End => &self.end,
        }
    }

    /// The role a cell label plays, or `None` for a stray label.
    pub fn role_of(&self, label: &str) -> Option<Role> {
        [Role::Road, Role::Wall, Role::Start, Role::End]
            .into_iter()
            .find(|&r| self.label(r) == label)
    }

    /// Whether a cell with this label can be walked on (road, start or end).
    #[inline]
    pub fn is_passable(&self, label: &str) -> bool {
        label == self.road || label == self.start || label == self.end
    }

    /// `(road, wall, start, end)`.
    pub fn to_tuple(&self) -> (&str, &str, &str, &str) {
        (&self.road, &self.wall, &self.start, &self.end)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            road: "0".into(),
            wall: "1".into(),
            start: "*".into(),
            end: "#".into(),
        }
    }
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Labels(road='{}', wall='{}', start='{}', end='{}')",
            self.road, self.wall, self.start, self.end
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct LabelsRepr {
    road: String,
    wall: String,
    start: String,
    end: String,
}

#[cfg(feature = "serde")]
impl TryFrom<LabelsRepr> for Labels {
    type Error = MazeError;

    fn try_from(r: LabelsRepr) -> Result<Self, Self::Error> {
        Labels::new(r.road, r.wall, r.start, r.end)
    }
}

#[cfg(feature = "serde")]
impl From<Labels> for LabelsRepr {
    fn from(l: Labels) -> Self {
        Self {
            road: l.road,
            wall: l.wall,
            start: l.start,
            end: l.end,
        }
    }
}

// ---------------------------------------------------------------------------
// DirectionCodes
// ---------------------------------------------------------------------------

/// The symbol substituted for each direction when a path is encoded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "DirectionCodesRepr", into = "DirectionCodesRepr")
)]
pub struct DirectionCodes {
    codes: [String; 4],
}

impl DirectionCodes {
    /// Build a validated code set.
    ///
    /// Fails with [`MazeError::InvalidCode`] if a code is empty or two
    /// directions share a code.
    pub fn new(
        up: impl Into<String>,
        down: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Result<Self, MazeError> {
        let codes = [up.into(), down.into(), left.into(), right.into()];
        check_bundle([
            ("up", codes[0].as_str()),
            ("down", codes[1].as_str()),
            ("left", codes[2].as_str()),
            ("right", codes[3].as_str()),
        ])
        .map_err(MazeError::InvalidCode)?;
        Ok(Self { codes })
    }

    /// The symbol for `dir`.
    #[inline]
    pub fn code(&self, dir: Direction) -> &str {
        &self.codes[dir.index()]
    }

    /// Inverse mapping: the direction whose symbol is exactly `symbol`.
    pub fn decode_symbol(&self, symbol: &str) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.code(d) == symbol)
    }

    /// Split an encoded path back into directions.
    ///
    /// At each point the longest matching symbol wins. Fails with
    /// [`MazeError::UnknownDirection`] at the first character no symbol
    /// matches.
    pub fn decode(&self, encoded: &str) -> Result<Vec<Direction>, MazeError> {
        let mut out = Vec::new();
        let mut rest = encoded;
        while !rest.is_empty() {
            let best = Direction::ALL
                .into_iter()
                .filter(|&d| rest.starts_with(self.code(d)))
                .max_by_key(|&d| self.code(d).len());
            let Some(dir) = best else {
                let bad: String = rest.chars().take(1).collect();
                return Err(MazeError::UnknownDirection(bad));
            };
            out.push(dir);
            rest = &rest[self.code(dir).len()..];
        }
        Ok(out)
    }

    /// `(up, down, left, right)`.
    pub fn to_tuple(&self) -> (&str, &str, &str, &str) {
        (&self.codes[0], &self.codes[1], &self.codes[2], &self.codes[3])
    }
}

impl Default for DirectionCodes {
    fn default() -> Self {
        Self {
            codes: ["U".into(), "D".into(), "L".into(), "R".into()],
        }
    }
}

impl fmt::Display for DirectionCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Codes(↑:{}, ↓:{}, ←:{}, →:{})",
            self.codes[0], self.codes[1], self.codes[2], self.codes[3]
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct DirectionCodesRepr {
    up: String,
    down: String,
    left: String,
    right: String,
}

#[cfg(feature = "serde")]
impl TryFrom<DirectionCodesRepr> for DirectionCodes {
    type Error = MazeError;

    fn try_from(r: DirectionCodesRepr) -> Result<Self, Self::Error> {
        DirectionCodes::new(r.up, r.down, r.left, r.right)
    }
}

#[cfg(feature = "serde")]
impl From<DirectionCodes> for DirectionCodesRepr {
    fn from(c: DirectionCodes) -> Self {
        let [up, down, left, right] = c.codes;
        Self {
            up,
            down,
            left,
            right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels() {
        let l = Labels::default();
        assert_eq!(l.to_tuple(), ("0", "1", "*", "#"));
        assert_eq!(l.role_of("*"), Some(Role::Start));
        assert_eq!(l.role_of("x"), None);
        assert!(l.is_passable("0"));
        assert!(l.is_passable("#"));
        assert!(!l.is_passable("1"));
        assert!(!l.is_passable("?"));
    }

    #[test]
    fn multi_character_labels() {
        let l = Labels::new("..", "##", "S1", "E1").unwrap();
        assert_eq!(l.label(Role::Wall), "##");
        assert!(l.is_passable("S1"));
        assert!(!l.is_passable("S"));
    }

    #[test]
    fn labels_reject_duplicates_and_empties() {
        assert!(matches!(
            Labels::new("A", "A", "B", "C"),
            Err(MazeError::InvalidSymbolSet(_))
        ));
        assert!(matches!(
            Labels::new("", "1", "*", "#"),
            Err(MazeError::InvalidSymbolSet(_))
        ));
    }

    #[test]
    fn codes_reject_duplicates() {
        let err = DirectionCodes::new("A", "A", "B", "C").unwrap_err();
        assert_eq!(
            err,
            MazeError::InvalidCode("'A' is used for both up and down".into())
        );
        assert!(matches!(
            DirectionCodes::new("", "D", "L", "R"),
            Err(MazeError::InvalidCode(_))
        ));
    }

    #[test]
    fn codes_inverse_mapping() {
        let c = DirectionCodes::new("上", "下", "左", "右").unwrap();
        for d in Direction::ALL {
            assert_eq!(c.decode_symbol(c.code(d)), Some(d));
        }
        assert_eq!(c.decode_symbol("U"), None);
        assert_eq!(DirectionCodes::default().code(Direction::Left), "L");
    }

    #[test]
    fn codes_decode_whole_string() {
        let c = DirectionCodes::new("n", "s", "w", "e").unwrap();
        assert_eq!(
            c.decode("nnes").unwrap(),
            vec![Direction::Up, Direction::Up, Direction::Right, Direction::Down]
        );
        assert_eq!(c.decode(""), Ok(vec![]));
        assert_eq!(c.decode("nq"), Err(MazeError::UnknownDirection("q".into())));
    }
}

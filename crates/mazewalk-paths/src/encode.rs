//! Path encoding: direction sequences to and from caller-chosen symbols.

use mazewalk_core::{Direction, DirectionCodes, MazeError, Pos};

/// Concatenate the configured symbol of each direction, in order.
pub fn encode(directions: &[Direction], codes: &DirectionCodes) -> String {
    directions.iter().map(|&d| codes.code(d)).collect()
}

/// Encode a sequence of direction names (`"up"`, `"down"`, `"left"`,
/// `"right"`).
///
/// Fails with [`MazeError::UnknownDirection`] on any other name.
pub fn encode_names<S: AsRef<str>>(names: &[S], codes: &DirectionCodes) -> Result<String, MazeError> {
    let mut out = String::new();
    for name in names {
        out.push_str(codes.code(Direction::from_name(name.as_ref())?));
    }
    Ok(out)
}

/// Split an encoded string back into directions.
///
/// See [`DirectionCodes::decode`]; the longest matching symbol wins.
pub fn decode(encoded: &str, codes: &DirectionCodes) -> Result<Vec<Direction>, MazeError> {
    codes.decode(encoded)
}

/// The positions visited when taking `directions` one by one from `start`,
/// including `start` itself.
pub fn walk(start: Pos, directions: &[Direction]) -> Vec<Pos> {
    let mut out = Vec::with_capacity(directions.len() + 1);
    let mut cur = start;
    out.push(cur);
    for &d in directions {
        cur = cur.step(d);
        out.push(cur);
    }
    out
}

/// The directions of the unit steps between consecutive positions.
///
/// Fails with [`MazeError::UnknownDirection`] if two consecutive positions
/// are not adjacent.
pub fn directions_of(path: &[Pos]) -> Result<Vec<Direction>, MazeError> {
    path.windows(2)
        .map(|w| {
            Direction::between(w[0], w[1])
                .ok_or_else(|| MazeError::UnknownDirection(format!("{} -> {}", w[0], w[1])))
        })
        .collect()
}

//! Textual move notation. Upper-case letters turn one layer, lower-case
//! letters turn two layers and `x`/`y`/`z` rotate the whole cube about the
//! right, up and front faces. A trailing `'` turns anticlockwise and a
//! trailing `2` turns twice.

use crate::face::{Action, Direction, Face, ParseError};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub direction: Direction,
    pub face: Face,
}

impl Move {
    #[must_use]
    pub const fn new(action: Action, direction: Direction, face: Face) -> Self {
        Move {
            action,
            direction,
            face,
        }
    }

    /// A single layer turn.
    #[must_use]
    pub const fn turn(direction: Direction, face: Face) -> Self {
        Move::new(Action::Move, direction, face)
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        Move::new(self.action, self.direction.inverse(), self.face)
    }

    /// The letter and direction this move is written with. Rotations about
    /// the left, down and back faces are written as the inverse rotation
    /// about the opposite face.
    fn written(self) -> (char, Direction) {
        match self.action {
            Action::Move => (self.face.letter(), self.direction),
            Action::Move2Layers => (self.face.letter().to_ascii_lowercase(), self.direction),
            Action::Rotate => match self.face {
                Face::Right => ('x', self.direction),
                Face::Up => ('y', self.direction),
                Face::Front => ('z', self.direction),
                Face::Left => ('x', self.direction.inverse()),
                Face::Down => ('y', self.direction.inverse()),
                Face::Back => ('z', self.direction.inverse()),
            },
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (letter, direction) = self.written();
        match direction {
            Direction::Clockwise => write!(f, "{letter}"),
            Direction::Anticlockwise => write!(f, "{letter}'"),
        }
    }
}

/// Parses one token into a move and how many times it repeats.
fn parse_token(token: &str) -> Result<(Move, usize), ParseError> {
    let invalid = || ParseError::InvalidMove(token.to_owned());

    let mut chars = token.chars();
    let letter = chars.next().ok_or_else(invalid)?;
    let (direction, times) = match chars.as_str() {
        "" => (Direction::Clockwise, 1),
        "'" => (Direction::Anticlockwise, 1),
        "2" | "2'" | "'2" => (Direction::Clockwise, 2),
        _ => return Err(invalid()),
    };

    let mv = match letter {
        'x' => Move::new(Action::Rotate, direction, Face::Right),
        'y' => Move::new(Action::Rotate, direction, Face::Up),
        'z' => Move::new(Action::Rotate, direction, Face::Front),
        _ if letter.is_ascii_uppercase() => {
            Move::turn(direction, Face::from_letter(letter).ok_or_else(invalid)?)
        }
        _ => Move::new(
            Action::Move2Layers,
            direction,
            Face::from_letter(letter.to_ascii_uppercase()).ok_or_else(invalid)?,
        ),
    };
    Ok((mv, times))
}

/// Accepts a single quarter turn. Use [`parse_sequence`] for `X2` tokens.
impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_token(s.trim())? {
            (mv, 1) => Ok(mv),
            _ => Err(ParseError::InvalidMove(s.to_owned())),
        }
    }
}

/// Parses whitespace separated moves, expanding doubled moves.
///
/// # Errors
///
/// Returns [`ParseError::InvalidMove`] on the first token that is not a
/// move.
pub fn parse_sequence(s: &str) -> Result<Vec<Move>, ParseError> {
    let mut moves = vec![];
    for token in s.split_whitespace() {
        let (mv, times) = parse_token(token)?;
        moves.extend(std::iter::repeat_n(mv, times));
    }
    Ok(moves)
}

/// Writes moves back out, merging runs of the same quarter turn.
#[must_use]
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .dedup_with_count()
        .filter_map(|(count, mv)| match count % 4 {
            1 => Some(mv.to_string()),
            2 => Some(format!("{}2", mv.written().0)),
            3 => Some(mv.inverse().to_string()),
            _ => None,
        })
        .join(" ")
}

/// The moves that undo `moves`.
#[must_use]
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

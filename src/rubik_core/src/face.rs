//! The closed vocabulary every other module speaks: the six faces, the two
//! turn directions, the six sticker colors and the three kinds of transform.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown face `{0}`, expected one of RIGHT, LEFT, UP, DOWN, FRONT, BACK")]
    UnknownFace(String),
    #[error("Unknown direction `{0}`, expected CLOCKWISE or ANTICLOCKWISE")]
    UnknownDirection(String),
    #[error("Unknown action `{0}`, expected MOVE, ROTATE or MOVE2LAYERS")]
    UnknownAction(String),
    #[error("Invalid move `{0}`")]
    InvalidMove(String),
}

/// A side of the cube. The declaration order is the canonical order used to
/// keep the position tuples of edges and corners sorted.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Face {
    Right,
    Left,
    Up,
    Down,
    Front,
    Back,
}

impl Face {
    /// Every face, in canonical order.
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Right, Left, Up, Down, Front, Back];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// The four faces sharing an edge with this one. The order is fixed and
    /// the solver relies on it to pick which cross edge to place first.
    #[must_use]
    pub const fn neighbors(self) -> [Self; 4] {
        use Face::*;
        match self {
            Front | Back => [Left, Right, Up, Down],
            Left | Right => [Up, Down, Front, Back],
            Up | Down => [Left, Right, Front, Back],
        }
    }

    /// The color of this face's center on a freshly built cube.
    #[must_use]
    pub const fn home_color(self) -> Color {
        match self {
            Face::Front => Color::Red,
            Face::Back => Color::Orange,
            Face::Up => Color::Yellow,
            Face::Down => Color::White,
            Face::Right => Color::Green,
            Face::Left => Color::Blue,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Right => 'R',
            Face::Left => 'L',
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(Face::Right),
            'L' => Some(Face::Left),
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Face::Right => "RIGHT",
            Face::Left => "LEFT",
            Face::Up => "UP",
            Face::Down => "DOWN",
            Face::Front => "FRONT",
            Face::Back => "BACK",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the full name or the single letter, in any case.
impl FromStr for Face {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let mut letters = upper.chars();
        if let (Some(letter), None) = (letters.next(), letters.next()) {
            return Face::from_letter(letter).ok_or_else(|| ParseError::UnknownFace(s.to_owned()));
        }

        Face::ALL
            .into_iter()
            .find(|face| face.name() == upper)
            .ok_or_else(|| ParseError::UnknownFace(s.to_owned()))
    }
}

/// The sense of a quarter turn, as seen from outside the face being turned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Clockwise,
    Anticlockwise,
}

impl Direction {
    pub const ALL: [Self; 2] = [Direction::Clockwise, Direction::Anticlockwise];

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::Anticlockwise,
            Direction::Anticlockwise => Direction::Clockwise,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Clockwise => "CLOCKWISE",
            Direction::Anticlockwise => "ANTICLOCKWISE",
        })
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CW" | "CLOCKWISE" => Ok(Direction::Clockwise),
            "ACW" | "CCW" | "ANTICLOCKWISE" | "COUNTERCLOCKWISE" => Ok(Direction::Anticlockwise),
            _ => Err(ParseError::UnknownDirection(s.to_owned())),
        }
    }
}

/// Sticker colors. Colors never move between pieces, so a piece's colors are
/// its identity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Orange,
    Yellow,
    White,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::White,
        Color::Green,
        Color::Blue,
    ];

    /// The face whose center carries this color on a freshly built cube.
    #[must_use]
    pub const fn home_face(self) -> Face {
        match self {
            Color::Red => Face::Front,
            Color::Orange => Face::Back,
            Color::Yellow => Face::Up,
            Color::White => Face::Down,
            Color::Green => Face::Right,
            Color::Blue => Face::Left,
        }
    }

    /// Display palette for renderers.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Red => (137, 18, 20),
            Color::Orange => (255, 85, 37),
            Color::Yellow => (254, 213, 47),
            Color::White => (255, 255, 255),
            Color::Green => (25, 155, 76),
            Color::Blue => (13, 72, 172),
        }
    }

    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::White => 'W',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Red => "RED",
            Color::Orange => "ORANGE",
            Color::Yellow => "YELLOW",
            Color::White => "WHITE",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
        })
    }
}

/// Which of the three cube transforms a move performs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    /// Turn the single layer touching the face.
    Move,
    /// Reorient the whole cube about the face's axis.
    Rotate,
    /// Turn the face's layer together with the middle slice behind it.
    Move2Layers,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Move => "MOVE",
            Action::Rotate => "ROTATE",
            Action::Move2Layers => "MOVE2LAYERS",
        })
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MOVE" => Ok(Action::Move),
            "ROTATE" => Ok(Action::Rotate),
            "MOVE2LAYERS" => Ok(Action::Move2Layers),
            _ => Err(ParseError::UnknownAction(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn opposite_is_an_involution() {
        for face in Face::ALL {
            assert_ne!(face, face.opposite());
            assert_eq!(face, face.opposite().opposite());
        }
    }

    #[test_log::test]
    fn neighbors_exclude_the_axis() {
        for face in Face::ALL {
            let neighbors = face.neighbors();
            assert!(!neighbors.contains(&face));
            assert!(!neighbors.contains(&face.opposite()));
            assert_eq!(neighbors, face.opposite().neighbors());
        }
    }

    #[test_log::test]
    fn colors_and_faces_correspond() {
        for face in Face::ALL {
            assert_eq!(face.home_color().home_face(), face);
        }
        assert_eq!(Face::Front.home_color(), Color::Red);
        assert_eq!(Face::Down.home_color(), Color::White);
    }

    #[test_log::test]
    fn parses_names_and_letters() {
        assert_eq!("FRONT".parse::<Face>(), Ok(Face::Front));
        assert_eq!("back".parse::<Face>(), Ok(Face::Back));
        assert_eq!("u".parse::<Face>(), Ok(Face::Up));
        assert_eq!("ACW".parse::<Direction>(), Ok(Direction::Anticlockwise));
        assert_eq!("clockwise".parse::<Direction>(), Ok(Direction::Clockwise));
        assert_eq!("Move2Layers".parse::<Action>(), Ok(Action::Move2Layers));
    }

    #[test_log::test]
    fn rejects_unknown_vocabulary() {
        assert!(matches!("MIDDLE".parse::<Face>(), Err(ParseError::UnknownFace(_))));
        assert!(matches!("X".parse::<Face>(), Err(ParseError::UnknownFace(_))));
        assert!(matches!("SIDEWAYS".parse::<Direction>(), Err(ParseError::UnknownDirection(_))));
        assert!(matches!("SPIN".parse::<Action>(), Err(ParseError::UnknownAction(_))));
    }
}

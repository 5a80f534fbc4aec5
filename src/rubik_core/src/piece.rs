use crate::{
    face::{Color, Direction, Face},
    tables::{LAYER_TURN, WHOLE_CUBE_TURN},
};
use enum_dispatch::enum_dispatch;
use std::{array, fmt};

/// The surface every piece exposes regardless of how many stickers it has.
#[enum_dispatch]
pub trait Cubelet {
    /// Turns the layer touching `face`. Pieces outside that layer are left
    /// untouched.
    fn apply_move(&mut self, direction: Direction, face: Face);

    /// Reorients the piece along with the rest of the cube about `face`.
    fn apply_rotate(&mut self, direction: Direction, face: Face);

    fn current_positions(&self) -> &[Face];

    fn current_colors(&self) -> &[Color];

    fn color_at(&self, face: Face) -> Option<Color> {
        let index = self.current_positions().iter().position(|&p| p == face)?;
        Some(self.current_colors()[index])
    }

    fn occupies(&self, face: Face) -> bool {
        self.current_positions().contains(&face)
    }

    fn has_color(&self, color: Color) -> bool {
        self.current_colors().contains(&color)
    }
}

/// A piece with `N` stickers. `positions[i]` is the face that `colors[i]`
/// currently points at, and positions are always kept in canonical face
/// order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cubie<const N: usize> {
    positions: [Face; N],
    colors: [Color; N],
}

pub type Center = Cubie<1>;
pub type Edge = Cubie<2>;
pub type Corner = Cubie<3>;

impl<const N: usize> Cubie<N> {
    /// The piece that sits at `positions` on a freshly built cube.
    #[must_use]
    pub fn solved(positions: [Face; N]) -> Self {
        let mut cubie = Cubie {
            positions,
            colors: positions.map(Face::home_color),
        };
        cubie.canonicalize();
        cubie
    }

    #[must_use]
    pub fn positions(&self) -> [Face; N] {
        self.positions
    }

    #[must_use]
    pub fn colors(&self) -> [Color; N] {
        self.colors
    }

    fn canonicalize(&mut self) {
        let mut stickers: [(Face, Color); N] =
            array::from_fn(|i| (self.positions[i], self.colors[i]));
        stickers.sort_unstable_by_key(|&(face, _)| face);
        self.positions = stickers.map(|(face, _)| face);
        self.colors = stickers.map(|(_, color)| color);
    }
}

impl<const N: usize> Cubelet for Cubie<N> {
    fn apply_move(&mut self, direction: Direction, face: Face) {
        if !self.positions.contains(&face) {
            return;
        }
        let cycle = LAYER_TURN.get(direction, face);
        for position in &mut self.positions {
            if let Some(image) = cycle.image(*position) {
                *position = image;
            }
        }
        self.canonicalize();
    }

    fn apply_rotate(&mut self, direction: Direction, face: Face) {
        let cycle = WHOLE_CUBE_TURN.get(direction, face);
        for position in &mut self.positions {
            if let Some(image) = cycle.image(*position) {
                *position = image;
            }
        }
        self.canonicalize();
    }

    fn current_positions(&self) -> &[Face] {
        &self.positions
    }

    fn current_colors(&self) -> &[Color] {
        &self.colors
    }
}

impl<const N: usize> fmt::Display for Cubie<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (face, color)) in self.positions.iter().zip(&self.colors).enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", face.letter(), color.initial())?;
        }
        Ok(())
    }
}

#[enum_dispatch(Cubelet)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Piece {
    Center(Center),
    Edge(Edge),
    Corner(Corner),
}

impl Piece {
    #[must_use]
    pub fn as_center(&self) -> Option<&Center> {
        match self {
            Piece::Center(center) => Some(center),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Piece::Edge(edge) => Some(edge),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_corner(&self) -> Option<&Corner> {
        match self {
            Piece::Corner(corner) => Some(corner),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Center(center) => fmt::Display::fmt(center, f),
            Piece::Edge(edge) => fmt::Display::fmt(edge, f),
            Piece::Corner(corner) => fmt::Display::fmt(corner, f),
        }
    }
}

//! Milestones of the layer-by-layer method. Each predicate only holds if the
//! one before it holds, so the first predicate that fails tells where a solve
//! has to resume.

use crate::{cube::Cube, face::Face, piece::Cubelet};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Stage {
    BottomCross,
    BottomLayer,
    MiddleLayer,
    TopCross,
    TopEdges,
    PositionedTopCorners,
    OrientedTopCorners,
}

impl Stage {
    pub const ALL: [Self; 7] = {
        use Stage::*;
        let v = [
            BottomCross,
            BottomLayer,
            MiddleLayer,
            TopCross,
            TopEdges,
            PositionedTopCorners,
            OrientedTopCorners,
        ];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        (self as usize).checked_sub(1).map(|i| Stage::ALL[i])
    }

    /// Whether the cube has reached this milestone with `base` as the bottom
    /// face.
    #[must_use]
    pub fn is_reached(self, cube: &Cube, base: Face) -> bool {
        match self {
            Stage::BottomCross => bottom_cross_solved(cube, base),
            Stage::BottomLayer => bottom_layer_solved(cube, base),
            Stage::MiddleLayer => middle_layer_solved(cube, base),
            Stage::TopCross => top_cross_solved(cube, base),
            Stage::TopEdges => top_edges_solved(cube, base),
            Stage::PositionedTopCorners => positioned_top_corners(cube, base),
            Stage::OrientedTopCorners => oriented_top_corners(cube, base),
        }
    }

    /// The first milestone the cube has not reached, or `None` if it is
    /// solved.
    #[must_use]
    pub fn current(cube: &Cube, base: Face) -> Option<Self> {
        Stage::ALL
            .into_iter()
            .find(|stage| !stage.is_reached(cube, base))
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Stage::BottomCross => "bottom cross",
            Stage::BottomLayer => "bottom layer",
            Stage::MiddleLayer => "middle layer",
            Stage::TopCross => "top cross",
            Stage::TopEdges => "top edges",
            Stage::PositionedTopCorners => "positioned top corners",
            Stage::OrientedTopCorners => "oriented top corners",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The four edges carrying the base color are home.
#[must_use]
pub fn bottom_cross_solved(cube: &Cube, base: Face) -> bool {
    let base_color = cube.center_color(base);
    cube.edges()
        .filter(|edge| edge.has_color(base_color))
        .all(|edge| cube.is_home(edge))
}

#[must_use]
pub fn bottom_layer_solved(cube: &Cube, base: Face) -> bool {
    if !bottom_cross_solved(cube, base) {
        return false;
    }
    let base_color = cube.center_color(base);
    cube.corners()
        .filter(|corner| corner.has_color(base_color))
        .all(|corner| cube.is_home(corner))
}

/// Every edge carrying neither the base nor the top color is home.
#[must_use]
pub fn middle_layer_solved(cube: &Cube, base: Face) -> bool {
    if !bottom_layer_solved(cube, base) {
        return false;
    }
    let base_color = cube.center_color(base);
    let top_color = cube.center_color(base.opposite());
    cube.edges()
        .filter(|edge| !edge.has_color(base_color) && !edge.has_color(top_color))
        .all(|edge| cube.is_home(edge))
}

/// Every edge carrying the top color shows it on the top face. The other
/// sticker may still be wrong.
#[must_use]
pub fn top_cross_solved(cube: &Cube, base: Face) -> bool {
    if !middle_layer_solved(cube, base) {
        return false;
    }
    let up = base.opposite();
    let top_color = cube.center_color(up);
    cube.edges()
        .filter(|edge| edge.has_color(top_color))
        .all(|edge| edge.color_at(up) == Some(top_color))
}

#[must_use]
pub fn top_edges_solved(cube: &Cube, base: Face) -> bool {
    if !top_cross_solved(cube, base) {
        return false;
    }
    let top_color = cube.center_color(base.opposite());
    cube.edges()
        .filter(|edge| edge.has_color(top_color))
        .all(|edge| cube.is_home(edge))
}

/// Every top corner sits in its slot, twisted or not.
#[must_use]
pub fn positioned_top_corners(cube: &Cube, base: Face) -> bool {
    if !top_edges_solved(cube, base) {
        return false;
    }
    let top_color = cube.center_color(base.opposite());
    cube.corners()
        .filter(|corner| corner.has_color(top_color))
        .all(|corner| cube.is_placed(corner))
}

/// The whole cube is solved.
#[must_use]
pub fn oriented_top_corners(cube: &Cube, base: Face) -> bool {
    if !positioned_top_corners(cube, base) {
        return false;
    }
    let top_color = cube.center_color(base.opposite());
    cube.corners()
        .filter(|corner| corner.has_color(top_color))
        .all(|corner| cube.is_home(corner))
}

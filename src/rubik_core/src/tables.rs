//! Static permutation data. A quarter turn about a face moves the four faces
//! around it one step along a fixed cycle; each table below spells those
//! cycles out for both directions so nothing is derived at runtime.

use crate::face::{Direction, Face};

/// Four faces in the order a quarter turn carries them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FaceCycle([Face; 4]);

impl FaceCycle {
    /// Where `label` ends up after one step, or `None` if the turn leaves it
    /// alone (the axis face and its opposite).
    #[must_use]
    pub fn image(&self, label: Face) -> Option<Face> {
        let index = self.0.iter().position(|&face| face == label)?;
        Some(self.0[(index + 1) % 4])
    }

    #[must_use]
    pub fn faces(&self) -> [Face; 4] {
        self.0
    }
}

/// Cycles indexed by direction then by the axis face, in canonical face order.
pub struct TurnTable([[FaceCycle; 6]; 2]);

impl TurnTable {
    #[must_use]
    pub fn get(&self, direction: Direction, axis: Face) -> &FaceCycle {
        &self.0[direction as usize][axis as usize]
    }
}

use Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};

/// How a single layer turn moves the labels of the pieces in that layer.
pub static LAYER_TURN: TurnTable = TurnTable([
    [
        FaceCycle([U, B, D, F]),
        FaceCycle([U, F, D, B]),
        FaceCycle([B, R, F, L]),
        FaceCycle([L, F, R, B]),
        FaceCycle([U, R, D, L]),
        FaceCycle([U, L, D, R]),
    ],
    [
        FaceCycle([U, F, D, B]),
        FaceCycle([D, F, U, B]),
        FaceCycle([B, L, F, R]),
        FaceCycle([B, R, F, L]),
        FaceCycle([U, L, D, R]),
        FaceCycle([L, U, R, D]),
    ],
]);

/// How reorienting the whole cube about an axis moves every label.
pub static WHOLE_CUBE_TURN: TurnTable = TurnTable([
    [
        FaceCycle([F, U, B, D]),
        FaceCycle([F, D, B, U]),
        FaceCycle([F, L, B, R]),
        FaceCycle([F, R, B, L]),
        FaceCycle([U, R, D, L]),
        FaceCycle([U, L, D, R]),
    ],
    [
        FaceCycle([F, D, B, U]),
        FaceCycle([F, U, B, D]),
        FaceCycle([F, R, B, L]),
        FaceCycle([F, L, B, R]),
        FaceCycle([U, L, D, R]),
        FaceCycle([U, R, D, L]),
    ],
]);

#[cfg(test)]
mod tests {
    use super::*;

    fn images(table: &TurnTable, direction: Direction, axis: Face) -> Vec<(Face, Face)> {
        let cycle = table.get(direction, axis);
        Face::ALL
            .into_iter()
            .filter_map(|face| cycle.image(face).map(|image| (face, image)))
            .collect()
    }

    #[test_log::test]
    fn cycles_cover_exactly_the_neighbors() {
        for table in [&LAYER_TURN, &WHOLE_CUBE_TURN] {
            for direction in Direction::ALL {
                for axis in Face::ALL {
                    let mut moved = table.get(direction, axis).faces();
                    let mut neighbors = axis.neighbors();
                    moved.sort_unstable();
                    neighbors.sort_unstable();
                    assert_eq!(moved, neighbors);
                    assert_eq!(table.get(direction, axis).image(axis), None);
                    assert_eq!(table.get(direction, axis).image(axis.opposite()), None);
                }
            }
        }
    }

    #[test_log::test]
    fn anticlockwise_undoes_clockwise() {
        for table in [&LAYER_TURN, &WHOLE_CUBE_TURN] {
            for axis in Face::ALL {
                let clockwise = table.get(Direction::Clockwise, axis);
                let anticlockwise = table.get(Direction::Anticlockwise, axis);
                for face in axis.neighbors() {
                    let there = clockwise.image(face).unwrap();
                    assert_eq!(anticlockwise.image(there), Some(face));
                }
            }
        }
    }

    #[test_log::test]
    fn layer_and_whole_cube_turns_agree() {
        for direction in Direction::ALL {
            for axis in Face::ALL {
                assert_eq!(
                    images(&LAYER_TURN, direction, axis),
                    images(&WHOLE_CUBE_TURN, direction, axis),
                );
            }
        }
    }

    #[test_log::test]
    fn opposite_faces_turn_the_other_way() {
        for direction in Direction::ALL {
            for axis in Face::ALL {
                assert_eq!(
                    images(&LAYER_TURN, direction, axis),
                    images(&LAYER_TURN, direction.inverse(), axis.opposite()),
                );
            }
        }
    }
}

//! Scrambling and inspection helpers for drivers and tests.

use crate::{
    cube::{CORNER_SLOTS, Cube, EDGE_SLOTS},
    face::{Direction, Face},
    notation::Move,
};
use log::trace;

/// Every single layer quarter turn.
pub const ALL_MOVES: [Move; 12] = {
    let mut moves = [Move::turn(Direction::Clockwise, Face::Right); 12];
    let mut i = 0;
    while i < 12 {
        moves[i] = Move::turn(Direction::ALL[i / 6], Face::ALL[i % 6]);
        i += 1;
    }
    moves
};

/// A uniformly random layer quarter turn.
pub fn random_move(rng: &mut fastrand::Rng) -> Move {
    ALL_MOVES[rng.usize(..ALL_MOVES.len())]
}

/// Applies `steps` random quarter turns and returns them. Pass a seeded
/// [`fastrand::Rng`] for a reproducible scramble.
pub fn shuffle(cube: &mut Cube, steps: usize, rng: &mut fastrand::Rng) -> Vec<Move> {
    (0..steps)
        .map(|_| {
            let mv = random_move(rng);
            trace!("Scramble: {mv}");
            cube.apply(&mv);
            mv
        })
        .collect()
}

/// Whether every sticker matches the center of the face it points at. Only
/// relative to the centers, so a rotated cube still counts as solved.
#[must_use]
pub fn is_solved(cube: &Cube) -> bool {
    EDGE_SLOTS.into_iter().all(|slot| matches_centers(cube, slot))
        && CORNER_SLOTS.into_iter().all(|slot| matches_centers(cube, slot))
}

fn matches_centers<const N: usize>(cube: &Cube, slot: [Face; N]) -> bool {
    cube.get_colors(slot)
        .is_some_and(|colors| colors == slot.map(|face| cube.center_color(face)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::Action;

    #[test_log::test]
    fn all_moves_are_distinct_quarter_turns() {
        for (i, a) in ALL_MOVES.iter().enumerate() {
            assert_eq!(a.action, Action::Move);
            assert!(ALL_MOVES[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test_log::test]
    fn seeded_shuffles_repeat() {
        let mut a = Cube::new();
        let mut b = Cube::new();
        let first = shuffle(&mut a, 30, &mut fastrand::Rng::with_seed(7));
        let second = shuffle(&mut b, 30, &mut fastrand::Rng::with_seed(7));
        assert_eq!(first, second);
        assert_eq!(a, b);
        assert_eq!(first.len(), 30);
    }

    #[test_log::test]
    fn zero_steps_leaves_the_cube_alone() {
        let mut cube = Cube::new();
        assert!(shuffle(&mut cube, 0, &mut fastrand::Rng::with_seed(1)).is_empty());
        assert!(is_solved(&cube));
    }

    #[test_log::test]
    fn a_single_turn_unsolves() {
        for mv in ALL_MOVES {
            let mut cube = Cube::new();
            cube.apply(&mv);
            assert!(!is_solved(&cube));
        }
    }
}

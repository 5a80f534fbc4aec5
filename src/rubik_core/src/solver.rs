//! A deterministic layer-by-layer solver. Every stage reads the live cube,
//! emits quarter turns of single layers and checks its milestone before and
//! after running, so a bad state aborts the solve instead of looping.

use crate::{
    cube::{CORNER_SLOTS, CornerId, Cube, EDGE_SLOTS, EdgeId, Locate},
    face::{Direction, Face},
    notation::{Move, format_sequence},
    piece::{Corner, Cubelet, Edge},
    stage::Stage,
    start, success, working,
};
use itertools::Itertools;
use log::{debug, info, trace};
use std::{fmt, time::Instant};
use thiserror::Error;

use Direction::{Anticlockwise as Acw, Clockwise as Cw};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Cannot start the {stage} before the {requires} is solved")]
    PreconditionFailed { stage: Stage, requires: Stage },
    #[error("The {stage} was not solved after running its algorithm")]
    PostconditionFailed { stage: Stage },
    #[error("Stalled on the {stage} while {reason}")]
    Stalled { stage: Stage, reason: &'static str },
}

/// The moves a single stage emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageMoves {
    pub stage: Stage,
    pub moves: Vec<Move>,
}

/// Everything a full solve applied, grouped by stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    pub stages: Vec<StageMoves>,
}

impl Solution {
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        self.stages
            .iter()
            .flat_map(|stage| stage.moves.iter().copied())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.iter().map(|stage| stage.moves.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for StageMoves { stage, moves } in &self.stages {
            writeln!(f, "{stage:<22} {}", format_sequence(moves))?;
        }
        Ok(())
    }
}

/// Solves `cube` in place with `base` as the bottom face.
///
/// # Errors
///
/// Returns a [`SolveError`] if a stage fails its pre or postcondition or one
/// of its bounded loops runs out. The cube is left wherever the failing
/// stage stopped.
pub fn solve(cube: &mut Cube, base: Face) -> Result<Solution, SolveError> {
    info!(start!("Solving with {} as the base"), base);
    let timer = Instant::now();

    let stages = Stage::ALL
        .into_iter()
        .map(|stage| solve_stage(cube, stage, base))
        .collect::<Result<Vec<_>, _>>()?;
    let solution = Solution { stages };

    info!(
        success!("Solved in {} moves in {:.3}s"),
        solution.len(),
        timer.elapsed().as_secs_f64()
    );
    Ok(solution)
}

/// Computes the solution on a private copy, leaving `cube` untouched.
///
/// # Errors
///
/// Same as [`solve`].
pub fn plan(cube: &Cube, base: Face) -> Result<Solution, SolveError> {
    let mut scratch = cube.clone();
    solve(&mut scratch, base)
}

/// The first stage that still has work to do, or `None` if the cube is
/// solved.
#[must_use]
pub fn solve_next_step(cube: &Cube, base: Face) -> Option<Stage> {
    Stage::current(cube, base)
}

/// Runs whichever stage comes next.
///
/// # Errors
///
/// Same as [`solve_stage`].
pub fn step(cube: &mut Cube, base: Face) -> Result<Option<StageMoves>, SolveError> {
    solve_next_step(cube, base)
        .map(|stage| solve_stage(cube, stage, base))
        .transpose()
}

/// Runs exactly one stage.
///
/// # Errors
///
/// [`SolveError::PreconditionFailed`] if the previous stage is not solved,
/// [`SolveError::Stalled`] or [`SolveError::PostconditionFailed`] if the
/// stage cannot finish.
pub fn solve_stage(cube: &mut Cube, stage: Stage, base: Face) -> Result<StageMoves, SolveError> {
    if let Some(requires) = stage.previous() {
        if !requires.is_reached(cube, base) {
            return Err(SolveError::PreconditionFailed { stage, requires });
        }
    }
    debug!(working!("Solving the {}"), stage);

    let mut solver = StageSolver {
        cube: &mut *cube,
        stage,
        base,
        up: base.opposite(),
        moves: vec![],
    };
    match stage {
        Stage::BottomCross => solver.bottom_cross()?,
        Stage::BottomLayer => solver.bottom_layer()?,
        Stage::MiddleLayer => solver.middle_layer()?,
        Stage::TopCross => solver.top_cross()?,
        Stage::TopEdges => solver.top_edges()?,
        Stage::PositionedTopCorners => solver.position_top_corners()?,
        Stage::OrientedTopCorners => solver.orient_top_corners()?,
    }
    let StageSolver { moves, .. } = solver;

    if !stage.is_reached(cube, base) {
        return Err(SolveError::PostconditionFailed { stage });
    }
    debug!(working!("The {} took {} moves"), stage, moves.len());
    Ok(StageMoves { stage, moves })
}

/// The face of `pair` that is not `face`.
fn other(pair: [Face; 2], face: Face) -> Face {
    if pair[1] == face { pair[0] } else { pair[1] }
}

struct StageSolver<'a> {
    cube: &'a mut Cube,
    stage: Stage,
    base: Face,
    up: Face,
    moves: Vec<Move>,
}

impl StageSolver<'_> {
    fn cube(&self) -> &Cube {
        self.cube
    }

    fn edge(&self, id: EdgeId) -> Edge {
        *self.cube.edge(id)
    }

    fn corner(&self, id: CornerId) -> Corner {
        *self.cube.corner(id)
    }

    fn stalled(&self, reason: &'static str) -> SolveError {
        SolveError::Stalled {
            stage: self.stage,
            reason,
        }
    }

    fn turn(&mut self, direction: Direction, face: Face) {
        let mv = Move::turn(direction, face);
        trace!("{}: {}", self.stage, mv);
        self.cube.apply(&mv);
        self.moves.push(mv);
    }

    fn perform(&mut self, moves: &[(Direction, Face)]) {
        for &(direction, face) in moves {
            self.turn(direction, face);
        }
    }

    /// Turns the top layer clockwise until `done` holds. Four turns bring the
    /// layer back where it started, so that is the limit.
    fn turn_up_until(
        &mut self,
        reason: &'static str,
        done: impl Fn(&Cube) -> bool,
    ) -> Result<(), SolveError> {
        for _ in 0..4 {
            if done(self.cube()) {
                return Ok(());
            }
            self.turn(Cw, self.up);
        }
        Err(self.stalled(reason))
    }

    fn repeat_until(
        &mut self,
        reason: &'static str,
        limit: usize,
        mut step: impl FnMut(&mut Self) -> Result<(), SolveError>,
        done: impl Fn(&Cube) -> bool,
    ) -> Result<(), SolveError> {
        for _ in 0..limit {
            if done(self.cube()) {
                return Ok(());
            }
            step(self)?;
        }
        if done(self.cube()) {
            Ok(())
        } else {
            Err(self.stalled(reason))
        }
    }

    /// The two side faces of a corner touching the top face.
    fn sides(&self, corner: Corner) -> Result<(Face, Face), SolveError> {
        corner
            .positions()
            .into_iter()
            .filter(|&face| face != self.up)
            .collect_tuple()
            .ok_or_else(|| self.stalled("finding the sides of a top corner"))
    }

    fn top_edges_ids(&self) -> Result<Vec<EdgeId>, SolveError> {
        let ids = EDGE_SLOTS
            .into_iter()
            .filter(|slot| slot.contains(&self.up))
            .map(|slot| self.cube.find_edge(Locate::Positions(slot)))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| self.stalled("collecting the top edges"))?;
        Ok(ids)
    }

    fn top_corner_ids(&self) -> Result<Vec<CornerId>, SolveError> {
        let top_color = self.cube.center_color(self.up);
        let ids = CORNER_SLOTS
            .into_iter()
            .map(|slot| self.cube.find_corner(Locate::Positions(slot)))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| self.stalled("collecting the top corners"))?;
        Ok(ids
            .into_iter()
            .filter(|&id| self.cube.corner(id).has_color(top_color))
            .collect())
    }

    // U' L' U L U F U' F'
    fn insert_left(&mut self, left: Face, front: Face) {
        let up = self.up;
        self.perform(&[
            (Acw, up),
            (Acw, left),
            (Cw, up),
            (Cw, left),
            (Cw, up),
            (Cw, front),
            (Acw, up),
            (Acw, front),
        ]);
    }

    // U R U' R' U' F' U F
    fn insert_right(&mut self, right: Face, front: Face) {
        let up = self.up;
        self.perform(&[
            (Cw, up),
            (Cw, right),
            (Acw, up),
            (Acw, right),
            (Acw, up),
            (Acw, front),
            (Cw, up),
            (Cw, front),
        ]);
    }

    // F R U R' U' F'
    fn flip_top_edges(&mut self, right: Face, front: Face) {
        let up = self.up;
        self.perform(&[
            (Cw, front),
            (Cw, right),
            (Cw, up),
            (Acw, right),
            (Acw, up),
            (Acw, front),
        ]);
    }

    // R U R' U R U2 R' U
    fn swap_top_edges(&mut self, right: Face) {
        let up = self.up;
        self.perform(&[
            (Cw, right),
            (Cw, up),
            (Acw, right),
            (Cw, up),
            (Cw, right),
            (Cw, up),
            (Cw, up),
            (Acw, right),
            (Cw, up),
        ]);
    }

    // U R U' L' U R' U' L
    fn cycle_top_corners(&mut self, left: Face, right: Face) {
        let up = self.up;
        self.perform(&[
            (Cw, up),
            (Cw, right),
            (Acw, up),
            (Acw, left),
            (Cw, up),
            (Acw, right),
            (Acw, up),
            (Cw, left),
        ]);
    }

    // R' D' R D
    fn twist_corner(&mut self, right: Face) {
        let down = self.base;
        self.perform(&[(Acw, right), (Acw, down), (Cw, right), (Cw, down)]);
    }

    fn bottom_cross(&mut self) -> Result<(), SolveError> {
        let (base, up) = (self.base, self.up);
        let base_color = self.cube.center_color(base);

        for side in base.neighbors() {
            let side_color = self.cube.center_color(side);
            let id = self
                .cube
                .find_edge(Locate::Colors([base_color, side_color]))
                .ok_or_else(|| self.stalled("looking for a cross edge"))?;
            if self.cube.is_home(self.cube.edge(id)) {
                continue;
            }

            if self.edge(id).occupies(base) {
                let face = other(self.edge(id).positions(), base);
                self.perform(&[(Cw, face), (Cw, face)]);
            }
            if !self.edge(id).occupies(up) {
                // Spin a side layer a full turn, parking the edge on top as
                // it passes.
                let face = self.edge(id).positions()[0];
                let mut lifted = false;
                for _ in 0..4 {
                    self.turn(Cw, face);
                    if !lifted && self.edge(id).occupies(up) {
                        self.turn(Cw, up);
                        lifted = true;
                    }
                }
            }

            self.turn_up_until("aligning a cross edge", |cube| {
                cube.edge(id).occupies(side)
            })?;
            if self.edge(id).color_at(side) == Some(side_color) {
                self.perform(&[(Cw, side), (Cw, side)]);
            } else {
                self.turn(Cw, up);
                let face = other(self.edge(id).positions(), up);
                self.perform(&[(Cw, face), (Acw, side), (Acw, face)]);
            }
        }
        Ok(())
    }

    fn bottom_layer(&mut self) -> Result<(), SolveError> {
        let (base, up) = (self.base, self.up);
        let ids = CORNER_SLOTS
            .into_iter()
            .filter(|slot| slot.contains(&base))
            .map(|slot| {
                let colors = slot.map(|face| self.cube.center_color(face));
                self.cube.find_corner(Locate::Colors(colors))
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| self.stalled("looking for the bottom corners"))?;

        for id in ids {
            if self.cube.is_home(self.cube.corner(id)) {
                continue;
            }

            if self.corner(id).occupies(base) {
                let positions = self.corner(id).positions();
                let face = if positions[1] == base {
                    positions[0]
                } else {
                    positions[1]
                };
                let mut back = None;
                for i in 0..4 {
                    self.turn(Cw, face);
                    if back.is_none() && self.corner(id).occupies(up) {
                        match i {
                            0 => {
                                self.turn(Cw, up);
                                back = Some(Acw);
                            }
                            2 => {
                                self.turn(Acw, up);
                                back = Some(Cw);
                            }
                            _ => {}
                        }
                    }
                }
                let back = back.ok_or_else(|| self.stalled("lifting a bottom corner"))?;
                self.turn(back, up);
            }

            // Park the corner above its slot.
            self.turn_up_until("aligning a bottom corner", |cube| {
                let corner = cube.corner(id);
                let slot_colors = corner
                    .positions()
                    .map(|face| cube.center_color(if face == up { base } else { face }));
                corner
                    .colors()
                    .iter()
                    .all(|color| slot_colors.contains(color))
            })?;

            // The side face the corner leaves on the first top turn is the
            // one every later repetition turns as well.
            let mut insert_face = None;
            self.repeat_until(
                "inserting a bottom corner",
                6,
                |solver| {
                    let before = solver.corner(id).positions();
                    solver.turn(Cw, up);
                    let face = match insert_face {
                        Some(face) => face,
                        None => {
                            let face = before
                                .into_iter()
                                .find(|&p| !solver.corner(id).occupies(p))
                                .ok_or_else(|| solver.stalled("inserting a bottom corner"))?;
                            insert_face = Some(face);
                            face
                        }
                    };
                    solver.perform(&[(Cw, face), (Acw, up), (Acw, face)]);
                    Ok(())
                },
                |cube| cube.is_home(cube.corner(id)),
            )?;
        }
        Ok(())
    }

    fn middle_layer(&mut self) -> Result<(), SolveError> {
        let up = self.up;
        let base_color = self.cube.center_color(self.base);
        let top_color = self.cube.center_color(up);
        let ids = EDGE_SLOTS
            .into_iter()
            .map(|slot| self.cube.find_edge(Locate::Positions(slot)))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| self.stalled("collecting the middle edges"))?
            .into_iter()
            .filter(|&id| {
                let edge = self.cube.edge(id);
                !edge.has_color(base_color) && !edge.has_color(top_color)
            })
            .collect_vec();

        for id in ids {
            if !self.edge(id).occupies(up) {
                if self.cube.is_home(self.cube.edge(id)) {
                    continue;
                }
                // Wrong slot or flipped: knock it out to the top layer.
                let [near, far] = self.edge(id).positions();
                self.turn(Cw, near);
                let lifted = self.edge(id).occupies(up);
                self.turn(Acw, near);
                if lifted {
                    self.insert_left(far, near);
                } else {
                    self.insert_right(far, near);
                }
            }

            let edge = self.edge(id);
            if !edge.occupies(up) {
                return Err(self.stalled("lifting a middle edge"));
            }
            let side = other(edge.positions(), up);
            let (Some(front_color), Some(up_color)) = (edge.color_at(side), edge.color_at(up))
            else {
                return Err(self.stalled("reading a middle edge"));
            };
            let front = self.cube.face_of(front_color);

            self.turn_up_until("aligning a middle edge", |cube| {
                cube.edge(id).occupies(front)
            })?;
            self.turn(Cw, up);
            let toward = self.cube.face_of(up_color);
            let go_left = self.edge(id).occupies(toward);
            self.turn(Acw, up);
            if go_left {
                self.insert_left(toward, front);
            } else {
                self.insert_right(toward, front);
            }
        }
        Ok(())
    }

    fn top_cross(&mut self) -> Result<(), SolveError> {
        let up = self.up;
        let top_color = self.cube.center_color(up);
        let ids = self.top_edges_ids()?;
        let facing = |cube: &Cube| {
            ids.iter()
                .copied()
                .filter(|&id| cube.edge(id).color_at(up) == Some(top_color))
                .collect_vec()
        };
        let side_of = |cube: &Cube, id: EdgeId| other(cube.edge(id).positions(), up);

        if facing(self.cube()).is_empty() {
            let first = *ids
                .first()
                .ok_or_else(|| self.stalled("collecting the top edges"))?;
            let right = side_of(self.cube(), first);
            self.turn(Cw, up);
            let front = side_of(self.cube(), first);
            self.turn(Acw, up);
            self.flip_top_edges(right, front);
        }

        match facing(self.cube())[..] {
            [_, _, _, _] => {}
            [a, b] => {
                let (s1, s2) = (side_of(self.cube(), a), side_of(self.cube(), b));
                if s1.opposite() != s2 {
                    // An L shape: turn it into a line first.
                    self.turn(Cw, up);
                    let follows = s2 == side_of(self.cube(), a);
                    self.turn(Acw, up);
                    if follows {
                        self.flip_top_edges(s1.opposite(), s2.opposite());
                    } else {
                        self.flip_top_edges(s2.opposite(), s1.opposite());
                    }
                }

                let [a, b] = facing(self.cube())[..] else {
                    return Err(self.stalled("making a line on top"));
                };
                let (s1, s2) = (side_of(self.cube(), a), side_of(self.cube(), b));
                if s1.opposite() != s2 {
                    return Err(self.stalled("making a line on top"));
                }
                self.turn(Cw, up);
                let front = side_of(self.cube(), a);
                self.turn(Acw, up);
                self.flip_top_edges(s1, front);
            }
            _ => return Err(self.stalled("counting the top cross edges")),
        }
        Ok(())
    }

    fn top_edges(&mut self) -> Result<(), SolveError> {
        let up = self.up;
        let ids = self.top_edges_ids()?;
        let side_of = |cube: &Cube, id: EdgeId| other(cube.edge(id).positions(), up);
        let aligned = |cube: &Cube| {
            ids.iter()
                .copied()
                .filter(|&id| cube.edge(id).has_color(cube.center_color(side_of(cube, id))))
                .collect_vec()
        };

        self.turn_up_until("matching top edges", |cube| aligned(cube).len() > 1)?;
        let matched = aligned(self.cube());
        if matched.len() == 4 {
            return Ok(());
        }
        let [mut a, mut b] = matched[..] else {
            return Err(self.stalled("matching top edges"));
        };
        if side_of(self.cube(), a).opposite() == side_of(self.cube(), b) {
            // Matched edges face each other: swap once to get adjacent ones.
            self.swap_top_edges(side_of(self.cube(), a));
            self.turn_up_until("matching top edges", |cube| aligned(cube).len() > 1)?;
            let [c, d] = aligned(self.cube())[..] else {
                return Err(self.stalled("matching top edges"));
            };
            (a, b) = (c, d);
        }

        let (s1, s2) = (side_of(self.cube(), a), side_of(self.cube(), b));
        if s1.opposite() == s2 {
            return Err(self.stalled("matching adjacent top edges"));
        }
        self.turn(Cw, up);
        let right = if s2 == side_of(self.cube(), a) { s2 } else { s1 };
        self.turn(Acw, up);
        self.swap_top_edges(right);
        Ok(())
    }

    fn position_top_corners(&mut self) -> Result<(), SolveError> {
        let up = self.up;
        let ids = self.top_corner_ids()?;
        let placed = |cube: &Cube| {
            ids.iter()
                .copied()
                .filter(|&id| cube.is_placed(cube.corner(id)))
                .collect_vec()
        };

        if placed(self.cube()).is_empty() {
            let left = up.neighbors()[0];
            self.cycle_top_corners(left, left.opposite());
        }
        for _ in 0..3 {
            let [id] = placed(self.cube())[..] else {
                break;
            };
            let (s1, s2) = self.sides(self.corner(id))?;
            self.turn(Cw, up);
            let right = if self.corner(id).occupies(s1) { s2 } else { s1 };
            self.turn(Acw, up);
            self.cycle_top_corners(right.opposite(), right);
        }

        if placed(self.cube()).len() == ids.len() {
            Ok(())
        } else {
            Err(self.stalled("cycling the top corners"))
        }
    }

    fn orient_top_corners(&mut self) -> Result<(), SolveError> {
        let up = self.up;
        let top_color = self.cube.center_color(up);
        let todo = self
            .top_corner_ids()?
            .into_iter()
            .filter(|&id| !self.cube.is_home(self.cube.corner(id)))
            .collect_vec();
        let Some(&first) = todo.first() else {
            return Ok(());
        };

        // Every corner gets twisted in the same slot while the top layer
        // brings them there one at a time.
        let slot = self.corner(first).positions();
        let (s1, s2) = self.sides(self.corner(first))?;
        self.turn(Cw, up);
        let right = if self.corner(first).occupies(s1) { s2 } else { s1 };
        self.turn(Acw, up);

        for &id in todo.iter().rev() {
            self.turn_up_until("bringing a corner to the twisting slot", |cube| {
                cube.corner(id).positions() == slot
            })?;
            self.repeat_until(
                "twisting a top corner",
                6,
                |solver| {
                    solver.twist_corner(right);
                    Ok(())
                },
                |cube| cube.corner(id).color_at(up) == Some(top_color),
            )?;
        }

        self.turn_up_until("realigning the top layer", |cube| {
            cube.is_home(cube.corner(first))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{notation::parse_sequence, utilities::is_solved};

    fn scrambled(sequence: &str) -> Cube {
        let mut cube = Cube::new();
        cube.apply_all(&parse_sequence(sequence).unwrap());
        cube
    }

    #[test_log::test]
    fn solved_cube_needs_no_moves() {
        for base in Face::ALL {
            let mut cube = Cube::new();
            let solution = solve(&mut cube, base).unwrap();
            assert!(solution.is_empty());
            assert_eq!(solution.stages.len(), 7);
            assert_eq!(cube, Cube::new());
        }
    }

    #[test_log::test]
    fn solves_a_known_scramble() {
        let mut cube = scrambled("R U2 F' L D B2 R' U F2 D' L2 B U' R2 F");
        let solution = solve(&mut cube, Face::Down).unwrap();
        assert!(is_solved(&cube));
        assert!(!solution.is_empty());
        assert!(solution.moves().iter().all(|mv| mv.action == crate::Action::Move));
    }

    #[test_log::test]
    fn solution_replays_onto_the_scramble() {
        let start = scrambled("F R' D2 L U' B R2 D F' U2");
        let solution = plan(&start, Face::Down).unwrap();
        assert!(!is_solved(&start));

        let mut replay = start.clone();
        replay.apply_all(&solution.moves());
        assert!(is_solved(&replay));
    }

    #[test_log::test]
    fn plan_is_deterministic_and_pure() {
        let cube = scrambled("L2 D' R B U F2 L' D2 B' R");
        let before = cube.clone();
        let first = plan(&cube, Face::Up).unwrap();
        let second = plan(&cube, Face::Up).unwrap();
        assert_eq!(first, second);
        assert_eq!(cube, before);
    }

    #[test_log::test]
    fn later_stage_requires_earlier_one() {
        let mut cube = scrambled("R U R' U'");
        assert_eq!(
            solve_stage(&mut cube, Stage::TopCross, Face::Down),
            Err(SolveError::PreconditionFailed {
                stage: Stage::TopCross,
                requires: Stage::MiddleLayer,
            })
        );
    }

    #[test_log::test]
    fn stages_finish_in_order() {
        let mut cube = scrambled("B' U L2 F R' D B2 L' U2 R D' F2");
        for (i, stage) in Stage::ALL.into_iter().enumerate() {
            assert_eq!(solve_next_step(&cube, Face::Down).map(|s| s as usize >= i), Some(true));
            solve_stage(&mut cube, stage, Face::Down).unwrap();
            for done in &Stage::ALL[..=i] {
                assert!(done.is_reached(&cube, Face::Down));
            }
        }
        assert_eq!(solve_next_step(&cube, Face::Down), None);
    }

    #[test_log::test]
    fn stepping_ends_solved() {
        let mut cube = scrambled("U F' R2 D L' B U2 R'");
        let mut stages = vec![];
        while let Some(stage_moves) = step(&mut cube, Face::Left).unwrap() {
            assert!(stage_moves.stage.is_reached(&cube, Face::Left));
            stages.push(stage_moves.stage);
        }
        assert!(stages.is_sorted());
        assert!(is_solved(&cube));
    }

    #[test_log::test]
    fn solution_display_has_a_line_per_stage() {
        let solution = plan(&scrambled("R U F"), Face::Down).unwrap();
        let printed = solution.to_string();
        assert_eq!(printed.lines().count(), 7);
        assert!(printed.starts_with("bottom cross"));
    }
}

use crate::{
    face::{Action, Color, Direction, Face},
    notation::Move,
    piece::{Center, Corner, Cubelet, Cubie, Edge, Piece},
};
use itertools::Itertools;
use std::{array, fmt};

use Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};

/// Every edge position on the cube, each in canonical order.
pub const EDGE_SLOTS: [[Face; 2]; 12] = [
    [R, U],
    [R, D],
    [R, F],
    [R, B],
    [L, U],
    [L, D],
    [L, F],
    [L, B],
    [U, F],
    [U, B],
    [D, F],
    [D, B],
];

/// Every corner position on the cube, each in canonical order.
pub const CORNER_SLOTS: [[Face; 3]; 8] = [
    [R, U, F],
    [R, U, B],
    [R, D, F],
    [R, D, B],
    [L, U, F],
    [L, U, B],
    [L, D, F],
    [L, D, B],
];

/// The unfolded layout used when printing a cube: the top face above the
/// four side faces, the bottom face below.
pub const NET: [[Option<Face>; 4]; 3] = [
    [None, Some(U), None, None],
    [Some(L), Some(F), Some(R), Some(B)],
    [None, Some(D), None, None],
];

const EDGE_OFFSET: usize = 6;
const CORNER_OFFSET: usize = EDGE_OFFSET + EDGE_SLOTS.len();

/// Stable handle on one of the twelve edges. The handle follows the piece
/// (its colors), not a position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EdgeId(usize);

/// Stable handle on one of the eight corners.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CornerId(usize);

/// How to pick a piece out of the cube: by the colors it carries or by the
/// positions it currently occupies. Both compare as sets, so the order of
/// the array does not matter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locate<const N: usize> {
    Colors([Color; N]),
    Positions([Face; N]),
}

impl<const N: usize> Locate<N> {
    fn matches(&self, cubie: &Cubie<N>) -> bool {
        match self {
            Locate::Colors(colors) => same_set(&cubie.colors(), colors),
            Locate::Positions(positions) => same_set(&cubie.positions(), positions),
        }
    }
}

fn same_set<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().all(|x| b.contains(x))
}

/// All 26 pieces of a 3x3x3 cube. Pieces are stored centers first, then
/// edges, then corners, and never change slot in the vector; only their
/// position labels change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    pieces: Vec<Piece>,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// A solved cube in the home orientation.
    #[must_use]
    pub fn new() -> Self {
        let centers = Face::ALL.map(|face| Piece::from(Center::solved([face])));
        let edges = EDGE_SLOTS.map(|slot| Piece::from(Edge::solved(slot)));
        let corners = CORNER_SLOTS.map(|slot| Piece::from(Corner::solved(slot)));

        Cube {
            pieces: centers.into_iter().chain(edges).chain(corners).collect(),
        }
    }

    /// Turns the single layer touching `face`.
    pub fn move_layer(&mut self, direction: Direction, face: Face, times: usize) {
        for _ in 0..times {
            for piece in &mut self.pieces {
                piece.apply_move(direction, face);
            }
        }
    }

    /// Reorients the whole cube about `face`. Never changes whether the cube
    /// is solved.
    pub fn rotate(&mut self, direction: Direction, face: Face, times: usize) {
        for _ in 0..times {
            for piece in &mut self.pieces {
                piece.apply_rotate(direction, face);
            }
        }
    }

    /// Turns the layer touching `face` together with the middle slice next
    /// to it, built from a whole-cube rotation followed by turning the
    /// opposite layer back.
    pub fn move_two_layers(&mut self, direction: Direction, face: Face, times: usize) {
        self.rotate(direction, face, times);
        self.move_layer(direction, face.opposite(), times);
    }

    pub fn transform(&mut self, direction: Direction, face: Face, action: Action, times: usize) {
        match action {
            Action::Move => self.move_layer(direction, face, times),
            Action::Rotate => self.rotate(direction, face, times),
            Action::Move2Layers => self.move_two_layers(direction, face, times),
        }
    }

    pub fn apply(&mut self, mv: &Move) {
        self.transform(mv.direction, mv.face, mv.action, 1);
    }

    pub fn apply_all<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for mv in moves {
            self.apply(mv);
        }
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn centers(&self) -> impl Iterator<Item = &Center> {
        self.pieces[..EDGE_OFFSET].iter().filter_map(Piece::as_center)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.pieces[EDGE_OFFSET..CORNER_OFFSET]
            .iter()
            .filter_map(Piece::as_edge)
    }

    pub fn corners(&self) -> impl Iterator<Item = &Corner> {
        self.pieces[CORNER_OFFSET..].iter().filter_map(Piece::as_corner)
    }

    pub fn edge_ids() -> impl Iterator<Item = EdgeId> {
        (0..EDGE_SLOTS.len()).map(EdgeId)
    }

    pub fn corner_ids() -> impl Iterator<Item = CornerId> {
        (0..CORNER_SLOTS.len()).map(CornerId)
    }

    #[must_use]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        self.pieces[EDGE_OFFSET + id.0]
            .as_edge()
            .expect("edge handles index the edge block")
    }

    #[must_use]
    pub fn corner(&self, id: CornerId) -> &Corner {
        self.pieces[CORNER_OFFSET + id.0]
            .as_corner()
            .expect("corner handles index the corner block")
    }

    /// The colors of the piece occupying `positions`, reported in the same
    /// order as `positions`. The positions may be given in any order.
    #[must_use]
    pub fn get_colors<const N: usize>(&self, positions: [Face; N]) -> Option<[Color; N]> {
        let piece = self
            .pieces
            .iter()
            .find(|piece| same_set(piece.current_positions(), &positions))?;
        let colors = positions
            .iter()
            .map(|&face| piece.color_at(face))
            .collect::<Option<Vec<_>>>()?;
        colors.try_into().ok()
    }

    #[must_use]
    pub fn get_center(&self, by: Locate<1>) -> Option<&Center> {
        self.centers().find(|center| by.matches(center))
    }

    #[must_use]
    pub fn get_edge(&self, by: Locate<2>) -> Option<&Edge> {
        self.edges().find(|edge| by.matches(edge))
    }

    #[must_use]
    pub fn get_corner(&self, by: Locate<3>) -> Option<&Corner> {
        self.corners().find(|corner| by.matches(corner))
    }

    #[must_use]
    pub fn find_edge(&self, by: Locate<2>) -> Option<EdgeId> {
        Cube::edge_ids().find(|&id| by.matches(self.edge(id)))
    }

    #[must_use]
    pub fn find_corner(&self, by: Locate<3>) -> Option<CornerId> {
        Cube::corner_ids().find(|&id| by.matches(self.corner(id)))
    }

    /// The color of the center currently facing `face`.
    #[must_use]
    pub fn center_color(&self, face: Face) -> Color {
        self.centers()
            .find(|center| center.positions() == [face])
            .map(|center| center.colors()[0])
            .expect("every face always has a center")
    }

    /// The face whose center currently carries `color`.
    #[must_use]
    pub fn face_of(&self, color: Color) -> Face {
        self.centers()
            .find(|center| center.colors() == [color])
            .map(|center| center.positions()[0])
            .expect("every color always has a center")
    }

    /// Whether every sticker of `cubie` matches the center it faces.
    #[must_use]
    pub fn is_home<const N: usize>(&self, cubie: &Cubie<N>) -> bool {
        cubie.colors() == cubie.positions().map(|face| self.center_color(face))
    }

    /// Whether `cubie` sits in the right slot, possibly twisted or flipped.
    #[must_use]
    pub fn is_placed<const N: usize>(&self, cubie: &Cubie<N>) -> bool {
        same_set(
            &cubie.colors(),
            &cubie.positions().map(|face| self.center_color(face)),
        )
    }

    /// The nine stickers of `face` as they appear in the unfolded net, rows
    /// top to bottom.
    #[must_use]
    pub fn facelets(&self, face: Face) -> [[Color; 3]; 3] {
        let (up, right) = match face {
            F => (U, R),
            R => (U, B),
            B => (U, L),
            L => (U, F),
            U => (B, R),
            D => (F, R),
        };
        let rows = [Some(up), None, Some(up.opposite())];
        let cols = [Some(right.opposite()), None, Some(right)];

        array::from_fn(|row| {
            array::from_fn(|col| {
                let positions = [Some(face), rows[row], cols[col]]
                    .into_iter()
                    .flatten()
                    .collect_vec();
                self.pieces
                    .iter()
                    .find(|piece| same_set(piece.current_positions(), &positions))
                    .and_then(|piece| piece.color_at(face))
                    .expect("every facelet belongs to exactly one piece")
            })
        })
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for band in NET {
            for row in 0..3 {
                let line = band
                    .iter()
                    .map(|slot| match slot {
                        Some(face) => self.facelets(*face)[row]
                            .iter()
                            .map(|color| color.initial())
                            .join(" "),
                        None => " ".repeat(5),
                    })
                    .join(" ");
                writeln!(f, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{Anticlockwise, Clockwise};

    #[test_log::test]
    fn fresh_cube_has_home_colors() {
        let cube = Cube::new();
        assert_eq!(cube.pieces().len(), 26);
        for face in Face::ALL {
            assert_eq!(cube.get_colors([face]), Some([face.home_color()]));
            assert_eq!(cube.center_color(face), face.home_color());
            assert_eq!(cube.face_of(face.home_color()), face);
        }
        assert!(cube.edges().all(|edge| cube.is_home(edge)));
        assert!(cube.corners().all(|corner| cube.is_home(corner)));
    }

    #[test_log::test]
    fn get_colors_ignores_query_order() {
        let mut cube = Cube::new();
        cube.move_layer(Clockwise, F, 1);
        let canonical = cube.get_colors([R, U, F]).unwrap();
        let shuffled = cube.get_colors([F, R, U]).unwrap();
        assert_eq!(shuffled, [canonical[2], canonical[0], canonical[1]]);
        assert_eq!(cube.get_colors([U, F]), Some([Color::Blue, Color::Red]));
        assert_eq!(cube.get_colors([F, U]), Some([Color::Red, Color::Blue]));
    }

    #[test_log::test]
    fn get_colors_rejects_impossible_positions() {
        let cube = Cube::new();
        assert_eq!(cube.get_colors([U, D]), None);
        assert_eq!(cube.get_colors([R, L, F]), None);
    }

    #[test_log::test]
    fn locate_by_colors_and_positions() {
        let mut cube = Cube::new();
        cube.move_layer(Clockwise, R, 1);

        let edge = cube
            .get_edge(Locate::Colors([Color::Yellow, Color::Green]))
            .unwrap();
        assert_eq!(edge.positions(), [R, B]);

        let at = cube.get_edge(Locate::Positions([B, R])).unwrap();
        assert_eq!(at, edge);

        let id = cube
            .find_corner(Locate::Colors([Color::Red, Color::Green, Color::Yellow]))
            .unwrap();
        assert_eq!(cube.corner(id).positions(), [R, U, B]);
        assert_eq!(cube.find_corner(Locate::Positions([B, U, R])), Some(id));

        let center = cube.get_center(Locate::Colors([Color::Green])).unwrap();
        assert_eq!(center.positions(), [R]);
    }

    #[test_log::test]
    fn rotation_relabels_centers() {
        let mut cube = Cube::new();
        cube.rotate(Clockwise, U, 1);
        assert_eq!(cube.get_colors([L]), Some([Color::Red]));
        assert_eq!(cube.get_colors([F]), Some([Color::Green]));
        assert_eq!(cube.get_colors([U]), Some([Color::Yellow]));
        assert!(cube.edges().all(|edge| cube.is_home(edge)));
    }

    #[test_log::test]
    fn two_layer_turn_leaves_the_far_layer() {
        let fresh = Cube::new();
        let mut cube = Cube::new();
        cube.move_two_layers(Clockwise, F, 1);
        for slot in EDGE_SLOTS.into_iter().filter(|slot| slot.contains(&B)) {
            assert_eq!(cube.get_colors(slot), fresh.get_colors(slot));
        }
        assert_eq!(cube.center_color(R), Color::Yellow);
        assert_eq!(cube.center_color(F), Color::Red);
    }

    #[test_log::test]
    fn transform_dispatches_on_action() {
        for (action, direction, face) in [
            (Action::Move, Anticlockwise, L),
            (Action::Rotate, Clockwise, D),
            (Action::Move2Layers, Anticlockwise, B),
        ] {
            let mut direct = Cube::new();
            match action {
                Action::Move => direct.move_layer(direction, face, 2),
                Action::Rotate => direct.rotate(direction, face, 2),
                Action::Move2Layers => direct.move_two_layers(direction, face, 2),
            }
            let mut dispatched = Cube::new();
            dispatched.transform(direction, face, action, 2);
            assert_eq!(direct, dispatched);
        }
    }

    #[test_log::test]
    fn facelets_of_a_turned_face() {
        let mut cube = Cube::new();
        cube.move_layer(Clockwise, U, 1);
        let front = cube.facelets(F);
        assert_eq!(front[0], [Color::Green; 3]);
        assert_eq!(front[1], [Color::Red; 3]);
        assert_eq!(cube.facelets(U), [[Color::Yellow; 3]; 3]);
        assert_eq!(cube.facelets(L)[0], [Color::Red; 3]);
    }

    #[test_log::test]
    fn display_prints_the_net() {
        let printed = Cube::new().to_string();
        let lines = printed.lines().collect_vec();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0].trim(), "Y Y Y");
        assert_eq!(lines[3], "B B B R R R G G G O O O");
        assert_eq!(lines[8].trim(), "W W W");
    }
}

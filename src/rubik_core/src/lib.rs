#![warn(clippy::pedantic)]
#![allow(clippy::similar_names, clippy::too_many_lines)]

pub mod cube;
pub mod face;
pub mod notation;
pub mod piece;
pub mod solver;
pub mod stage;
pub mod tables;
pub mod utilities;

pub use cube::{Cube, Locate};
pub use face::{Action, Color, Direction, Face, ParseError};
pub use notation::Move;
pub use solver::{Solution, SolveError, StageMoves};
pub use stage::Stage;

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}

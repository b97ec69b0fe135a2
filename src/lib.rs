//! Solver for the liquid sorting puzzle: bottles of four stacked color
//! units, poured between each other until every bottle is empty or holds a
//! single color.

pub mod board;
pub mod bottle;
pub mod error;
pub mod heuristic;
pub mod moves;
pub mod search;

pub use board::{parse_board, parse_bottle, Board};
pub use bottle::{Bottle, CAPACITY, SPACE};
pub use error::BoardError;
pub use heuristic::heuristic;
pub use moves::{apply_move, can_pour, legal_moves, replay, Move, Moves};
pub use search::{solve, solve_shortest, SearchStats};

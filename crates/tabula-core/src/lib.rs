//! Core game types: players, outcomes, the game-state contract, and the
//! Subtract-Square, Tic-Tac-Toe and Tippy rules.

mod error;
mod game;
mod grid;
mod notation;
mod outcome;
mod patterns;
mod placement;
mod player;
mod subtract_square;
mod tic_tac_toe;
mod tippy;

pub mod perft;

pub use error::{GridError, MoveError, NotationError, PositionError};
pub use game::GameState;
pub use grid::{CellMove, Coord, Grid, GridKey, Mark};
pub use outcome::{DRAW, LOSE, Outcome, Score, WIN};
pub use player::Player;
pub use subtract_square::{SubtractMove, SubtractSquare};
pub use tic_tac_toe::TicTacToe;
pub use tippy::Tippy;

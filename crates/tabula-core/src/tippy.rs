//! Tippy: like Tic-Tac-Toe, but the winning shape is a "tippy", the S/Z
//! tetromino in any of its four orientations.

use std::sync::Arc;

use crate::error::{GridError, MoveError, PositionError};
use crate::game::GameState;
use crate::grid::{CellMove, Grid, GridKey};
use crate::outcome::Score;
use crate::patterns::Patterns;
use crate::placement::Placement;
use crate::player::Player;

/// A Tippy position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tippy {
    inner: Placement,
}

impl Tippy {
    /// Empty `size x size` board with `next` to move.
    pub fn new(next: Player, size: usize) -> Result<Tippy, GridError> {
        Ok(Tippy::from_grid(next, Grid::new(size)?))
    }

    /// Position with the given marks already on the board.
    pub fn from_grid(next: Player, grid: Grid) -> Tippy {
        let patterns = Arc::new(Patterns::tippies(grid.size()));
        Tippy {
            inner: Placement::new(next, grid, patterns),
        }
    }

    /// The board.
    pub fn grid(&self) -> &Grid {
        self.inner.grid()
    }

    /// Check that this position can arise from legal play.
    pub fn validate(&self) -> Result<(), PositionError> {
        self.inner.validate()
    }

    /// Whether a tippy has been formed.
    pub fn tippy_formed(&self) -> bool {
        self.inner.is_decided()
    }
}

impl GameState for Tippy {
    type Move = CellMove;
    type Key = GridKey;

    fn next_player(&self) -> Player {
        self.inner.next_player()
    }

    fn possible_next_moves(&self) -> Vec<CellMove> {
        self.inner.moves()
    }

    fn apply_move(&self, mv: CellMove) -> Result<Tippy, MoveError> {
        Ok(Tippy {
            inner: self.inner.apply(mv)?,
        })
    }

    fn winner(&self, player: Player) -> bool {
        self.inner.winner(player)
    }

    fn rough_outcome(&self) -> Score {
        self.inner.rough_outcome()
    }

    fn key(&self) -> GridKey {
        self.inner.key()
    }
}

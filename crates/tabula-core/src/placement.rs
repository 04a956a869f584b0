//! Shared rules for games where players alternately place marks on empty
//! cells and the first to fill a winning footprint wins.

use std::sync::Arc;

use crate::error::{MoveError, PositionError};
use crate::grid::{CellMove, Grid, GridKey, Mark};
use crate::outcome::Score;
use crate::patterns::Patterns;
use crate::player::Player;

/// Position of a placement game.
///
/// `completed` caches whether a footprint has been filled, so the game-over
/// test after each move only inspects footprints through the new mark.
#[derive(Debug, Clone)]
pub(crate) struct Placement {
    next: Player,
    grid: Grid,
    patterns: Arc<Patterns>,
    completed: bool,
}

impl Placement {
    /// Wrap an arbitrary board, scanning it once for completed footprints.
    pub(crate) fn new(next: Player, grid: Grid, patterns: Arc<Patterns>) -> Placement {
        let completed = patterns.any_completed(&grid);
        Placement {
            next,
            grid,
            patterns,
            completed,
        }
    }

    pub(crate) fn next_player(&self) -> Player {
        self.next
    }

    pub(crate) fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn is_decided(&self) -> bool {
        self.completed
    }

    pub(crate) fn moves(&self) -> Vec<CellMove> {
        if self.completed {
            return Vec::new();
        }
        self.grid
            .empty_cells()
            .map(|coord| CellMove { coord })
            .collect()
    }

    pub(crate) fn apply(&self, mv: CellMove) -> Result<Placement, MoveError> {
        if self.completed {
            return Err(MoveError::GameOver);
        }
        let grid = self.grid.place(mv.coord, Mark::of(self.next))?;
        let completed = self.patterns.completed_through(&grid, grid.index(mv.coord));
        Ok(Placement {
            next: self.next.opponent(),
            grid,
            patterns: Arc::clone(&self.patterns),
            completed,
        })
    }

    /// Only the player who just moved can have completed a footprint.
    pub(crate) fn winner(&self, player: Player) -> bool {
        self.completed && player != self.next
    }

    pub(crate) fn rough_outcome(&self) -> Score {
        self.patterns.estimate(&self.grid, self.next)
    }

    pub(crate) fn key(&self) -> GridKey {
        self.grid.key(self.next)
    }

    /// Check that the board can arise from alternating play ending with
    /// `next` to move.
    ///
    /// Either player may have opened, so equal counts fit either player to
    /// move; otherwise the player with fewer marks moves next.
    pub(crate) fn validate(&self) -> Result<(), PositionError> {
        let crosses = self.grid.count(Mark::Cross);
        let circles = self.grid.count(Mark::Circle);
        let balanced = match crosses.abs_diff(circles) {
            0 => true,
            1 => (crosses < circles) == (self.next == Player::P1),
            _ => false,
        };
        if !balanced {
            return Err(PositionError::MarkImbalance {
                crosses,
                circles,
                next: self.next,
            });
        }

        let cross_won = self.patterns.completed_by(&self.grid, Mark::Cross);
        let circle_won = self.patterns.completed_by(&self.grid, Mark::Circle);
        if cross_won && circle_won {
            return Err(PositionError::BothCompleted);
        }
        if self.patterns.completed_by(&self.grid, Mark::of(self.next)) {
            return Err(PositionError::NextPlayerCompleted { player: self.next });
        }

        Ok(())
    }
}

impl PartialEq for Placement {
    fn eq(&self, other: &Placement) -> bool {
        self.next == other.next && self.grid == other.grid
    }
}

impl Eq for Placement {}

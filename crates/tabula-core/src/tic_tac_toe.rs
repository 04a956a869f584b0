//! Tic-Tac-Toe on an `n x n` board: `n` in a row, column, or diagonal wins.

use std::sync::Arc;

use crate::error::{GridError, MoveError, PositionError};
use crate::game::GameState;
use crate::grid::{CellMove, Grid, GridKey};
use crate::outcome::Score;
use crate::patterns::Patterns;
use crate::placement::Placement;
use crate::player::Player;

/// A Tic-Tac-Toe position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    inner: Placement,
}

impl TicTacToe {
    /// Empty classic 3x3 board with `next` to move.
    pub fn new(next: Player) -> TicTacToe {
        TicTacToe::from_grid(next, Grid::empty(3))
    }

    /// Empty `size x size` board with `next` to move.
    pub fn with_size(next: Player, size: usize) -> Result<TicTacToe, GridError> {
        Ok(TicTacToe::from_grid(next, Grid::new(size)?))
    }

    /// Position with the given marks already on the board.
    pub fn from_grid(next: Player, grid: Grid) -> TicTacToe {
        let patterns = Arc::new(Patterns::lines(grid.size()));
        TicTacToe {
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
}

impl GameState for TicTacToe {
    type Move = CellMove;
    type Key = GridKey;

    fn next_player(&self) -> Player {
        self.inner.next_player()
    }

    fn possible_next_moves(&self) -> Vec<CellMove> {
        self.inner.moves()
    }

    fn apply_move(&self, mv: CellMove) -> Result<TicTacToe, MoveError> {
        Ok(TicTacToe {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Coord, Mark};
    use crate::outcome::{Outcome, WIN};

    fn play(state: &TicTacToe, moves: &[(u8, u8)]) -> TicTacToe {
        moves.iter().fold(state.clone(), |s, &(x, y)| {
            s.apply_move(CellMove::new(x, y)).unwrap()
        })
    }

    #[test]
    fn empty_board_has_nine_moves() {
        let state = TicTacToe::new(Player::P1);
        assert_eq!(state.possible_next_moves().len(), 9);
        assert!(!state.is_over());
    }

    #[test]
    fn marks_follow_player() {
        let state = play(&TicTacToe::new(Player::P2), &[(0, 0), (1, 1)]);
        assert_eq!(state.grid().get(Coord::new(0, 0)), Some(Mark::Circle));
        assert_eq!(state.grid().get(Coord::new(1, 1)), Some(Mark::Cross));
        assert_eq!(state.next_player(), Player::P2);
    }

    #[test]
    fn row_ends_game_and_loses_for_next_player() {
        // P1 plays the top row while P2 plays the middle row.
        let state = play(
            &TicTacToe::new(Player::P1),
            &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)],
        );
        assert!(state.is_over());
        assert_eq!(state.next_player(), Player::P2);
        assert!(state.winner(Player::P1));
        assert_eq!(state.outcome(), Outcome::Lose);
    }

    #[test]
    fn full_board_without_line_is_draw() {
        // x o x / x o o / o x x
        let state = play(
            &TicTacToe::new(Player::P1),
            &[
                (0, 0),
                (1, 0),
                (2, 0),
                (1, 1),
                (0, 1),
                (2, 1),
                (1, 2),
                (0, 2),
                (2, 2),
            ],
        );
        assert!(state.is_over());
        assert!(!state.winner(Player::P1));
        assert!(!state.winner(Player::P2));
        assert_eq!(state.outcome(), Outcome::Draw);
    }

    #[test]
    fn occupied_and_out_of_bounds_are_never_offered() {
        let state = play(&TicTacToe::new(Player::P1), &[(1, 1)]);
        let moves = state.possible_next_moves();
        assert!(!moves.contains(&CellMove::new(1, 1)));
        assert!(moves.iter().all(|mv| mv.coord.x < 3 && mv.coord.y < 3));
        assert_eq!(
            state.apply_move(CellMove::new(1, 1)),
            Err(MoveError::Occupied { x: 1, y: 1 })
        );
        assert_eq!(
            state.apply_move(CellMove::new(0, 3)),
            Err(MoveError::OutOfBounds { x: 0, y: 3, size: 3 })
        );
    }

    #[test]
    fn no_moves_after_win() {
        let state = play(
            &TicTacToe::new(Player::P1),
            &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)],
        );
        assert!(state.possible_next_moves().is_empty());
        assert_eq!(
            state.apply_move(CellMove::new(2, 0)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn larger_board_needs_full_line() {
        let state = play(
            &TicTacToe::with_size(Player::P1, 4).unwrap(),
            &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)],
        );
        assert!(!state.is_over());
        assert_eq!(state.rough_outcome(), WIN);
        let won = state.apply_move(CellMove::new(3, 0)).unwrap();
        assert!(won.is_over());
        assert!(won.winner(Player::P1));
    }

    #[test]
    fn with_size_rejects_small_boards() {
        assert!(TicTacToe::with_size(Player::P1, 2).is_err());
    }
}

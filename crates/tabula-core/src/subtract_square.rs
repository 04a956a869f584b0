//! Subtract-Square: players alternately subtract a positive perfect square
//! from a running total; whoever brings it to zero wins.

use std::fmt;

use crate::error::MoveError;
use crate::game::GameState;
use crate::outcome::{DRAW, LOSE, Score, WIN};
use crate::player::Player;

/// Subtracting `amount` (a positive perfect square) from the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubtractMove(pub u32);

impl SubtractMove {
    /// The amount subtracted.
    #[inline]
    pub const fn amount(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SubtractMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Subtract-Square position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubtractSquare {
    next: Player,
    total: u32,
}

impl SubtractSquare {
    /// Starting position with `total` remaining and `next` to move.
    pub const fn new(next: Player, total: u32) -> SubtractSquare {
        SubtractSquare { next, total }
    }

    /// The remaining total.
    #[inline]
    pub const fn total(&self) -> u32 {
        self.total
    }
}

/// Whether `n` is a positive perfect square.
fn is_square(n: u32) -> bool {
    n > 0 && n.isqrt().pow(2) == n
}

impl GameState for SubtractSquare {
    type Move = SubtractMove;
    type Key = (Player, u32);

    fn next_player(&self) -> Player {
        self.next
    }

    /// Squares up to the total, smallest first.
    fn possible_next_moves(&self) -> Vec<SubtractMove> {
        (1..=self.total.isqrt())
            .map(|root| SubtractMove(root * root))
            .collect()
    }

    fn apply_move(&self, mv: SubtractMove) -> Result<SubtractSquare, MoveError> {
        let amount = mv.amount();
        if self.total == 0 {
            return Err(MoveError::GameOver);
        }
        if !is_square(amount) {
            return Err(MoveError::NotASquare { amount });
        }
        if amount > self.total {
            return Err(MoveError::ExceedsTotal {
                amount,
                total: self.total,
            });
        }
        Ok(SubtractSquare {
            next: self.next.opponent(),
            total: self.total - amount,
        })
    }

    /// The player who emptied the total wins; that is never the next player.
    fn winner(&self, player: Player) -> bool {
        self.total == 0 && player != self.next
    }

    fn rough_outcome(&self) -> Score {
        if is_square(self.total) {
            return WIN;
        }
        let all_leave_squares = self
            .possible_next_moves()
            .iter()
            .all(|mv| is_square(self.total - mv.amount()));
        if all_leave_squares { LOSE } else { DRAW }
    }

    fn key(&self) -> (Player, u32) {
        (self.next, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;

    #[test]
    fn moves_are_ascending_squares() {
        let state = SubtractSquare::new(Player::P1, 17);
        let amounts: Vec<u32> = state
            .possible_next_moves()
            .iter()
            .map(|mv| mv.amount())
            .collect();
        assert_eq!(amounts, vec![1, 4, 9, 16]);
    }

    #[test]
    fn single_move_from_one() {
        let state = SubtractSquare::new(Player::P1, 1);
        assert_eq!(state.possible_next_moves(), vec![SubtractMove(1)]);
    }

    #[test]
    fn apply_switches_player() {
        let state = SubtractSquare::new(Player::P1, 10);
        let child = state.apply_move(SubtractMove(9)).unwrap();
        assert_eq!(child.total(), 1);
        assert_eq!(child.next_player(), Player::P2);
        assert_eq!(state.total(), 10);
    }

    #[test]
    fn illegal_moves_are_rejected() {
        let state = SubtractSquare::new(Player::P1, 10);
        assert_eq!(
            state.apply_move(SubtractMove(3)),
            Err(MoveError::NotASquare { amount: 3 })
        );
        assert_eq!(
            state.apply_move(SubtractMove(16)),
            Err(MoveError::ExceedsTotal {
                amount: 16,
                total: 10
            })
        );
        assert_eq!(
            SubtractSquare::new(Player::P2, 0).apply_move(SubtractMove(1)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn zero_total_loses_for_next_player() {
        let state = SubtractSquare::new(Player::P1, 4)
            .apply_move(SubtractMove(4))
            .unwrap();
        assert!(state.is_over());
        assert!(state.winner(Player::P1));
        assert!(!state.winner(Player::P2));
        assert_eq!(state.outcome(), Outcome::Lose);
    }

    #[test]
    fn rough_outcome_cases() {
        assert_eq!(SubtractSquare::new(Player::P1, 25).rough_outcome(), WIN);
        // 2 -> only 1 is legal, leaving 1 (a square) for the opponent.
        assert_eq!(SubtractSquare::new(Player::P1, 2).rough_outcome(), LOSE);
        assert_eq!(SubtractSquare::new(Player::P1, 6).rough_outcome(), DRAW);
    }

    #[test]
    fn key_includes_player() {
        let a = SubtractSquare::new(Player::P1, 8);
        let b = SubtractSquare::new(Player::P2, 8);
        assert_ne!(a.key(), b.key());
    }
}

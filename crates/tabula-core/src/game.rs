//! The game-state contract consumed by every search strategy.

use std::fmt;
use std::hash::Hash;

use crate::error::MoveError;
use crate::outcome::{Outcome, Score};
use crate::player::Player;

/// Snapshot of a two-player, sequential, zero-sum, perfect-information game.
///
/// States are immutable values: [`apply_move`](GameState::apply_move) returns
/// a fresh state and never touches `self`. Once the game is over,
/// [`next_player`](GameState::next_player) still records the player who
/// *would* have moved, i.e. the opponent of whoever moved last.
pub trait GameState: Clone + fmt::Debug {
    /// An opaque token identifying one transition.
    type Move: Copy + Eq + Hash + fmt::Debug + fmt::Display;

    /// Canonical structural key. Equal keys imply equal future game trees.
    type Key: Eq + Hash + Clone + fmt::Debug;

    /// The player about to move.
    fn next_player(&self) -> Player;

    /// All legal moves from this state. Empty iff the game is over.
    fn possible_next_moves(&self) -> Vec<Self::Move>;

    /// The state reached by playing `mv`, or the reason it is illegal.
    fn apply_move(&self, mv: Self::Move) -> Result<Self, MoveError>;

    /// Whether `player` has won. Always `false` while the game is running.
    fn winner(&self, player: Player) -> bool;

    /// Heuristic estimate in `[LOSE, WIN]` of the best result the next
    /// player can guarantee, computed without searching the tree.
    fn rough_outcome(&self) -> Score;

    /// Key used to memoize search results for this state.
    fn key(&self) -> Self::Key;

    /// Whether no legal moves remain.
    fn is_over(&self) -> bool {
        self.possible_next_moves().is_empty()
    }

    /// Whether `mv` is one of the legal moves.
    fn is_legal(&self, mv: Self::Move) -> bool {
        self.possible_next_moves().contains(&mv)
    }

    /// Result of a finished game from the next player's perspective.
    ///
    /// Only meaningful once [`is_over`](GameState::is_over) holds.
    fn outcome(&self) -> Outcome {
        let next = self.next_player();
        if self.winner(next) {
            Outcome::Win
        } else if self.winner(next.opponent()) {
            Outcome::Lose
        } else {
            Outcome::Draw
        }
    }
}

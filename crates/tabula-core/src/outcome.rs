//! Numeric outcome domain shared by every game and search.

use std::fmt;

/// A signed evaluation, always from the perspective of one specific player.
///
/// Exact outcomes are exactly [`WIN`], [`LOSE`] or [`DRAW`]; heuristic
/// estimates lie in the closed interval `[LOSE, WIN]`.
pub type Score = f64;

/// The player under consideration has won.
pub const WIN: Score = 1.0;

/// The player under consideration has lost.
pub const LOSE: Score = -1.0;

/// Nobody won.
pub const DRAW: Score = 0.0;

/// Final result of a finished game, seen from one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Numeric value of this outcome.
    #[inline]
    pub const fn score(self) -> Score {
        match self {
            Outcome::Win => WIN,
            Outcome::Lose => LOSE,
            Outcome::Draw => DRAW,
        }
    }

    /// The same result seen from the other player.
    #[inline]
    pub const fn flip(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Lose => write!(f, "lose"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

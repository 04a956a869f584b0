//! The two players of a sequential game.

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use crate::error::NotationError;

/// One of the two players: P1 or P2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Player {
    P1 = 0,
    P2 = 1,
}

impl Player {
    /// Total number of players.
    pub const COUNT: usize = 2;

    /// All players in index order.
    pub const ALL: [Player; 2] = [Player::P1, Player::P2];

    /// Return the index (0 for P1, 1 for P2).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the other player.
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::P1 => write!(f, "p1"),
            Player::P2 => write!(f, "p2"),
        }
    }
}

impl FromStr for Player {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Player, NotationError> {
        match s.to_ascii_lowercase().as_str() {
            "p1" => Ok(Player::P1),
            "p2" => Ok(Player::P2),
            _ => Err(NotationError::InvalidPlayer {
                found: s.to_string(),
            }),
        }
    }
}

//! Compact position notation.
//!
//! - Subtract-Square: `<total> <player>`, e.g. `25 p1`.
//! - Grid games: rows top to bottom separated by `/`, cells `x`, `o` or `.`,
//!   then the player to move, e.g. `x.o/.x./... p2`.

use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;
use crate::game::GameState;
use crate::grid::{Grid, Mark};
use crate::player::Player;
use crate::subtract_square::SubtractSquare;
use crate::tic_tac_toe::TicTacToe;
use crate::tippy::Tippy;

/// Split notation into its two fields.
fn fields(s: &str) -> Result<(&str, Player), NotationError> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(NotationError::WrongFieldCount {
            found: fields.len(),
        });
    }
    Ok((fields[0], fields[1].parse()?))
}

/// Parse the board field of grid notation.
fn parse_grid(board: &str) -> Result<Grid, NotationError> {
    let rows: Vec<&str> = board.split('/').collect();
    let mut grid = Grid::new(rows.len())?;
    let n = rows.len();

    for (y, row) in rows.iter().enumerate() {
        let length = row.chars().count();
        if length != n {
            return Err(NotationError::BadRowLength {
                row: y,
                length,
                expected: n,
            });
        }
        for (x, c) in row.chars().enumerate() {
            let mark = match c {
                '.' => None,
                _ => Some(Mark::from_char(c).ok_or(NotationError::InvalidCellChar { character: c })?),
            };
            grid.set(y * n + x, mark);
        }
    }

    Ok(grid)
}

impl FromStr for SubtractSquare {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<SubtractSquare, NotationError> {
        let (total, next) = fields(s)?;
        let total = total.parse().map_err(|_| NotationError::InvalidTotal {
            found: total.to_string(),
        })?;
        Ok(SubtractSquare::new(next, total))
    }
}

impl fmt::Display for SubtractSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.total(), self.next_player())
    }
}

impl FromStr for TicTacToe {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<TicTacToe, NotationError> {
        let (board, next) = fields(s)?;
        let state = TicTacToe::from_grid(next, parse_grid(board)?);
        state.validate()?;
        Ok(state)
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.grid(), self.next_player())
    }
}

impl FromStr for Tippy {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Tippy, NotationError> {
        let (board, next) = fields(s)?;
        let state = Tippy::from_grid(next, parse_grid(board)?);
        state.validate()?;
        Ok(state)
    }
}

impl fmt::Display for Tippy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.grid(), self.next_player())
    }
}

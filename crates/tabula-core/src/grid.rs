//! Square boards of marks shared by Tic-Tac-Toe and Tippy.

use std::fmt;

use crate::error::{GridError, MoveError};
use crate::player::Player;

/// A cell coordinate: `x` is the column, `y` the row, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    #[inline]
    pub const fn new(x: u8, y: u8) -> Coord {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The mark a player leaves on the board. P1 plays crosses, P2 circles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mark {
    Cross = 0,
    Circle = 1,
}

impl Mark {
    /// The mark placed by `player`.
    #[inline]
    pub const fn of(player: Player) -> Mark {
        match player {
            Player::P1 => Mark::Cross,
            Player::P2 => Mark::Circle,
        }
    }

    /// The player who places this mark.
    #[inline]
    pub const fn owner(self) -> Player {
        match self {
            Mark::Cross => Player::P1,
            Mark::Circle => Player::P2,
        }
    }

    /// Notation character: `x` or `o`.
    pub const fn to_char(self) -> char {
        match self {
            Mark::Cross => 'x',
            Mark::Circle => 'o',
        }
    }

    /// Parse a notation character, case-insensitively.
    pub const fn from_char(c: char) -> Option<Mark> {
        match c {
            'x' | 'X' => Some(Mark::Cross),
            'o' | 'O' => Some(Mark::Circle),
            _ => None,
        }
    }
}

/// Placing a mark on one cell of a grid game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellMove {
    pub coord: Coord,
}

impl CellMove {
    #[inline]
    pub const fn new(x: u8, y: u8) -> CellMove {
        CellMove {
            coord: Coord::new(x, y),
        }
    }
}

impl fmt::Display for CellMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.coord.fmt(f)
    }
}

/// An `n x n` board stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: u8,
    cells: Vec<Option<Mark>>,
}

impl Grid {
    /// Smallest playable dimension.
    pub const MIN_SIZE: usize = 3;

    /// Largest supported dimension.
    pub const MAX_SIZE: usize = 16;

    /// Create an empty `size x size` grid.
    pub fn new(size: usize) -> Result<Grid, GridError> {
        if size < Self::MIN_SIZE {
            return Err(GridError::TooSmall {
                size,
                min: Self::MIN_SIZE,
            });
        }
        if size > Self::MAX_SIZE {
            return Err(GridError::TooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Grid::empty(size as u8))
    }

    /// Empty grid of an already validated size.
    pub(crate) fn empty(size: u8) -> Grid {
        Grid {
            size,
            cells: vec![None; size as usize * size as usize],
        }
    }

    /// Board dimension.
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least nine cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `coord` lies on the board.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Row-major index of an on-board coordinate.
    #[inline]
    pub fn index(&self, coord: Coord) -> usize {
        coord.y as usize * self.size as usize + coord.x as usize
    }

    /// Coordinate of a row-major index.
    #[inline]
    pub fn coord(&self, index: usize) -> Coord {
        let n = self.size as usize;
        Coord::new((index % n) as u8, (index / n) as u8)
    }

    /// The mark at `coord`, or `None` if the cell is empty or off the board.
    pub fn get(&self, coord: Coord) -> Option<Mark> {
        if !self.contains(coord) {
            return None;
        }
        self.cells[self.index(coord)]
    }

    /// The mark at a row-major index.
    #[inline]
    pub(crate) fn at(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }

    /// Overwrite a cell in place. Used while building boards from notation.
    pub(crate) fn set(&mut self, index: usize, mark: Option<Mark>) {
        self.cells[index] = mark;
    }

    /// Return a copy of this grid with `mark` placed at `coord`.
    pub fn place(&self, coord: Coord, mark: Mark) -> Result<Grid, MoveError> {
        if !self.contains(coord) {
            return Err(MoveError::OutOfBounds {
                x: coord.x,
                y: coord.y,
                size: self.size,
            });
        }
        let index = self.index(coord);
        if self.cells[index].is_some() {
            return Err(MoveError::Occupied {
                x: coord.x,
                y: coord.y,
            });
        }
        let mut next = self.clone();
        next.cells[index] = Some(mark);
        Ok(next)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| self.coord(i))
    }

    /// Whether every cell is taken.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of marks on the board.
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    /// Canonical memoization key for this board with `next` to move.
    pub fn key(&self, next: Player) -> GridKey {
        GridKey {
            next,
            size: self.size,
            cells: self.cells.clone().into_boxed_slice(),
        }
    }
}

/// Writes the board part of the position notation, e.g. `x.o/.x./...`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size as usize;
        for (row, cells) in self.cells.chunks(n).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in cells {
                let c = cell.map_or('.', Mark::to_char);
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Structural key of a grid position: player to move, dimension, and the
/// row-major cell list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridKey {
    pub next: Player,
    pub size: u8,
    pub cells: Box<[Option<Mark>]>,
}

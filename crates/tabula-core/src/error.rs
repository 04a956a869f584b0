//! Error types for move application, board construction, and notation parsing.

use crate::player::Player;

/// Reasons a move cannot be applied to a game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The game has already ended; no move is legal.
    #[error("game is over")]
    GameOver,
    /// The coordinate lies outside the board.
    #[error("({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Column of the rejected move.
        x: u8,
        /// Row of the rejected move.
        y: u8,
        /// Board dimension.
        size: u8,
    },
    /// The cell already holds a mark.
    #[error("({x}, {y}) is already occupied")]
    Occupied {
        /// Column of the rejected move.
        x: u8,
        /// Row of the rejected move.
        y: u8,
    },
    /// A Subtract-Square amount that is not a positive perfect square.
    #[error("{amount} is not a positive perfect square")]
    NotASquare {
        /// The rejected amount.
        amount: u32,
    },
    /// A Subtract-Square amount larger than what remains.
    #[error("cannot subtract {amount} from {total}")]
    ExceedsTotal {
        /// The rejected amount.
        amount: u32,
        /// The remaining total.
        total: u32,
    },
}

/// Errors from constructing a grid board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The requested dimension is below the minimum.
    #[error("board size {size} is too small, minimum is {min}")]
    TooSmall {
        /// Requested size.
        size: usize,
        /// Smallest allowed size.
        min: usize,
    },
    /// The requested dimension does not fit the coordinate type.
    #[error("board size {size} is too large, maximum is {max}")]
    TooLarge {
        /// Requested size.
        size: usize,
        /// Largest allowed size.
        max: usize,
    },
}

/// Errors from structural validation of a placement position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The mark counts cannot arise from alternating play with `next` to move.
    #[error("{crosses} crosses and {circles} circles cannot have {next} to move")]
    MarkImbalance {
        crosses: usize,
        circles: usize,
        next: Player,
    },
    /// Both players have completed a winning footprint.
    #[error("both players have completed a winning pattern")]
    BothCompleted,
    /// The player to move has already completed a winning footprint.
    #[error("{player} has completed a winning pattern but is to move")]
    NextPlayerCompleted {
        /// The player to move.
        player: Player,
    },
}

/// Errors that occur when parsing a position from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The notation does not have exactly 2 space-separated fields.
    #[error("expected 2 fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The player field is not "p1" or "p2".
    #[error("invalid player: \"{found}\"")]
    InvalidPlayer {
        /// The invalid player string.
        found: String,
    },
    /// The Subtract-Square total is not a non-negative integer.
    #[error("invalid total: \"{found}\"")]
    InvalidTotal {
        /// The invalid total string.
        found: String,
    },
    /// An unrecognized character appeared in the board.
    #[error("invalid cell character: '{character}'")]
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
    /// A row does not have as many cells as there are rows.
    #[error("row {row} has {length} cells, expected {expected}")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells described.
        length: usize,
        /// Number of rows on the board.
        expected: usize,
    },
    /// The board dimension is not allowed.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying size error.
        #[from]
        source: GridError,
    },
    /// The board cannot arise from legal play.
    #[error("invalid position: {source}")]
    InvalidPosition {
        /// The failed structural check.
        #[from]
        source: PositionError,
    },
}

//! Rule-level error kinds.
//!
//! Every failure a command can produce is recoverable: the game state is
//! left exactly as it was, the caller surfaces the error and prompts
//! again. Persistence failures live in [`crate::persist::PersistError`].

use derive_more::{Display, Error};

use crate::board::{Board, Coord};
use crate::game::Variant;

/// Errors raised by rule validation, command execution, and undo.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum RuleError {
    /// The coordinate lies outside the board.
    #[display("coordinate {coord} is outside the {size}x{size} board")]
    OutOfRange { coord: Coord, size: u16 },

    /// The target cell already holds a stone.
    #[display("cell {coord} is already occupied")]
    Occupied { coord: Coord },

    /// The placement violates variant rules: suicide in Go, a
    /// non-flipping placement in Othello.
    #[display("illegal move at {coord}")]
    IllegalMove { coord: Coord },

    /// Passing while legal moves remain (Othello only).
    #[display("cannot pass while legal moves remain")]
    PassNotAllowed,

    /// The variant has no pass at all (Gomoku).
    #[display("{variant} does not support passing")]
    PassUnsupported { variant: Variant },

    /// The game is already decided; only undo is accepted.
    #[display("the game is already decided")]
    GameOver,

    /// Undo with nothing to reverse.
    #[display("no commands to undo")]
    EmptyHistory,

    /// Board size outside the supported range at creation.
    #[display(
        "board size {size} is outside the supported range {}..={}",
        Board::MIN_SIZE,
        Board::MAX_SIZE
    )]
    InvalidBoardSize { size: u16 },

    /// A variant name that is not "gomoku", "go", or "othello".
    #[display("unknown game variant {name:?}")]
    UnknownVariant { name: String },

    /// A board snapshot from a board of a different size.
    #[display("snapshot is for a {actual}x{actual} board, not {expected}x{expected}")]
    SnapshotMismatch { expected: u16, actual: u16 },
}

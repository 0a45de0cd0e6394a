//! # sente
//!
//! A turn-based, two-player board-game rule engine supporting Gomoku, Go,
//! and Othello.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: The crate is the rule engine - board model, turn
//!    state machine, legality, capture, and scoring. Rendering, input
//!    loops, and AI are external drivers of this API.
//!
//! 2. **Reversible Commands**: Every executed command leaves behind a
//!    delta recording exactly the prior state it destroyed. Undo replays
//!    deltas; it never recomputes rules.
//!
//! 3. **All-or-Nothing**: A command either fully succeeds (state mutated,
//!    history pushed) or fully fails (state untouched, nothing pushed).
//!    The history stack always mirrors applied mutations exactly.
//!
//! 4. **Tagged Dispatch**: Variants are a closed enum. Rule hooks are
//!    selected by matching on the tag, not by trait objects.
//!
//! ## Modules
//!
//! - `board`: Stones, players, coordinates, the square grid
//! - `game`: The `Game` session - command execution, undo, factory
//! - `rules`: Per-variant legality, capture, and scoring
//! - `persist`: JSON snapshot documents and save/load
//! - `error`: Rule-level error kinds

pub mod board;
pub mod error;
pub mod game;
pub mod persist;
pub mod rules;

// Re-export commonly used types
pub use crate::board::{Board, BoardSnapshot, Coord, Player, Stone};
pub use crate::error::RuleError;
pub use crate::game::{create, Command, Game, HistoryEntry, Outcome, Status, Variant};
pub use crate::persist::{load_from_file, save_to_file, PersistError, SaveDocument};

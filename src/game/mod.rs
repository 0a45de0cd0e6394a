//! The game session: command execution, undo history, construction.
//!
//! ## Game
//!
//! One [`Game`] owns one board plus the turn state machine. Commands
//! mutate it; every mutation pushes a reversible history entry.
//!
//! ## Variant dispatch
//!
//! [`Variant`] is a closed tag. The engine matches on it to reach the
//! rule hooks in `crate::rules` - apply, post-move terminal check, turn
//! advance - rather than going through a trait object.

pub mod engine;
pub mod factory;
pub mod history;

pub use engine::{Game, Outcome, Status};
pub use factory::{create, Variant};
pub use history::{Command, HistoryEntry, MoveDelta, PassRecord, PriorState, ResignRecord};

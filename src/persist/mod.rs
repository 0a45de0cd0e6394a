//! Persistence: JSON snapshot documents and file save/load.
//!
//! A [`SaveDocument`] is the logical schema - variant, size, full board,
//! current player, winner, pass count. Loading always produces a
//! brand-new [`Game`] with an empty history stack (a loaded game cannot
//! be undone past the load point) or an error; it never touches a live
//! game.
//!
//! [`Game`]: crate::game::Game

pub mod document;
pub mod error;
pub mod serializer;

pub use document::{SaveDocument, SavedWinner};
pub use error::PersistError;
pub use serializer::{load_from_file, restore, save_to_file, snapshot};

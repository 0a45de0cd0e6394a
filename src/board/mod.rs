//! Board model: cell values, player colors, coordinates, the square grid.
//!
//! Pure data plus local queries. No rule logic lives here - capture,
//! legality, and scoring belong to `crate::rules`.

pub mod grid;
pub mod stone;

pub use grid::{Board, BoardSnapshot};
pub use stone::{Coord, Player, Stone};

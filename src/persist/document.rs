//! The on-disk snapshot schema.

use serde::{Deserialize, Serialize};

use crate::board::{Player, Stone};
use crate::game::{Outcome, Variant};

/// A decided result as persisted: `"black"`, `"white"`, or `"draw"`;
/// an in-progress game stores `null` at the `winner` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavedWinner {
    Black,
    White,
    Draw,
}

impl From<Outcome> for SavedWinner {
    fn from(outcome: Outcome) -> SavedWinner {
        match outcome.winner() {
            Some(Player::Black) => SavedWinner::Black,
            Some(Player::White) => SavedWinner::White,
            None => SavedWinner::Draw,
        }
    }
}

impl From<SavedWinner> for Outcome {
    fn from(winner: SavedWinner) -> Outcome {
        match winner {
            SavedWinner::Black => Outcome::Winner(Player::Black),
            SavedWinner::White => Outcome::Winner(Player::White),
            SavedWinner::Draw => Outcome::Draw,
        }
    }
}

/// The complete persisted state of one game.
///
/// The board is `size` rows of `size` cells, row-major, each cell
/// `"empty"`, `"black"`, or `"white"`. The undo history is deliberately
/// not part of the schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDocument {
    pub variant: Variant,
    pub size: u16,
    pub board: Vec<Vec<Stone>>,
    pub current_player: Player,
    pub winner: Option<SavedWinner>,
    pub pass_count: u32,
}

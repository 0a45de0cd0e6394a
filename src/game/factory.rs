//! Game construction.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Player};
use crate::error::RuleError;
use crate::rules::othello;

use super::engine::Game;

/// The supported game variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Gomoku,
    Go,
    Othello,
}

impl Variant {
    /// Human-readable variant name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Gomoku => "Gomoku",
            Variant::Go => "Go",
            Variant::Othello => "Othello",
        }
    }

    /// Whether this variant has a pass command at all.
    #[must_use]
    pub const fn supports_pass(self) -> bool {
        matches!(self, Variant::Go | Variant::Othello)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gomoku" => Ok(Variant::Gomoku),
            "go" => Ok(Variant::Go),
            "othello" => Ok(Variant::Othello),
            _ => Err(RuleError::UnknownVariant {
                name: s.to_string(),
            }),
        }
    }
}

/// Build a fresh game of `variant` on a `size`-by-`size` board.
///
/// Validates the size (fails with [`RuleError::InvalidBoardSize`]),
/// starts with Black to move, no outcome, zero passes, empty history.
/// Othello additionally seeds the four crossed center stones.
pub fn create(variant: Variant, size: u16) -> Result<Game, RuleError> {
    let mut board = Board::new(size)?;
    if variant == Variant::Othello {
        othello::initial_position(&mut board);
    }
    debug!(%variant, size, "game created");
    Ok(Game {
        variant,
        board,
        current_player: Player::Black,
        outcome: None,
        pass_count: 0,
        history: Vec::new(),
    })
}

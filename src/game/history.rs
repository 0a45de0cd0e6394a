//! Commands and the reversible records they leave behind.
//!
//! A [`Command`] is what a driver submits. Executing one produces a
//! delta - the exact prior state needed to reverse it - and the command
//! plus its delta are pushed onto the history stack as one
//! [`HistoryEntry`]. Undo pops an entry and applies the delta; it never
//! recomputes rules.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Coord, Player};

use super::engine::Outcome;

/// A driver-facing command against a [`Game`].
///
/// [`Game`]: super::engine::Game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Place the current player's stone.
    Move { coord: Coord },
    /// Give up the turn (Go always, Othello when forced).
    Pass,
    /// Concede the game to the opponent.
    Resign,
}

/// Scalar game fields captured before a command runs.
///
/// Restoring these is sufficient to reverse everything a pass or resign
/// touches; a move additionally reverts its board cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriorState {
    pub current_player: Player,
    pub outcome: Option<Outcome>,
    pub pass_count: u32,
}

/// Delta for an executed move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveDelta {
    /// Where the stone was placed.
    pub coord: Coord,
    /// Who placed it.
    pub player: Player,
    /// Opponent stones removed (Go captures) or flipped (Othello).
    /// Always the opponent's color, so coordinates suffice.
    pub captured: SmallVec<[Coord; 8]>,
    pub prior: PriorState,
}

/// Delta for an executed pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassRecord {
    pub prior: PriorState,
}

/// Delta for an executed resignation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResignRecord {
    pub prior: PriorState,
}

/// One executed command with its delta, as stored on the history stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryEntry {
    Move(MoveDelta),
    Pass(PassRecord),
    Resign(ResignRecord),
}

impl HistoryEntry {
    /// The command this entry recorded.
    #[must_use]
    pub fn command(&self) -> Command {
        match self {
            HistoryEntry::Move(delta) => Command::Move { coord: delta.coord },
            HistoryEntry::Pass(_) => Command::Pass,
            HistoryEntry::Resign(_) => Command::Resign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prior() -> PriorState {
        PriorState {
            current_player: Player::Black,
            outcome: None,
            pass_count: 0,
        }
    }

    #[test]
    fn test_entry_reports_its_command() {
        let entry = HistoryEntry::Move(MoveDelta {
            coord: Coord::new(4, 4),
            player: Player::Black,
            captured: SmallVec::new(),
            prior: prior(),
        });
        assert_eq!(
            entry.command(),
            Command::Move {
                coord: Coord::new(4, 4)
            }
        );

        assert_eq!(
            HistoryEntry::Pass(PassRecord { prior: prior() }).command(),
            Command::Pass
        );
        assert_eq!(
            HistoryEntry::Resign(ResignRecord { prior: prior() }).command(),
            Command::Resign
        );
    }

    #[test]
    fn test_command_serialization() {
        let cmd = Command::Move {
            coord: Coord::new(2, 9),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }
}

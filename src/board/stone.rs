//! Value types shared by every variant: players, cell states, coordinates.

use serde::{Deserialize, Serialize};

/// One of the two players in a session.
///
/// Distinct from [`Stone`] so that "whose turn is it" can never hold an
/// empty cell value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The stone color this player places.
    #[must_use]
    pub const fn stone(self) -> Stone {
        match self {
            Player::Black => Stone::Black,
            Player::White => Stone::White,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// State of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// The player owning this stone, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Stone::Empty => None,
            Stone::Black => Some(Player::Black),
            Stone::White => Some(Player::White),
        }
    }

    /// Whether this cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Stone::Empty)
    }
}

impl From<Player> for Stone {
    fn from(player: Player) -> Stone {
        player.stone()
    }
}

/// A 1-based board coordinate.
///
/// Both components lie in `[1, size]` for the board in play. Coordinates
/// outside that range are representable but rejected by [`Board`] access.
///
/// [`Board`]: super::grid::Board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: u16,
    pub y: u16,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// The coordinate one step away in direction `(dx, dy)`.
    ///
    /// Returns `None` when the step would leave the 1-based positive
    /// range entirely; bounds against a concrete board are the board's
    /// concern.
    #[must_use]
    pub fn step(self, dx: i32, dy: i32) -> Option<Coord> {
        let x = i32::from(self.x) + dx;
        let y = i32::from(self.y) + dy;
        if x < 1 || y < 1 || x > i32::from(u16::MAX) || y > i32::from(u16::MAX) {
            return None;
        }
        Some(Coord::new(x as u16, y as u16))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent().opponent(), Player::Black);
    }

    #[test]
    fn test_stone_player_round_trip() {
        assert_eq!(Stone::Black.player(), Some(Player::Black));
        assert_eq!(Stone::White.player(), Some(Player::White));
        assert_eq!(Stone::Empty.player(), None);
        assert_eq!(Stone::from(Player::White), Stone::White);
        assert!(Stone::Empty.is_empty());
        assert!(!Stone::Black.is_empty());
    }

    #[test]
    fn test_coord_step() {
        let c = Coord::new(3, 5);
        assert_eq!(c.step(1, 0), Some(Coord::new(4, 5)));
        assert_eq!(c.step(-1, -1), Some(Coord::new(2, 4)));
        // Steps below 1 leave the coordinate space.
        assert_eq!(Coord::new(1, 1).step(-1, 0), None);
        assert_eq!(Coord::new(1, 1).step(0, -1), None);
    }

    #[test]
    fn test_serialized_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Stone::Empty).unwrap(), "\"empty\"");
        assert_eq!(serde_json::to_string(&Stone::Black).unwrap(), "\"black\"");
        assert_eq!(serde_json::to_string(&Player::White).unwrap(), "\"white\"");
    }

    #[test]
    fn test_coord_equality_and_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Coord::new(2, 3));
        assert!(set.contains(&Coord::new(2, 3)));
        assert!(!set.contains(&Coord::new(3, 2)));
    }
}

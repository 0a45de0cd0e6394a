//! Othello (Reversi): bracketing flips, forced passes, stone count.
//!
//! A legal move flips at least one opponent stone along one of eight
//! rays: contiguous opponent stones terminated by an own stone. A player
//! with no legal move must pass; when neither side can move, or the
//! board fills, the side with more stones wins.

use smallvec::SmallVec;

use crate::board::{Board, Coord, Player, Stone};
use crate::error::RuleError;
use crate::game::{Game, Outcome};

/// The eight flip directions.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Seed the four crossed center stones.
pub(crate) fn initial_position(board: &mut Board) {
    let mid = board.size() / 2;
    board.put(Coord::new(mid, mid), Stone::White);
    board.put(Coord::new(mid + 1, mid + 1), Stone::White);
    board.put(Coord::new(mid, mid + 1), Stone::Black);
    board.put(Coord::new(mid + 1, mid), Stone::Black);
}

/// Place and flip. Fails with [`RuleError::IllegalMove`] before any
/// mutation when the placement would flip nothing.
pub(crate) fn apply_move(
    board: &mut Board,
    coord: Coord,
    player: Player,
) -> Result<SmallVec<[Coord; 8]>, RuleError> {
    let flips = collect_flips(board, coord, player);
    if flips.is_empty() {
        return Err(RuleError::IllegalMove { coord });
    }
    board.put(coord, player.stone());
    for &flip in &flips {
        board.put(flip, player.stone());
    }
    Ok(flips)
}

/// Whether `player` may place at `coord`.
#[must_use]
pub fn is_legal(board: &Board, coord: Coord, player: Player) -> bool {
    board.contains(coord)
        && board.at(coord) == Stone::Empty
        && DIRECTIONS
            .iter()
            .any(|&(dx, dy)| ray_flips(board, coord, player, dx, dy) > 0)
}

/// All legal placements for `player`.
#[must_use]
pub fn legal_moves(board: &Board, player: Player) -> Vec<Coord> {
    board
        .coords()
        .filter(|&coord| is_legal(board, coord, player))
        .collect()
}

/// Whether `player` has no legal placement and is forced to pass.
#[must_use]
pub fn must_pass(board: &Board, player: Player) -> bool {
    !board
        .coords()
        .any(|coord| is_legal(board, coord, player))
}

/// Advance the turn after a move: the opponent plays next unless they
/// have no legal move, in which case the mover goes again; when neither
/// side can move the game settles by stone count.
pub(crate) fn advance_turn(game: &mut Game) {
    let opponent = game.current_player.opponent();
    if !must_pass(&game.board, opponent) {
        game.current_player = opponent;
    } else if must_pass(&game.board, game.current_player) {
        game.outcome = Some(settle(&game.board));
    }
    // Otherwise the opponent is skipped and the mover moves again.
}

/// Decide the game: more stones wins.
#[must_use]
pub(crate) fn settle(board: &Board) -> Outcome {
    let black = board.count(Stone::Black);
    let white = board.count(Stone::White);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Outcome::Winner(Player::Black),
        std::cmp::Ordering::Less => Outcome::Winner(Player::White),
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}

/// Every stone flipped by placing at `coord`, across all eight rays.
fn collect_flips(board: &Board, coord: Coord, player: Player) -> SmallVec<[Coord; 8]> {
    let mut flips = SmallVec::new();
    if board.at(coord) != Stone::Empty {
        return flips;
    }
    for (dx, dy) in DIRECTIONS {
        let count = ray_flips(board, coord, player, dx, dy);
        let mut cursor = coord;
        for _ in 0..count {
            // Steps stay in bounds: ray_flips already walked them.
            if let Some(next) = cursor.step(dx, dy) {
                flips.push(next);
                cursor = next;
            }
        }
    }
    flips
}

/// Number of opponent stones bracketed along one ray, zero when the ray
/// never reaches an own stone.
fn ray_flips(board: &Board, coord: Coord, player: Player, dx: i32, dy: i32) -> usize {
    let opponent = player.opponent();
    let mut count = 0;
    let mut cursor = coord.step(dx, dy);
    while let Some(c) = cursor {
        if !board.contains(c) {
            break;
        }
        let cell = board.at(c);
        if cell == opponent.stone() {
            count += 1;
            cursor = c.step(dx, dy);
        } else if cell == player.stone() {
            return count;
        } else {
            break;
        }
    }
    0
}

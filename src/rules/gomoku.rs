//! Gomoku: five in a row wins.
//!
//! No capture, no pass, no suicide. The win scan runs only around the
//! just-placed stone: four axes, counting contiguous same-color stones
//! in both directions from the placement.

use smallvec::SmallVec;

use crate::board::{Board, Coord, Player};
use crate::error::RuleError;

/// The four scan axes: horizontal, vertical, both diagonals.
const AXES: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Stones in a row required to win.
const WIN_LENGTH: u32 = 5;

/// Place the stone. The engine has already validated range and
/// occupancy; Gomoku adds no legality of its own and captures nothing.
pub(crate) fn apply_move(
    board: &mut Board,
    coord: Coord,
    player: Player,
) -> Result<SmallVec<[Coord; 8]>, RuleError> {
    board.put(coord, player.stone());
    Ok(SmallVec::new())
}

/// Whether the stone just placed at `coord` completes five in a row.
#[must_use]
pub fn is_winning_move(board: &Board, coord: Coord, player: Player) -> bool {
    AXES.iter()
        .any(|&(dx, dy)| run_length(board, coord, player, dx, dy) >= WIN_LENGTH)
}

/// Length of the contiguous run of `player`'s stones through `coord`
/// along the `(dx, dy)` axis, counting both directions.
fn run_length(board: &Board, coord: Coord, player: Player, dx: i32, dy: i32) -> u32 {
    1 + count_ray(board, coord, player, dx, dy) + count_ray(board, coord, player, -dx, -dy)
}

fn count_ray(board: &Board, from: Coord, player: Player, dx: i32, dy: i32) -> u32 {
    let mut count = 0;
    let mut cursor = from.step(dx, dy);
    while let Some(c) = cursor {
        if !board.contains(c) || board.at(c) != player.stone() {
            break;
        }
        count += 1;
        cursor = c.step(dx, dy);
    }
    count
}

//! Go: group capture, suicide prohibition, simplified area scoring.
//!
//! A group is a maximal set of same-colored stones connected through
//! shared edges; its liberties are the distinct empty cells adjacent to
//! any of its stones. Capturing removes every stone of a libertyless
//! opponent group. A move that leaves the mover's own group without
//! liberties after captures is suicide and is rolled back.
//!
//! Settlement uses area scoring: stones on board plus empty regions
//! bordered exclusively by one color. Regions touching both colors, or
//! touching no stone at all, score for nobody.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::board::{Board, Coord, Player, Stone};
use crate::error::RuleError;
use crate::game::Outcome;

/// A connected same-color component and its liberties.
pub(crate) struct Group {
    pub stones: FxHashSet<Coord>,
    pub liberties: FxHashSet<Coord>,
}

/// Tentatively place, capture dead opponent groups, then reject as
/// suicide if the mover's own group ends up with no liberties.
///
/// This is the one rule hook that speculatively mutates: on rejection
/// the placement and every capture are unwound, leaving the board
/// exactly as before the attempt.
pub(crate) fn apply_move(
    board: &mut Board,
    coord: Coord,
    player: Player,
) -> Result<SmallVec<[Coord; 8]>, RuleError> {
    let opponent = player.opponent();
    let mut captured: SmallVec<[Coord; 8]> = SmallVec::new();
    board.put(coord, player.stone());

    for neighbor in board.neighbors(coord) {
        // A neighbor of an already-captured group reads empty here.
        if board.at(neighbor) != opponent.stone() {
            continue;
        }
        let group = collect_group(board, neighbor);
        if group.liberties.is_empty() {
            for &stone in &group.stones {
                board.put(stone, Stone::Empty);
                captured.push(stone);
            }
        }
    }

    let own = collect_group(board, coord);
    if own.liberties.is_empty() {
        board.put(coord, Stone::Empty);
        for &stone in &captured {
            board.put(stone, opponent.stone());
        }
        return Err(RuleError::IllegalMove { coord });
    }
    Ok(captured)
}

/// Collect the group containing the stone at `origin`.
///
/// `origin` must hold a stone; the scan is an iterative BFS bounded by
/// board area.
pub(crate) fn collect_group(board: &Board, origin: Coord) -> Group {
    let color = board.at(origin);
    debug_assert!(color != Stone::Empty);

    let mut stones = FxHashSet::default();
    let mut liberties = FxHashSet::default();
    let mut queue = VecDeque::new();
    stones.insert(origin);
    queue.push_back(origin);

    while let Some(current) = queue.pop_front() {
        for neighbor in board.neighbors(current) {
            let cell = board.at(neighbor);
            if cell == Stone::Empty {
                liberties.insert(neighbor);
            } else if cell == color && stones.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    Group { stones, liberties }
}

/// Decide the game by area score.
#[must_use]
pub(crate) fn settle(board: &Board) -> Outcome {
    let (black, white) = area_score(board);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Outcome::Winner(Player::Black),
        std::cmp::Ordering::Less => Outcome::Winner(Player::White),
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}

/// Area score for (Black, White): stones on board plus empty regions
/// bordered exclusively by that color.
#[must_use]
pub fn area_score(board: &Board) -> (usize, usize) {
    let mut black = board.count(Stone::Black);
    let mut white = board.count(Stone::White);
    let mut visited: FxHashSet<Coord> = FxHashSet::default();

    for coord in board.coords() {
        if board.at(coord) != Stone::Empty || visited.contains(&coord) {
            continue;
        }
        let region = explore_region(board, coord, &mut visited);
        match (region.touches_black, region.touches_white) {
            (true, false) => black += region.cells,
            (false, true) => white += region.cells,
            // Contested or fully neutral regions score for nobody.
            _ => {}
        }
    }
    (black, white)
}

struct Region {
    cells: usize,
    touches_black: bool,
    touches_white: bool,
}

fn explore_region(board: &Board, origin: Coord, visited: &mut FxHashSet<Coord>) -> Region {
    let mut region = Region {
        cells: 0,
        touches_black: false,
        touches_white: false,
    };
    let mut queue = VecDeque::new();
    visited.insert(origin);
    queue.push_back(origin);

    while let Some(current) = queue.pop_front() {
        region.cells += 1;
        for neighbor in board.neighbors(current) {
            match board.at(neighbor) {
                Stone::Empty => {
                    if visited.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
                Stone::Black => region.touches_black = true,
                Stone::White => region.touches_white = true,
            }
        }
    }
    region
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(black: &[(u16, u16)], white: &[(u16, u16)]) -> Board {
        let mut board = Board::new(9).unwrap();
        for &(x, y) in black {
            board.set(Coord::new(x, y), Stone::Black).unwrap();
        }
        for &(x, y) in white {
            board.set(Coord::new(x, y), Stone::White).unwrap();
        }
        board
    }

    #[test]
    fn test_single_stone_liberties() {
        let board = board_with(&[(5, 5)], &[]);
        let group = collect_group(&board, Coord::new(5, 5));
        assert_eq!(group.stones.len(), 1);
        assert_eq!(group.liberties.len(), 4);

        let corner = board_with(&[(1, 1)], &[]);
        let group = collect_group(&corner, Coord::new(1, 1));
        assert_eq!(group.liberties.len(), 2);
    }

    #[test]
    fn test_group_spans_connected_stones() {
        let board = board_with(&[(3, 3), (4, 3), (4, 4)], &[]);
        let group = collect_group(&board, Coord::new(3, 3));
        assert_eq!(group.stones.len(), 3);
        // 3 stones in an L shape: 7 distinct liberties.
        assert_eq!(group.liberties.len(), 7);
    }

    #[test]
    fn test_shared_liberty_counted_once() {
        // Two black stones diagonal to each other are separate groups,
        // but a straight pair shares edge liberties.
        let board = board_with(&[(3, 3), (4, 3)], &[]);
        let group = collect_group(&board, Coord::new(3, 3));
        assert_eq!(group.stones.len(), 2);
        assert_eq!(group.liberties.len(), 6);
    }

    #[test]
    fn test_capture_surrounded_stone() {
        // White at (2,2) with three of its four liberties filled.
        let mut board = board_with(&[(1, 2), (3, 2), (2, 1)], &[(2, 2)]);
        let captured = apply_move(&mut board, Coord::new(2, 3), Player::Black).unwrap();
        assert_eq!(captured.as_slice(), [Coord::new(2, 2)]);
        assert_eq!(board.get(Coord::new(2, 2)).unwrap(), Stone::Empty);
        assert_eq!(board.get(Coord::new(2, 3)).unwrap(), Stone::Black);
    }

    #[test]
    fn test_suicide_rolls_back() {
        // (1,1) would have zero liberties against black at (1,2),(2,1).
        let mut board = board_with(&[(1, 2), (2, 1)], &[]);
        let before = board.clone();
        let err = apply_move(&mut board, Coord::new(1, 1), Player::White).unwrap_err();
        assert_eq!(
            err,
            RuleError::IllegalMove {
                coord: Coord::new(1, 1)
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_capture_takes_precedence_over_suicide() {
        // Black plays into the corner point (1,1) whose liberties are
        // white, but the white stone at (2,1) is itself in atari and
        // dies first, giving the black stone a liberty.
        // The white stone at (1,2) keeps a liberty at (1,3) and lives.
        let mut board = board_with(&[(3, 1), (2, 2)], &[(2, 1), (1, 2)]);
        let captured = apply_move(&mut board, Coord::new(1, 1), Player::Black).unwrap();
        assert_eq!(captured.as_slice(), [Coord::new(2, 1)]);
        assert_eq!(board.get(Coord::new(1, 1)).unwrap(), Stone::Black);
        assert_eq!(board.get(Coord::new(2, 1)).unwrap(), Stone::Empty);
    }

    #[test]
    fn test_multi_stone_capture() {
        // Two-stone white chain at (2,2),(3,2) fully surrounded except
        // one liberty at (4,2).
        let mut board = board_with(
            &[(1, 2), (2, 1), (3, 1), (2, 3), (3, 3)],
            &[(2, 2), (3, 2)],
        );
        let captured = apply_move(&mut board, Coord::new(4, 2), Player::Black).unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(board.count(Stone::White), 0);
    }

    #[test]
    fn test_area_score_exclusive_territory() {
        // One black stone: every empty cell forms one region touching
        // only black.
        let board = board_with(&[(5, 5)], &[]);
        assert_eq!(area_score(&board), (81, 0));
    }

    #[test]
    fn test_area_score_contested_region_is_neutral() {
        let board = board_with(&[(3, 3)], &[(7, 7)]);
        // The single empty region touches both colors.
        assert_eq!(area_score(&board), (1, 1));
        assert_eq!(settle(&board), Outcome::Draw);
    }

    #[test]
    fn test_area_score_empty_board_is_neutral() {
        let board = board_with(&[], &[]);
        assert_eq!(area_score(&board), (0, 0));
        assert_eq!(settle(&board), Outcome::Draw);
    }

    #[test]
    fn test_area_score_walled_corner() {
        // Black wall on column 3 from y=1..=9 splits the board; the
        // two-column region x<3 touches only black.
        let wall: Vec<(u16, u16)> = (1..=9).map(|y| (3, y)).collect();
        let board = board_with(&wall, &[(7, 5)]);
        let (black, white) = area_score(&board);
        // 9 stones + 18 enclosed cells left of the wall.
        assert_eq!(black, 27);
        // White's stone sits in the contested right region.
        assert_eq!(white, 1);
        assert_eq!(settle(&board), Outcome::Winner(Player::Black));
    }
}

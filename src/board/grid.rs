//! The square grid of stones.
//!
//! Cells are stored in a flat `Vec` indexed row-major by 1-based
//! coordinates. All public access is bounds-checked: an out-of-range
//! coordinate is reported as [`RuleError::OutOfRange`], never clamped.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::RuleError;

use super::stone::{Coord, Stone};

/// The 4-connected neighbor offsets.
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A square board of [`Stone`] cells with a fixed size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: u16,
    cells: Vec<Stone>,
}

/// A full-board copy taken by [`Board::snapshot`], replayable with
/// [`Board::restore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    size: u16,
    cells: Vec<Stone>,
}

impl Board {
    /// Smallest supported board edge.
    pub const MIN_SIZE: u16 = 8;
    /// Largest supported board edge.
    pub const MAX_SIZE: u16 = 19;

    /// Create an empty board.
    ///
    /// Fails with [`RuleError::InvalidBoardSize`] outside
    /// `MIN_SIZE..=MAX_SIZE`.
    pub fn new(size: u16) -> Result<Self, RuleError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(RuleError::InvalidBoardSize { size });
        }
        Ok(Self {
            size,
            cells: vec![Stone::Empty; usize::from(size) * usize::from(size)],
        })
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Whether `coord` lies on this board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        (1..=self.size).contains(&coord.x) && (1..=self.size).contains(&coord.y)
    }

    fn index(&self, coord: Coord) -> usize {
        (usize::from(coord.y) - 1) * usize::from(self.size) + (usize::from(coord.x) - 1)
    }

    /// Read a cell.
    pub fn get(&self, coord: Coord) -> Result<Stone, RuleError> {
        if !self.contains(coord) {
            return Err(RuleError::OutOfRange {
                coord,
                size: self.size,
            });
        }
        Ok(self.cells[self.index(coord)])
    }

    /// Write a cell.
    pub fn set(&mut self, coord: Coord, stone: Stone) -> Result<(), RuleError> {
        if !self.contains(coord) {
            return Err(RuleError::OutOfRange {
                coord,
                size: self.size,
            });
        }
        let index = self.index(coord);
        self.cells[index] = stone;
        Ok(())
    }

    /// Unchecked read for crate-internal callers that have already
    /// validated `coord` (engine checks, BFS over `neighbors` output).
    pub(crate) fn at(&self, coord: Coord) -> Stone {
        debug_assert!(self.contains(coord));
        self.cells[self.index(coord)]
    }

    /// Unchecked write, same contract as [`Board::at`].
    pub(crate) fn put(&mut self, coord: Coord, stone: Stone) {
        debug_assert!(self.contains(coord));
        let index = self.index(coord);
        self.cells[index] = stone;
    }

    /// Whether the cell at `coord` is empty.
    pub fn is_empty(&self, coord: Coord) -> Result<bool, RuleError> {
        Ok(self.get(coord)?.is_empty())
    }

    /// The up-to-4 in-bounds orthogonal neighbors of `coord`.
    #[must_use]
    pub fn neighbors(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        let mut out = SmallVec::new();
        for (dx, dy) in NEIGHBOR_OFFSETS {
            if let Some(next) = coord.step(dx, dy) {
                if self.contains(next) {
                    out.push(next);
                }
            }
        }
        out
    }

    /// Iterate every coordinate on the board in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (1..=size).flat_map(move |y| (1..=size).map(move |x| Coord::new(x, y)))
    }

    /// Count cells holding `stone`.
    #[must_use]
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&cell| cell == stone).count()
    }

    /// Whether no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count(Stone::Empty) == 0
    }

    /// Take an independent copy of the full grid.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            size: self.size,
            cells: self.cells.clone(),
        }
    }

    /// Replace the grid wholesale with a prior snapshot.
    ///
    /// Fails with [`RuleError::SnapshotMismatch`] when the snapshot was
    /// taken from a board of a different size.
    pub fn restore(&mut self, snapshot: &BoardSnapshot) -> Result<(), RuleError> {
        if snapshot.size != self.size {
            return Err(RuleError::SnapshotMismatch {
                expected: self.size,
                actual: snapshot.size,
            });
        }
        self.cells.clone_from(&snapshot.cells);
        Ok(())
    }
}

//! Conversion between a live [`Game`] and its persisted snapshot.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::board::Coord;
use crate::game::{factory, Game, Outcome};

use super::document::{SaveDocument, SavedWinner};
use super::error::PersistError;

/// Capture a game as a snapshot document.
#[must_use]
pub fn snapshot(game: &Game) -> SaveDocument {
    let board = game.board();
    let size = board.size();
    let rows = (1..=size)
        .map(|y| (1..=size).map(|x| board.at(Coord::new(x, y))).collect())
        .collect();
    SaveDocument {
        variant: game.variant(),
        size,
        board: rows,
        current_player: game.current_player(),
        winner: game.outcome().map(SavedWinner::from),
        pass_count: game.pass_count(),
    }
}

/// Reconstruct a game from a snapshot document.
///
/// Validates the schema (board size range, grid dimensions) and returns
/// a brand-new game with an empty history stack. Nothing is mutated on
/// failure.
pub fn restore(doc: &SaveDocument) -> Result<Game, PersistError> {
    let mut game = factory::create(doc.variant, doc.size)
        .map_err(|err| PersistError::schema(err.to_string()))?;

    let size = usize::from(doc.size);
    if doc.board.len() != size {
        return Err(PersistError::schema(format!(
            "board has {} rows, expected {}",
            doc.board.len(),
            size
        )));
    }
    for (row_index, row) in doc.board.iter().enumerate() {
        if row.len() != size {
            return Err(PersistError::schema(format!(
                "board row {} has {} cells, expected {}",
                row_index + 1,
                row.len(),
                size
            )));
        }
        for (col_index, &stone) in row.iter().enumerate() {
            let coord = Coord::new(col_index as u16 + 1, row_index as u16 + 1);
            game.board.put(coord, stone);
        }
    }

    game.current_player = doc.current_player;
    game.outcome = doc.winner.map(Outcome::from);
    game.pass_count = doc.pass_count;
    debug!(variant = %game.variant(), size = doc.size, "snapshot restored");
    Ok(game)
}

/// Save a game to `path` as pretty-printed JSON.
pub fn save_to_file(game: &Game, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(&snapshot(game))?;
    fs::write(path, text)?;
    info!(path = %path.display(), variant = %game.variant(), "game saved");
    Ok(())
}

/// Load a game from a JSON save file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Game, PersistError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let doc: SaveDocument = serde_json::from_str(&text)?;
    let game = restore(&doc)?;
    info!(path = %path.display(), variant = %game.variant(), "game loaded");
    Ok(game)
}

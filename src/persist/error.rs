//! Persistence error types.

use derive_more::{Display, Error, From};

/// Errors raised while saving or loading a game.
///
/// I/O and parse failures wrap their sources; schema failures carry a
/// message describing the offending field. None of these partially
/// mutate any live game.
#[derive(Debug, Display, Error, From)]
pub enum PersistError {
    /// Reading or writing the save file failed.
    #[display("i/o failure: {_0}")]
    Io(#[error(source)] std::io::Error),

    /// The file is not a well-formed save document.
    #[display("malformed save document: {_0}")]
    Parse(#[error(source)] serde_json::Error),

    /// The document parsed but its contents are invalid.
    #[display("invalid save data: {message}")]
    #[from(ignore)]
    Schema { message: String },
}

impl PersistError {
    /// Build a schema error.
    pub(crate) fn schema(message: impl Into<String>) -> Self {
        PersistError::Schema {
            message: message.into(),
        }
    }
}

//! Errors raised while handling a single command.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VocabError {
    /// Malformed user input; the message is shown to the user as-is
    #[error("{0}")]
    Parse(String),

    /// The vocabulary store could not complete the operation
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl VocabError {
    pub fn parse(msg: impl Into<String>) -> Self {
        VocabError::Parse(msg.into())
    }
}

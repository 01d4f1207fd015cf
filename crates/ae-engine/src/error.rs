//! Error types for the encounter engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while editing tables or resolving encounters.
///
/// A lookup that finds no document is not an error: it surfaces as
/// [`crate::resolver::ResolvedEncounter::is_miss`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// Validation or persistence failure from the data model.
    #[error(transparent)]
    Core(#[from] ae_core::AeError),

    /// The chat log refused a message.
    #[error("chat error: {0}")]
    Chat(String),

    /// A preview without a matched document cannot be posted.
    #[error("nothing to post: no journal entry found for R{row}C{col}")]
    NothingToPost {
        /// Final row of the roll.
        row: i64,
        /// Final column of the roll.
        col: i32,
    },
}

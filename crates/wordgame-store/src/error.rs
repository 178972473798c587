//! Error types for the game store.
//!
//! The store keeps its failures distinct so the request layer can map
//! each one to its own response code instead of a generic "internal".

use crate::GameId;

/// Errors returned by the two store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No live game has this id. Either it never existed, or it already
    /// finished (won or lost) and was removed. The caller must start a
    /// new game; retrying will never succeed.
    #[error("game {0} not found")]
    GameNotFound(GameId),

    /// A unique id could not be minted, either because the entropy source
    /// failed or because every attempt collided with a live game.
    /// Nothing was inserted.
    #[error("failed to generate game identifier: {0}")]
    IdentifierGeneration(String),
}

/// Errors raised while building a [`WordList`](crate::WordList).
///
/// These only occur at startup (configuration), never per request.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum WordListError {
    /// The list contained no words at all.
    #[error("word list is empty")]
    Empty,

    /// A word was empty (or only whitespace).
    #[error("word list contains an empty word")]
    EmptyWord,

    /// A word contained something other than ASCII letters.
    #[error("word {0:?} must contain only ASCII letters A-Z")]
    InvalidWord(String),
}

/// Returned when a guess is not exactly one uppercase ASCII letter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("guess must be a single ASCII character [A-Z], got {0:?}")]
pub struct InvalidLetter(pub String);

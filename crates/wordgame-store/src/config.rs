//! Store configuration.

use serde::{Deserialize, Serialize};

/// Number of incorrect guesses a fresh game allows.
pub const MAX_GUESSES: u32 = 6;

/// Character shown in place of a letter that hasn't been revealed yet.
pub const MASK: char = '_';

/// Tunables for a [`GameStore`](crate::GameStore).
///
/// The guess budget is deliberately not here: every game gets
/// [`MAX_GUESSES`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// How many ids `create_game` will draw before giving up when each
    /// one collides with a live game.
    pub max_id_attempts: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { max_id_attempts: 8 }
    }
}

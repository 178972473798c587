//! Game state and the snapshots handed back to callers.
//!
//! A [`Game`] is the mutable record the registry owns. Callers never see
//! it: every operation returns a [`GameView`], an owned copy of the
//! visible state with the secret word left out.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{MASK, MAX_GUESSES};
use crate::Letter;

// ---------------------------------------------------------------------------
// GameId
// ---------------------------------------------------------------------------

/// Opaque identifier for one game session.
///
/// Serialized as the bare string, so `GameId("9f..")` is `"9f.."` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Wraps a raw id string. No validation: an id that was never issued
    /// simply won't be found.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Where a game stands after a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_completed(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// One live game. Owned exclusively by the registry.
///
/// `revealed` always has exactly as many entries as `word` has letters;
/// each entry is either [`MASK`] or the letter at that position.
#[derive(Debug, Clone)]
pub(crate) struct Game {
    id: GameId,
    word: Vec<char>,
    revealed: Vec<char>,
    guesses_remaining: u32,
}

impl Game {
    /// Starts a fresh game: everything masked, full guess budget.
    ///
    /// `word` must already be uppercase ASCII; [`WordList`](crate::WordList)
    /// guarantees that.
    pub(crate) fn new(id: GameId, word: &str) -> Self {
        let word: Vec<char> = word.chars().collect();
        let revealed = vec![MASK; word.len()];
        Self {
            id,
            word,
            revealed,
            guesses_remaining: MAX_GUESSES,
        }
    }

    /// Reveals every occurrence of `letter` and charges a guess if there
    /// were none. Returns the outcome after the mutation.
    ///
    /// Repeats are not tracked: guessing a hit again is free, guessing a
    /// miss again costs another guess.
    pub(crate) fn apply(&mut self, letter: Letter) -> Outcome {
        let guess = letter.as_char();
        let mut found = false;

        for (slot, &c) in self.revealed.iter_mut().zip(&self.word) {
            if c == guess {
                *slot = guess;
                found = true;
            }
        }

        if !found {
            self.guesses_remaining = self.guesses_remaining.saturating_sub(1);
        }

        self.outcome()
    }

    /// Win is checked before loss, so a guess that both completes the word
    /// and empties the budget counts as a win.
    pub(crate) fn outcome(&self) -> Outcome {
        if self.revealed == self.word {
            Outcome::Won
        } else if self.guesses_remaining == 0 {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    pub(crate) fn view(&self) -> GameView {
        GameView {
            id: self.id.clone(),
            current: self.revealed.iter().collect(),
            guesses_remaining: self.guesses_remaining,
            completed: self.outcome().is_completed(),
        }
    }
}

// ---------------------------------------------------------------------------
// GameView
// ---------------------------------------------------------------------------

/// Immutable snapshot of a game, returned by every store operation.
///
/// When `completed` is `true` the game has already been removed from the
/// store; this snapshot is the last anyone will see of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub id: GameId,
    /// Revealed letters with [`MASK`] in every hidden position.
    pub current: String,
    pub guesses_remaining: u32,
    pub completed: bool,
}

impl GameView {
    /// Recovers the outcome from the visible state alone.
    pub fn outcome(&self) -> Outcome {
        if !self.completed {
            Outcome::InProgress
        } else if self.current.contains(MASK) {
            Outcome::Lost
        } else {
            Outcome::Won
        }
    }
}

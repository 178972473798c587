//! The game registry: every live game, keyed by id.
//!
//! # Concurrency note
//!
//! `GameRegistry` is NOT thread-safe by itself. It is a plain `HashMap`
//! with a `&mut self` API. [`GameStore`](crate::GameStore) wraps it in a
//! single mutex so that each operation's whole read-modify-write cycle
//! runs as one critical section. Nothing in here blocks, awaits or does
//! I/O (not even logging), which keeps that critical section short.

use std::collections::HashMap;

use crate::{
    Game, GameId, GameView, IdGenerator, Letter, RandomIds, StoreConfig,
    StoreError, WordList,
};

/// Owns all live games.
///
/// ## Lifecycle of one game
///
/// ```text
/// create() ──→ [Active] ──guess()──→ [Active]
///                  │
///                  ├──guess() reveals the word──────→ Won  ─┐
///                  └──guess() spends the last guess─→ Lost ─┴─→ removed
/// ```
///
/// There is no "finished" entry: a completed game is removed in the same
/// call that completes it, so afterwards it looks exactly like an id that
/// never existed.
pub struct GameRegistry<I = RandomIds> {
    games: HashMap<GameId, Game>,
    words: WordList,
    ids: I,
    config: StoreConfig,
}

impl GameRegistry<RandomIds> {
    /// Creates an empty registry drawing from `words`, with OS-random ids.
    pub fn new(words: WordList) -> Self {
        Self::with_id_generator(words, RandomIds, StoreConfig::default())
    }
}

impl<I: IdGenerator> GameRegistry<I> {
    pub fn with_id_generator(
        words: WordList,
        ids: I,
        config: StoreConfig,
    ) -> Self {
        Self {
            games: HashMap::new(),
            words,
            ids,
            config,
        }
    }

    /// Starts a new game with a random word and a fresh id.
    ///
    /// # Errors
    /// [`StoreError::IdentifierGeneration`] if the generator fails or every
    /// attempt collides. The registry is left unchanged.
    pub fn create(&mut self) -> Result<GameView, StoreError> {
        let id = self.fresh_id()?;
        let word = self.words.choose(&mut rand::rng());

        let game = Game::new(id.clone(), word);
        let view = game.view();
        self.games.insert(id, game);
        Ok(view)
    }

    /// Applies one guess and removes the game if that completed it.
    ///
    /// The returned view is the state right after the guess, so a
    /// completing guess still reports the final board with
    /// `completed == true`.
    ///
    /// # Errors
    /// [`StoreError::GameNotFound`] if no live game has this id. Nothing
    /// is mutated in that case.
    pub fn guess(
        &mut self,
        id: &GameId,
        letter: Letter,
    ) -> Result<GameView, StoreError> {
        let game = self
            .games
            .get_mut(id)
            .ok_or_else(|| StoreError::GameNotFound(id.clone()))?;

        let outcome = game.apply(letter);
        let view = game.view();

        if outcome.is_completed() {
            self.games.remove(id);
        }
        Ok(view)
    }

    /// Draws ids until one is not in use, up to `max_id_attempts` times.
    fn fresh_id(&mut self) -> Result<GameId, StoreError> {
        for _ in 0..self.config.max_id_attempts {
            let id = self.ids.generate()?;
            if !self.games.contains_key(&id) {
                return Ok(id);
            }
        }
        Err(StoreError::IdentifierGeneration(format!(
            "every id collided with a live game after {} attempts",
            self.config.max_id_attempts
        )))
    }

    /// Returns `true` if `id` names a live (not yet completed) game.
    pub fn contains(&self, id: &GameId) -> bool {
        self.games.contains_key(id)
    }

    /// Number of live games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

// =========================================================================
// Tests
// =========================================================================

//! `GameStore`: the thread-safe face of the registry.

use parking_lot::Mutex;

use crate::{
    GameId, GameRegistry, GameView, IdGenerator, Letter, Outcome, RandomIds,
    StoreConfig, StoreError, WordList,
};

/// Shared, thread-safe game store.
///
/// Every operation takes one lock over the entire registry and holds it
/// for the whole lookup/mutate/insert-or-remove cycle. That gives three
/// guarantees:
///
/// - two `create_game` calls never mint the same id;
/// - two `apply_guess` calls on the same id run one after the other, so no
///   guess is lost and a game finished by one call is already gone for the
///   next;
/// - nobody ever observes a half-inserted game.
///
/// The lock is never held across an `.await`, and logging happens after it
/// is released. Share one store between tasks with `Arc<GameStore>`.
pub struct GameStore<I = RandomIds> {
    registry: Mutex<GameRegistry<I>>,
}

impl GameStore<RandomIds> {
    pub fn new(words: WordList) -> Self {
        Self::with_config(words, StoreConfig::default())
    }

    pub fn with_config(words: WordList, config: StoreConfig) -> Self {
        Self::with_id_generator(words, RandomIds, config)
    }
}

impl<I: IdGenerator> GameStore<I> {
    /// Builds a store with a custom id source.
    pub fn with_id_generator(
        words: WordList,
        ids: I,
        config: StoreConfig,
    ) -> Self {
        Self {
            registry: Mutex::new(GameRegistry::with_id_generator(
                words, ids, config,
            )),
        }
    }

    /// Starts a new game and returns its initial view.
    ///
    /// # Errors
    /// [`StoreError::IdentifierGeneration`] if no unique id could be
    /// minted. No game is created in that case.
    pub fn create_game(&self) -> Result<GameView, StoreError> {
        let result = self.registry.lock().create();

        match &result {
            Ok(view) => tracing::info!(
                game_id = %view.id,
                word_len = view.current.len(),
                "game created"
            ),
            Err(e) => tracing::warn!(error = %e, "game creation failed"),
        }
        result
    }

    /// Applies `letter` to the game `id` and returns the resulting view.
    ///
    /// A completing guess (win or loss) removes the game before returning;
    /// the view still shows the final board with `completed == true`.
    ///
    /// # Errors
    /// [`StoreError::GameNotFound`] if `id` is not a live game.
    pub fn apply_guess(
        &self,
        id: &GameId,
        letter: Letter,
    ) -> Result<GameView, StoreError> {
        let view = self.registry.lock().guess(id, letter)?;

        match view.outcome() {
            Outcome::Won => tracing::info!(game_id = %id, "game won"),
            Outcome::Lost => tracing::info!(game_id = %id, "game lost"),
            Outcome::InProgress => tracing::debug!(
                game_id = %id,
                %letter,
                guesses_remaining = view.guesses_remaining,
                "guess applied"
            ),
        }
        Ok(view)
    }

    /// Returns `true` if `id` is a live game.
    pub fn contains(&self, id: &GameId) -> bool {
        self.registry.lock().contains(id)
    }

    /// Number of live games.
    pub fn len(&self) -> usize {
        self.registry.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.lock().is_empty()
    }
}

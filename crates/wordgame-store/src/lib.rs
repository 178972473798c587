//! In-memory game store for Wordgame.
//!
//! This crate is the core of the system: the registry of live games and
//! the rules that apply a guess to one of them.
//!
//! 1. **Words** ([`WordList`]): the validated pool secret words come from
//! 2. **Games** ([`GameRegistry`]): create, guess, remove on completion
//! 3. **Locking** ([`GameStore`]): one mutex making each operation atomic
//!
//! # How it fits in the stack
//!
//! ```text
//! Request Layer (wordgame)  ← validates input, maps errors to codes
//!     ↕
//! Game Store (this crate)  ← owns every game, enforces the state machine
//! ```
//!
//! # Example
//!
//! ```rust
//! use wordgame_store::{GameStore, Letter, WordList};
//!
//! let store = GameStore::new(WordList::new(["apple"]).unwrap());
//! let game = store.create_game().unwrap();
//! assert_eq!(game.current, "_____");
//!
//! let view = store.apply_guess(&game.id, Letter::new('P').unwrap()).unwrap();
//! assert_eq!(view.current, "_PP__");
//! assert_eq!(view.guesses_remaining, 6);
//! ```

mod config;
mod error;
mod game;
mod ids;
mod letter;
mod registry;
mod store;
mod words;

pub use config::{StoreConfig, MASK, MAX_GUESSES};
pub use error::{InvalidLetter, StoreError, WordListError};
pub(crate) use game::Game;
pub use game::{GameId, GameView, Outcome};
pub use ids::{IdGenerator, RandomIds};
pub use letter::Letter;
pub use registry::GameRegistry;
pub use store::GameStore;
pub use words::WordList;

//! # Wordgame
//!
//! A letter-guessing game server. Clients connect over WebSocket, start a
//! game, and guess one letter at a time until the word is revealed or the
//! guesses run out. Finished games are deleted on the spot.
//!
//! ```text
//! Transport (wordgame-transport)  ← WebSocket frames
//!     ↕
//! Protocol (wordgame-protocol)    ← JSON envelopes
//!     ↕
//! Request layer (this crate)      ← validation, error codes
//!     ↕
//! Game store (wordgame-store)     ← games and the guess rules
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wordgame::prelude::*;
//!
//! # async fn start() -> Result<(), WordgameError> {
//! let server = WordgameServer::builder()
//!     .bind("0.0.0.0:8080")
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod config;
mod error;
mod handler;
mod server;

pub use config::{ConfigError, ServerConfig};
pub use error::WordgameError;
pub use server::{WordgameServer, WordgameServerBuilder};

/// Everything needed to configure and run a server.
pub mod prelude {
    pub use crate::{
        ConfigError, ServerConfig, WordgameError, WordgameServer,
        WordgameServerBuilder,
    };
    pub use wordgame_protocol::{ClientMessage, Envelope, ServerMessage};
    pub use wordgame_store::{StoreConfig, WordList};
}

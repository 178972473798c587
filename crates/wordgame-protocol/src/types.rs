//! Wire types for Wordgame.
//!
//! Every frame is an [`Envelope`] around either a [`ClientMessage`]
//! (client → server) or a [`ServerMessage`] (server → client). Both
//! message enums are internally tagged, so a guess on the wire reads:
//!
//! ```json
//! { "seq": 7, "payload": { "type": "Guess", "id": "9f3c...", "guess": "p" } }
//! ```

use serde::{Deserialize, Serialize};
use wordgame_store::{GameId, GameView};

// ---------------------------------------------------------------------------
// Error codes
// ---------------------------------------------------------------------------

/// The request was malformed: bad JSON, missing id, invalid guess.
pub const BAD_REQUEST: u16 = 400;

/// The game id doesn't name a live game (never existed, or finished).
pub const NOT_FOUND: u16 = 404;

/// The server failed to carry out a well-formed request.
pub const INTERNAL: u16 = 500;

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// The top-level frame.
///
/// The client picks `seq` for each request; the server copies it into the
/// response so the client can match replies to requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<P> {
    #[serde(default)]
    pub seq: u64,
    pub payload: P,
}

impl<P> Envelope<P> {
    pub fn new(seq: u64, payload: P) -> Self {
        Self { seq, payload }
    }
}

// ---------------------------------------------------------------------------
// ClientMessage
// ---------------------------------------------------------------------------

/// Client → Server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// "Start a new game for me."
    NewGame,

    /// "I guess this letter in this game."
    ///
    /// Both fields are raw client input. The server trims them and
    /// uppercases `guess` before validating. A missing field decodes as
    /// an empty string and is rejected by validation, not by the decoder.
    Guess {
        #[serde(default)]
        id: String,
        #[serde(default)]
        guess: String,
    },

    /// "I'm still here." Keeps an idle connection open.
    Heartbeat { client_time: u64 },

    /// "I'm leaving." The server closes the connection.
    Disconnect {
        #[serde(default)]
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// ServerMessage
// ---------------------------------------------------------------------------

/// Server → Client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// The state of a game after a `NewGame` or `Guess`.
    ///
    /// When `completed` is `true` the game is over and already deleted;
    /// further guesses with this id get a 404.
    Game {
        id: GameId,
        current: String,
        guesses_remaining: u32,
        completed: bool,
    },

    /// Reply to `Heartbeat`. `server_time` is milliseconds since the
    /// connection was accepted.
    HeartbeatAck { client_time: u64, server_time: u64 },

    /// The request failed. `code` follows HTTP conventions
    /// ([`BAD_REQUEST`], [`NOT_FOUND`], [`INTERNAL`]).
    Error { code: u16, message: String },
}

impl ServerMessage {
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self::Error {
            code,
            message: message.into(),
        }
    }
}

impl From<GameView> for ServerMessage {
    fn from(view: GameView) -> Self {
        Self::Game {
            id: view.id,
            current: view.current,
            guesses_remaining: view.guesses_remaining,
            completed: view.completed,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

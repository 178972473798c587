//! Wire protocol for Wordgame.
//!
//! - **Types** ([`Envelope`], [`ClientMessage`], [`ServerMessage`]):
//!   the frames exchanged with clients.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how frames become bytes.
//! - **Errors** ([`ProtocolError`]): what can go wrong doing that.
//!
//! ```text
//! Transport (bytes) → Protocol (Envelope) → Request Layer → Game Store
//! ```

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{
    BAD_REQUEST, ClientMessage, Envelope, INTERNAL, NOT_FOUND, ServerMessage,
};

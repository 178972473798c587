//! Unified error type for the Wordgame server.

use wordgame_protocol::ProtocolError;
use wordgame_store::{StoreError, WordListError};
use wordgame_transport::TransportError;

use crate::ConfigError;

/// Top-level error that wraps every crate-specific error.
///
/// Per-request failures never surface here: the handler turns them into
/// `Error` frames for the client. What does end up in a `WordgameError` is
/// either a startup problem (bad config, bad word file, bind failure) or a
/// connection that broke mid-conversation.
#[derive(Debug, thiserror::Error)]
pub enum WordgameError {
    /// A transport-level error (bind, accept, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The configured word list was unusable.
    #[error(transparent)]
    WordList(#[from] WordListError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use wordgame_store::GameId;

    use super::*;

    #[test]
    fn test_from_transport_error() {
        let wordgame_err: WordgameError = TransportError::Shutdown.into();
        assert!(matches!(
            wordgame_err,
            WordgameError::Transport(TransportError::Shutdown)
        ));
        assert_eq!(wordgame_err.to_string(), "transport shut down");
    }

    #[test]
    fn test_from_protocol_error() {
        let json_err =
            serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let wordgame_err: WordgameError = ProtocolError::Decode(json_err).into();
        assert!(matches!(wordgame_err, WordgameError::Protocol(_)));
    }

    #[test]
    fn test_from_store_error_is_transparent() {
        let err = StoreError::GameNotFound(GameId::new("abc"));
        let wordgame_err: WordgameError = err.into();
        assert!(matches!(wordgame_err, WordgameError::Store(_)));
        assert_eq!(wordgame_err.to_string(), "game abc not found");
    }

    #[test]
    fn test_from_word_list_error() {
        let wordgame_err: WordgameError = WordListError::Empty.into();
        assert!(matches!(
            wordgame_err,
            WordgameError::WordList(WordListError::Empty)
        ));
    }

    #[test]
    fn test_from_config_error() {
        let err = ConfigError::Invalid("idle timeout must be non-zero".into());
        let wordgame_err: WordgameError = err.into();
        assert!(matches!(wordgame_err, WordgameError::Config(_)));
    }
}

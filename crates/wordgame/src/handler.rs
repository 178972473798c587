//! Per-connection handler: request validation and dispatch to the store.
//!
//! Each accepted connection gets its own Tokio task running this handler.
//! The loop is:
//!   1. Receive a frame, or close the connection if it stays idle too long
//!   2. Decode it as an `Envelope<ClientMessage>`
//!   3. Validate and run the request against the store
//!   4. Reply with the same `seq`
//!
//! Every request gets exactly one reply. Invalid input and store failures
//! become `ServerMessage::Error` frames; only a broken connection ends the
//! loop with an error.

use std::sync::Arc;
use std::time::Instant;

use wordgame_protocol::{
    BAD_REQUEST, ClientMessage, Codec, Envelope, INTERNAL, NOT_FOUND,
    ServerMessage,
};
use wordgame_store::{GameId, GameStore, IdGenerator, Letter, StoreError};
use wordgame_transport::{Connection, WebSocketConnection};

use crate::WordgameError;
use crate::server::ServerState;

const INVALID_JSON: &str = "invalid json";
const ID_REQUIRED: &str = "id is required";
const INVALID_GUESS: &str = "guess must be a single ASCII character [A-Z]";
const GAME_NOT_FOUND: &str = "game not found";
const CREATE_FAILED: &str = "failed to create game";
const GUESS_FAILED: &str = "failed to apply guess";

/// Handles a single connection from accept to close.
pub(crate) async fn handle_connection<C: Codec>(
    conn: WebSocketConnection,
    state: Arc<ServerState<C>>,
) -> Result<(), WordgameError> {
    let conn_id = conn.id();
    let peer = conn.peer_addr();
    tracing::debug!(%conn_id, %peer, "handling new connection");

    let start = Instant::now();

    loop {
        let data = match tokio::time::timeout(state.idle_timeout, conn.recv())
            .await
        {
            Ok(Ok(Some(data))) => data,
            Ok(Ok(None)) => {
                tracing::debug!(%conn_id, "connection closed cleanly");
                return Ok(());
            }
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => {
                tracing::info!(%conn_id, "connection idle, closing");
                break;
            }
        };

        let envelope: Envelope<ClientMessage> = match state.codec.decode(&data)
        {
            Ok(env) => env,
            Err(e) => {
                tracing::debug!(%conn_id, error = %e, "undecodable request");
                let reply = ServerMessage::error(BAD_REQUEST, INVALID_JSON);
                send_reply(&conn, &state.codec, 0, reply).await?;
                continue;
            }
        };

        let reply = match envelope.payload {
            ClientMessage::NewGame => new_game(&state.store),
            ClientMessage::Guess { id, guess } => {
                apply_guess(&state.store, &id, &guess)
            }
            ClientMessage::Heartbeat { client_time } => {
                ServerMessage::HeartbeatAck {
                    client_time,
                    server_time: elapsed_millis(start),
                }
            }
            ClientMessage::Disconnect { reason } => {
                tracing::info!(%conn_id, %reason, "client disconnected");
                break;
            }
        };

        send_reply(&conn, &state.codec, envelope.seq, reply).await?;
    }

    if let Err(e) = conn.close().await {
        tracing::debug!(%conn_id, error = %e, "close failed");
    }
    Ok(())
}

/// Starts a game and renders the reply.
fn new_game<I: IdGenerator>(store: &GameStore<I>) -> ServerMessage {
    match store.create_game() {
        Ok(view) => view.into(),
        Err(e) => {
            tracing::error!(error = %e, "create game failed");
            ServerMessage::error(INTERNAL, CREATE_FAILED)
        }
    }
}

/// Validates a raw guess request, applies it, and renders the reply.
fn apply_guess<I: IdGenerator>(
    store: &GameStore<I>,
    raw_id: &str,
    raw_guess: &str,
) -> ServerMessage {
    let (id, letter) = match parse_guess(raw_id, raw_guess) {
        Ok(parsed) => parsed,
        Err(reply) => return reply,
    };

    match store.apply_guess(&id, letter) {
        Ok(view) => view.into(),
        Err(StoreError::GameNotFound(_)) => {
            ServerMessage::error(NOT_FOUND, GAME_NOT_FOUND)
        }
        Err(e) => {
            tracing::error!(game_id = %id, error = %e, "apply guess failed");
            ServerMessage::error(INTERNAL, GUESS_FAILED)
        }
    }
}

/// Trims the id, then trims and uppercases the guess, and checks both.
///
/// The `Err` side is the ready-made 400 reply.
fn parse_guess(
    raw_id: &str,
    raw_guess: &str,
) -> Result<(GameId, Letter), ServerMessage> {
    let id = raw_id.trim();
    if id.is_empty() {
        return Err(ServerMessage::error(BAD_REQUEST, ID_REQUIRED));
    }

    let letter = raw_guess
        .trim()
        .to_uppercase()
        .parse::<Letter>()
        .map_err(|_| ServerMessage::error(BAD_REQUEST, INVALID_GUESS))?;

    Ok((GameId::new(id), letter))
}

async fn send_reply(
    conn: &WebSocketConnection,
    codec: &impl Codec,
    seq: u64,
    payload: ServerMessage,
) -> Result<(), WordgameError> {
    let bytes = codec.encode(&Envelope::new(seq, payload))?;
    conn.send(&bytes).await?;
    Ok(())
}

fn elapsed_millis(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use wordgame_store::{StoreConfig, WordList};

    use super::*;

    // -- Helpers --

    fn store(word: &str) -> GameStore {
        GameStore::new(WordList::new([word]).unwrap())
    }

    fn error_of(msg: &ServerMessage) -> (u16, &str) {
        match msg {
            ServerMessage::Error { code, message } => (*code, message.as_str()),
            other => panic!("expected Error, got {other:?}"),
        }
    }

    fn game_of(msg: ServerMessage) -> (GameId, String, u32, bool) {
        match msg {
            ServerMessage::Game {
                id,
                current,
                guesses_remaining,
                completed,
            } => (id, current, guesses_remaining, completed),
            other => panic!("expected Game, got {other:?}"),
        }
    }

    // =====================================================================
    // parse_guess
    // =====================================================================

    #[test]
    fn test_parse_guess_trims_and_uppercases() {
        let (id, letter) = parse_guess("  abc \n", " p ").unwrap();
        assert_eq!(id.as_str(), "abc");
        assert_eq!(letter.as_char(), 'P');
    }

    #[test]
    fn test_parse_guess_blank_id_is_bad_request() {
        for raw_id in ["", "   ", "\t\n"] {
            let reply = parse_guess(raw_id, "P").unwrap_err();
            assert_eq!(error_of(&reply), (BAD_REQUEST, ID_REQUIRED));
        }
    }

    #[test]
    fn test_parse_guess_id_checked_before_guess() {
        let reply = parse_guess("", "not a letter").unwrap_err();
        assert_eq!(error_of(&reply), (BAD_REQUEST, ID_REQUIRED));
    }

    #[test]
    fn test_parse_guess_invalid_guess_is_bad_request() {
        for raw_guess in ["", "  ", "AB", "1", "?", "é", "ab"] {
            let reply = parse_guess("abc", raw_guess).unwrap_err();
            assert_eq!(
                error_of(&reply),
                (BAD_REQUEST, INVALID_GUESS),
                "guess {raw_guess:?}"
            );
        }
    }

    // =====================================================================
    // new_game / apply_guess
    // =====================================================================

    #[test]
    fn test_new_game_returns_masked_board() {
        let store = store("APPLE");

        let (id, current, remaining, completed) = game_of(new_game(&store));

        assert_eq!(current, "_____");
        assert_eq!(remaining, 6);
        assert!(!completed);
        assert!(store.contains(&id));
    }

    #[test]
    fn test_new_game_id_failure_is_internal() {
        let store = GameStore::with_id_generator(
            WordList::new(["APPLE"]).unwrap(),
            || Err::<GameId, _>(StoreError::IdentifierGeneration("no entropy".into())),
            StoreConfig::default(),
        );

        let reply = new_game(&store);

        assert_eq!(error_of(&reply), (INTERNAL, CREATE_FAILED));
        assert!(store.is_empty());
    }

    #[test]
    fn test_apply_guess_lowercase_hit() {
        let store = store("APPLE");
        let (id, ..) = game_of(new_game(&store));

        let (_, current, remaining, completed) =
            game_of(apply_guess(&store, id.as_str(), "p"));

        assert_eq!(current, "_PP__");
        assert_eq!(remaining, 6);
        assert!(!completed);
    }

    #[test]
    fn test_apply_guess_unknown_id_is_not_found() {
        let store = store("APPLE");

        let reply = apply_guess(&store, "no-such-game", "A");

        assert_eq!(error_of(&reply), (NOT_FOUND, GAME_NOT_FOUND));
    }

    #[test]
    fn test_apply_guess_invalid_letter_leaves_game_untouched() {
        let store = store("APPLE");
        let (id, ..) = game_of(new_game(&store));

        let reply = apply_guess(&store, id.as_str(), "42");
        assert_eq!(error_of(&reply), (BAD_REQUEST, INVALID_GUESS));

        let (_, current, remaining, _) =
            game_of(apply_guess(&store, id.as_str(), "Z"));
        assert_eq!(current, "_____");
        assert_eq!(remaining, 5);
    }

    #[test]
    fn test_apply_guess_after_win_is_not_found() {
        let store = store("AA");
        let (id, ..) = game_of(new_game(&store));

        let (_, current, _, completed) =
            game_of(apply_guess(&store, id.as_str(), "a"));
        assert_eq!(current, "AA");
        assert!(completed);

        let reply = apply_guess(&store, id.as_str(), "a");
        assert_eq!(error_of(&reply), (NOT_FOUND, GAME_NOT_FOUND));
    }

    #[test]
    fn test_elapsed_millis_is_small_for_fresh_instant() {
        assert!(elapsed_millis(Instant::now()) < 1_000);
    }
}

//! `WordgameServer` builder and server loop.
//!
//! This ties the layers together: transport → protocol → game store. The
//! server owns one [`GameStore`] and hands every connection task a shared
//! reference to it.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use wordgame_protocol::{Codec, JsonCodec};
use wordgame_store::{GameStore, WordList};
use wordgame_transport::{
    Connection, Transport, TransportError, WebSocketTransport,
};

use crate::handler::handle_connection;
use crate::{ConfigError, ServerConfig, WordgameError};

/// Shared server state passed to each connection handler task.
pub(crate) struct ServerState<C: Codec> {
    pub(crate) store: GameStore,
    pub(crate) codec: C,
    pub(crate) idle_timeout: Duration,
}

/// Builder for configuring and starting a Wordgame server.
///
/// # Example
///
/// ```rust,no_run
/// use wordgame::prelude::*;
///
/// # async fn start() -> Result<(), WordgameError> {
/// let server = WordgameServer::builder()
///     .bind("0.0.0.0:8080")
///     .words(WordList::new(["apple", "banana"])?)
///     .build()
///     .await?;
/// server.run().await
/// # }
/// ```
pub struct WordgameServerBuilder {
    config: ServerConfig,
    words: Option<WordList>,
    idle_timeout: Option<Duration>,
}

impl WordgameServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            words: None,
            idle_timeout: None,
        }
    }

    /// Replaces the whole configuration. Call this before the other
    /// setters, or it overwrites what they set.
    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.config.bind_addr = addr.to_string();
        self
    }

    /// Uses this word list instead of the configured word file.
    pub fn words(mut self, words: WordList) -> Self {
        self.words = Some(words);
        self
    }

    /// Overrides `idle_timeout_secs` with a finer-grained duration.
    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = Some(timeout);
        self
    }

    /// Loads the word list, binds the listener, and creates the store.
    ///
    /// Uses `JsonCodec` and `WebSocketTransport`.
    pub async fn build(self) -> Result<WordgameServer<JsonCodec>, WordgameError> {
        self.config.validate()?;

        let idle_timeout = self.idle_timeout.unwrap_or(self.config.idle_timeout());
        if idle_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "idle timeout must be greater than zero".into(),
            )
            .into());
        }

        let words = match self.words {
            Some(words) => words,
            None => self.config.load_words()?,
        };
        tracing::info!(words = words.words().len(), "word list loaded");

        let transport = WebSocketTransport::bind(&self.config.bind_addr).await?;

        let state = Arc::new(ServerState {
            store: GameStore::with_config(words, self.config.store),
            codec: JsonCodec,
            idle_timeout,
        });

        Ok(WordgameServer { transport, state })
    }
}

impl Default for WordgameServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound Wordgame server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct WordgameServer<C: Codec = JsonCodec> {
    transport: WebSocketTransport,
    state: Arc<ServerState<C>>,
}

impl WordgameServer<JsonCodec> {
    pub fn builder() -> WordgameServerBuilder {
        WordgameServerBuilder::new()
    }
}

impl<C: Codec> WordgameServer<C> {
    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.transport.local_addr()
    }

    /// Runs the accept loop until the process ends.
    pub async fn run(self) -> Result<(), WordgameError> {
        self.run_until(std::future::pending()).await
    }

    /// Runs the accept loop until `signal` completes.
    ///
    /// Spawns one handler task per accepted connection. A failed accept
    /// (usually a botched WebSocket upgrade) is logged and skipped. When
    /// `signal` fires the transport is shut down and this returns `Ok`;
    /// connections already being served keep running in their own tasks.
    pub async fn run_until<F>(mut self, signal: F) -> Result<(), WordgameError>
    where
        F: Future<Output = ()>,
    {
        tracing::info!("Wordgame server running");

        let mut signal = std::pin::pin!(signal);
        let mut stopping = false;

        loop {
            let accepted = tokio::select! {
                result = self.transport.accept() => Some(result),
                () = &mut signal, if !stopping => None,
            };

            let Some(result) = accepted else {
                stopping = true;
                self.transport.shutdown().await?;
                continue;
            };

            match result {
                Ok(conn) => {
                    let state = Arc::clone(&self.state);
                    tokio::spawn(async move {
                        let conn_id = conn.id();
                        if let Err(e) = handle_connection(conn, state).await {
                            tracing::debug!(
                                %conn_id,
                                error = %e,
                                "connection ended with error"
                            );
                        }
                    });
                }
                Err(TransportError::Shutdown) => {
                    tracing::info!("Wordgame server stopped");
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "accept failed");
                }
            }
        }
    }
}

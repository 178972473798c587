//! Server configuration, loadable from TOML.
//!
//! ```toml
//! bind_addr = "0.0.0.0:8080"
//! idle_timeout_secs = 60
//! words_file = "/etc/wordgame/words.txt"
//!
//! [store]
//! max_id_attempts = 8
//! ```
//!
//! Every key is optional; missing keys take their [`Default`] values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use wordgame_store::{StoreConfig, WordList};

use crate::WordgameError;

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A config or word file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values parsed, but don't make sense together.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything a [`WordgameServer`](crate::WordgameServer) needs to start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the WebSocket listener binds to.
    pub bind_addr: String,

    /// A connection that sends nothing for this long is closed.
    pub idle_timeout_secs: u64,

    /// Newline-separated word file. `None` uses the built-in list.
    pub words_file: Option<PathBuf>,

    pub store: StoreConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            idle_timeout_secs: 60,
            words_file: None,
            store: StoreConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Reads and parses a TOML config file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = read_file(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would leave the server unable to work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.idle_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "idle_timeout_secs must be greater than zero".into(),
            ));
        }
        if self.store.max_id_attempts == 0 {
            return Err(ConfigError::Invalid(
                "store.max_id_attempts must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Loads the configured word file, or the built-in list if none is set.
    pub fn load_words(&self) -> Result<WordList, WordgameError> {
        match &self.words_file {
            Some(path) => {
                let text = read_file(path)?;
                Ok(WordList::parse(&text)?)
            }
            None => Ok(WordList::builtin()),
        }
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

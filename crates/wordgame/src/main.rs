use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordgame::prelude::*;

#[derive(Debug, Parser)]
#[command(
    name = "wordgame-server",
    version,
    about = "Letter-guessing game server over WebSocket"
)]
struct Cli {
    /// TOML config file. Flags below override its values.
    #[arg(long, env = "WORDGAME_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:8080.
    #[arg(long, env = "WORDGAME_BIND")]
    bind: Option<String>,

    /// Word file, one word per line. Defaults to the built-in list.
    #[arg(long, env = "WORDGAME_WORDS")]
    words: Option<PathBuf>,

    /// Seconds a connection may stay silent before it is closed.
    #[arg(long, env = "WORDGAME_IDLE_TIMEOUT")]
    idle_timeout: Option<u64>,
}

impl Cli {
    fn into_config(self) -> Result<ServerConfig, WordgameError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_toml_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(words) = self.words {
            config.words_file = Some(words);
        }
        if let Some(secs) = self.idle_timeout {
            config.idle_timeout_secs = secs;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), WordgameError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Cli::parse().into_config()?;
    let server = WordgameServer::builder().config(config).build().await?;

    match server.local_addr() {
        Ok(addr) => tracing::info!(%addr, "listening"),
        Err(e) => tracing::warn!(error = %e, "could not read local address"),
    }

    server
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "could not listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("shutting down");
        })
        .await
}

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use wordbook_config::log::LogConfig;
use wordbook_config::{Config, LogFormat};

pub mod error;
pub mod routes;
pub mod state;


use self::state::AppState;

/// Dictionary lookup service
#[derive(Parser, Debug)]
#[command(name = "wordbook", version)]
struct Cli {
    /// Interface to bind, overrides HOST
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides PORT
    #[arg(long)]
    port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.json_logs {
            config.log.format = LogFormat::Json;
        }
    }
}

fn init_tracing(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = Config::new();
    Cli::parse().apply(&mut config);

    init_tracing(&config.log);

    let state = AppState::from_config(&config)?;
    let app = routes::create_router(state);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {addr}");

    // Shutdown on Ctrl+C
    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("Shutdown requested");
                    cancel.cancel();
                }
                Err(e) => tracing::error!("Failed to listen for ctrl+c: {e}"),
            }
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

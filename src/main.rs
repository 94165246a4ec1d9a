//! Lithium server binary

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lithium::config::{AppConfig, LogFormat};
use lithium::server::{shutdown_signal, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let server = Server::bind(&config.server)
        .await
        .context("failed to start server")?;
    let shutdown = shutdown_signal();
    let addr = server.local_addr()?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    server.run(shutdown).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("lithium=info,tower_http=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
                .context("failed to install tracing subscriber")?;
        }
        LogFormat::Text => {
            registry
                .with(tracing_subscriber::fmt::layer())
                .try_init()
                .context("failed to install tracing subscriber")?;
        }
    }

    Ok(())
}

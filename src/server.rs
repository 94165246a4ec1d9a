//! Listener lifecycle for the HTTP API

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::api::create_router;
use crate::config::ServerConfig;
use crate::error::{Error, Result};

/// A bound listener paired with the router it will serve.
pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    /// Bind the configured address. Fails fast if the port is taken.
    pub async fn bind(config: &ServerConfig) -> Result<Self> {
        let addr = config.bind_address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| Error::bind(addr, source))?;

        Ok(Self {
            listener,
            router: create_router(),
        })
    }

    /// Address the listener actually holds; differs from the configured one
    /// when port 0 was requested.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve requests until `shutdown` resolves, then drain open connections.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self
            .router
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(Error::Serve)?;

        tracing::info!("server stopped");
        Ok(())
    }
}

/// Resolves on SIGINT or SIGTERM.
///
/// Handlers are installed when this is called, not when the future is first
/// polled, so a signal arriving before `run` starts is not lost. Must be
/// called from inside a tokio runtime.
#[cfg(unix)]
pub fn shutdown_signal() -> impl Future<Output = ()> + Send + 'static {
    use tokio::signal::unix::{signal, SignalKind};

    let sigint = signal(SignalKind::interrupt());
    let sigterm = signal(SignalKind::terminate());

    async move {
        tokio::select! {
            _ = wait_for(sigint, "SIGINT") => {},
            _ = wait_for(sigterm, "SIGTERM") => {},
        }

        tracing::info!("signal received, shutting down gracefully");
    }
}

#[cfg(unix)]
async fn wait_for(stream: std::io::Result<tokio::signal::unix::Signal>, name: &'static str) {
    match stream {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(err) => {
            tracing::error!(error = %err, signal = name, "failed to install signal handler");
            std::future::pending::<()>().await;
        }
    }
}

/// Resolves on Ctrl-C.
#[cfg(not(unix))]
pub fn shutdown_signal() -> impl Future<Output = ()> + Send + 'static {
    async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }

        tracing::info!("signal received, shutting down gracefully");
    }
}

//! Error types for lithium

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration")]
    Config(#[from] config::ConfigError),

    #[error("failed to bind to {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server terminated unexpectedly")]
    Serve(#[source] std::io::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn bind(addr: impl Into<String>, source: std::io::Error) -> Self {
        Error::Bind {
            addr: addr.into(),
            source,
        }
    }

    /// Whether the listening address was already taken by another process.
    pub fn is_addr_in_use(&self) -> bool {
        matches!(
            self,
            Error::Bind { source, .. } if source.kind() == std::io::ErrorKind::AddrInUse
        )
    }
}

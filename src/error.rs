use thiserror::Error;

/// Errors raised while bootstrapping or running the server
#[derive(Debug, Error)]
pub enum DexgraphError {
    /// Error binding or serving the listener
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error constructing the upstream HTTP client
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, DexgraphError>;

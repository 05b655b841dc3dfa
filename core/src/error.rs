use thiserror::Error;

/// Failures raised while resolving catalog queries against the upstream API
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Upstream answered a single-record lookup with a non-success status
    #[error("Pokemon not found")]
    PokemonNotFound,
    /// Upstream answered a type lookup with a non-success status
    #[error("Type not found")]
    TypeNotFound,
    /// The GET never produced a response
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    /// The response body did not decode into the expected shape
    #[error("malformed response from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Wraps a transport failure for `url`
    pub fn transport(url: impl Into<String>, message: impl ToString) -> Self {
        CatalogError::Transport { url: url.into(), message: message.to_string() }
    }

    /// Whether the error reports upstream absence rather than a broken exchange
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::PokemonNotFound | CatalogError::TypeNotFound)
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

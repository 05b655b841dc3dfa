use async_trait::async_trait;

use crate::error::Result;

/// Raw answer to an upstream GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self { status, body: body.into() }
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport used by the catalog to reach the upstream API
///
/// Implementations only report network-level failures as errors. Any
/// response that arrives, whatever its status, is returned as-is.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issues a plain GET against `url`
    async fn get(&self, url: &str) -> Result<UpstreamResponse>;
}

//! HTTP transport to the upstream PokeAPI catalog

use async_trait::async_trait;
use dexgraph_core::{CatalogError, Fetcher, Result, UpstreamResponse};
use reqwest::Client;
use tracing::debug;

/// User agent sent with every upstream request
pub const USER_AGENT: &str = concat!("dexgraph/", env!("CARGO_PKG_VERSION"));

/// [`Fetcher`] backed by a pooled reqwest client
///
/// No timeout or retry policy is layered on top of the client defaults.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher with its own connection pool
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Wraps an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<UpstreamResponse> {
        debug!(%url, "upstream GET");
        let response =
            self.client.get(url).send().await.map_err(|e| CatalogError::transport(url, e))?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| CatalogError::transport(url, e))?;
        debug!(%url, status, bytes = body.len(), "upstream response");

        Ok(UpstreamResponse::new(status, body.to_vec()))
    }
}

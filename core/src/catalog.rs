//! Aggregating resolvers over the upstream catalog
//!
//! Every operation is a single request/response cycle: one keyed or listing
//! GET, then for list-shaped queries one GET per referenced record. The
//! referenced records are fetched concurrently and reassembled in reference
//! order. The first failing sub-fetch fails the operation; no partial lists
//! are ever returned.

use std::fmt;
use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, instrument, warn};

use crate::error::{CatalogError, Result};
use crate::fetch::Fetcher;
use crate::model::Pokemon;
use crate::payload::{decode, ListingPayload, PokemonPayload, TypePayload};

/// Public PokeAPI v2 endpoint
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
/// Page size used when `listPokemon` is called without a limit
pub const DEFAULT_LIMIT: i32 = 10;
/// Offset used when `listPokemon` is called without an offset
pub const DEFAULT_OFFSET: i32 = 0;

/// Resolver set bound to one upstream base URL
#[derive(Clone)]
pub struct Catalog {
    fetcher: Arc<dyn Fetcher>,
    base_url: String,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl Catalog {
    /// Creates a catalog issuing requests through `fetcher` against `base_url`
    pub fn new(fetcher: Arc<dyn Fetcher>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { fetcher, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one record by name or numeric id
    ///
    /// Any non-2xx status is reported as [`CatalogError::PokemonNotFound`],
    /// whatever the upstream actually meant by it.
    #[instrument(skip(self))]
    pub async fn get_pokemon(&self, name_or_id: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name_or_id);
        let response = self.fetcher.get(&url).await?;
        if !response.is_success() {
            warn!(status = response.status, %url, "pokemon lookup rejected upstream");
            return Err(CatalogError::PokemonNotFound);
        }

        let payload: PokemonPayload = decode(&url, &response.body)?;
        Ok(payload.into())
    }

    /// Fetches one page of the listing and resolves every entry on it
    ///
    /// `limit` and `offset` reach the upstream unchanged.
    #[instrument(skip(self))]
    pub async fn list_pokemon(&self, limit: i32, offset: i32) -> Result<Vec<Pokemon>> {
        let url = format!("{}/pokemon?limit={}&offset={}", self.base_url, limit, offset);
        let response = self.fetcher.get(&url).await?;
        let listing: ListingPayload = decode(&url, &response.body)?;

        self.resolve_all(listing.into_urls()).await
    }

    /// Fetches every record belonging to a type
    ///
    /// Any non-2xx status on the type lookup is reported as
    /// [`CatalogError::TypeNotFound`].
    #[instrument(skip(self))]
    pub async fn pokemon_by_type(&self, kind: &str) -> Result<Vec<Pokemon>> {
        let url = format!("{}/type/{}", self.base_url, kind);
        let response = self.fetcher.get(&url).await?;
        if !response.is_success() {
            warn!(status = response.status, %url, "type lookup rejected upstream");
            return Err(CatalogError::TypeNotFound);
        }

        let members: TypePayload = decode(&url, &response.body)?;
        self.resolve_all(members.into_urls()).await
    }

    // Output index i always holds the record behind urls[i].
    async fn resolve_all(&self, urls: Vec<String>) -> Result<Vec<Pokemon>> {
        debug!(count = urls.len(), "resolving referenced records");
        try_join_all(urls.iter().map(|url| self.resolve(url))).await
    }

    // Referenced URLs are trusted as-is: no status check, only the decode
    // decides whether the body is a record.
    async fn resolve(&self, url: &str) -> Result<Pokemon> {
        let response = self.fetcher.get(url).await?;
        let payload: PokemonPayload = decode(url, &response.body)?;
        Ok(payload.into())
    }
}

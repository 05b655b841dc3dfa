//! Core catalog model and resolvers for dexgraph

pub mod catalog;
pub mod error;
pub mod fetch;
pub mod model;
pub mod payload;

pub use catalog::{Catalog, DEFAULT_BASE_URL, DEFAULT_LIMIT, DEFAULT_OFFSET};
pub use error::{CatalogError, Result};
pub use fetch::{Fetcher, UpstreamResponse};
pub use model::{Ability, Pokemon};

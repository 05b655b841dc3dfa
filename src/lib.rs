pub mod config;
pub mod error;
pub mod server;

pub use config::ServerConfig;
pub use error::{DexgraphError, Result};
pub use server::Server;

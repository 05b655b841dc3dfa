use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use dexgraph_core::DEFAULT_BASE_URL;

/// Port used when neither `--port` nor `PORT` is given
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration, read from flags or the environment
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Base URL of the upstream PokeAPI
    #[arg(long, env = "POKEAPI_URL", default_value = DEFAULT_BASE_URL)]
    pub upstream_url: String,
}

impl ServerConfig {
    /// Socket address the listener binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            upstream_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

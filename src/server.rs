//! Server lifecycle: build the schema, bind, serve, shut down

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use dexgraph_api::{create_router, create_schema, GRAPHQL_PATH};
use dexgraph_core::Catalog;
use dexgraph_upstream::HttpFetcher;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::error::Result;

/// A bound, not yet serving, GraphQL server
pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    /// Builds the resolver set and schema, then binds the listener
    pub async fn bind(config: &ServerConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new()?;
        let catalog = Catalog::new(Arc::new(fetcher), config.upstream_url.clone());
        info!(upstream = catalog.base_url(), "Catalog ready");

        let router = create_router(create_schema(catalog));
        let listener = TcpListener::bind(config.socket_addr()).await?;

        Ok(Self { listener, router })
    }

    /// Address the listener is bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves until Ctrl-C or SIGTERM
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Serves until `signal` completes, then drains in-flight requests
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        info!("🚀 Server ready at http://{}{}", addr, GRAPHQL_PATH);

        axum::serve(self.listener, self.router).with_graceful_shutdown(signal).await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

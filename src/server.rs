use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{any, get};
use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::handlers;

/// Path answering addition calls.
pub const RPC_PATH: &str = "/rpc";

/// Path answering liveness checks.
pub const HEALTH_PATH: &str = "/health";

/// HTTP server for the addition endpoint.
///
/// The listener is owned by [`RpcServer::serve`] for its whole lifetime and
/// dropped when the shutdown future resolves and in-flight requests finish.
pub struct RpcServer {
    config: Arc<ServerConfig>,
}

impl RpcServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Route table: any method on `/rpc`, `GET /health`, 404 elsewhere.
    pub fn router(&self) -> Router {
        Router::new()
            .route(RPC_PATH, any(handlers::rpc::handle))
            .route(HEALTH_PATH, get(handlers::health::handle))
            .with_state(Arc::clone(&self.config))
    }

    /// Bind the configured address, announce it on stdout and serve until
    /// SIGINT or SIGTERM.
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.bind_addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        println!("{}", announcement(addr));

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        tracing::info!(
            %local_addr,
            max_body_bytes = self.config.max_body_bytes,
            request_timeout = ?self.config.request_timeout,
            "serving"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!(%local_addr, "listener released");
        Ok(())
    }
}

/// Line printed on stdout once the listener is bound.
pub fn announcement(addr: SocketAddr) -> String {
    format!("rpc-sum-server listening on http://{addr}{RPC_PATH}")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("cannot install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("cannot install SIGTERM handler: {e}");
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

    tracing::info!("shutdown signal received");
}

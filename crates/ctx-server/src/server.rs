//! Server lifecycle: bind, serve, stop.

use std::net::SocketAddr;

use axum::Router;
use tokio::sync::mpsc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::router::{AppState, build_router};

/// A running HTTP server.
pub struct HttpServer {
    state: AppState,
    /// Shutdown signal
    shutdown_tx: Option<mpsc::Sender<()>>,
    /// Server task handle
    handle: Option<tokio::task::JoinHandle<()>>,
    /// Actual bound address
    local_addr: SocketAddr,
}

impl HttpServer {
    /// Bind and start serving in a background task.
    pub async fn start(config: ServerConfig) -> Result<Self, ServerError> {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);

        let state = AppState::default();
        let app = app(&config, state.clone());

        let listener =
            tokio::net::TcpListener::bind((config.hostname.as_str(), config.port)).await?;
        let local_addr = listener.local_addr()?;

        info!("listening on http://{local_addr}");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.recv().await;
                })
                .await
                .ok();
        });

        Ok(Self {
            state,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
            local_addr,
        })
    }

    /// Get the actual bound port.
    pub fn port(&self) -> u16 {
        self.local_addr.port()
    }

    /// `http://ip:port` of the bound listener. IPv6 addresses are bracketed.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    pub fn requests_served(&self) -> usize {
        self.state.requests_served()
    }

    /// Gracefully stop the server.
    pub async fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(()).await;
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
        info!("server stopped");
    }
}

fn app(config: &ServerConfig, state: AppState) -> Router {
    let app = build_router(state).layer(TraceLayer::new_for_http());
    if config.enable_cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

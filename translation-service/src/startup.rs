//! Application startup and lifecycle management.
//!
//! Builds the shared state (pipeline cache over the configured loader),
//! binds the HTTP listener, and runs the axum server until shutdown.

use crate::config::TranslationConfig;
use crate::handlers;
use crate::services::{MarianPipelineLoader, MockPipelineLoader, PipelineCache, PipelineLoader};
use axum::{
    Router,
    routing::{get, post},
};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: TranslationConfig,
    pub pipelines: Arc<PipelineCache>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: TranslationConfig) -> Result<Self, AppError> {
        let loader: Arc<dyn PipelineLoader> = if config.marian.enabled {
            tracing::info!("Marian pipeline loader initialized");
            Arc::new(MarianPipelineLoader::new())
        } else {
            tracing::info!("Marian loader disabled, using mock pipeline loader");
            Arc::new(MockPipelineLoader::new(true))
        };

        let state = AppState {
            config: config.clone(),
            pipelines: Arc::new(PipelineCache::new(loader)),
        };

        // Bind HTTP listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Translation service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/translate", post(handlers::translate))
            .layer(TraceLayer::new_for_http())
            // Any origin, any method, any headers; credentialed cross-origin
            // requests stay disallowed.
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .with_state(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

//! Application startup and lifecycle management.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::handlers::{answer::generate_answer, health::health_check, image::generate_image};
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub text_provider: Arc<dyn TextProvider>,
}

/// Build the router: relay routes plus the static-file fallback.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_files.dir.clone();

    Router::new()
        .route("/generate-answer", post(generate_answer))
        .route("/generate-image", post(generate_image))
        .route("/health", get(health_check))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: AppConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.google.api_key.clone(),
            model: config.models.text_model.clone(),
        };
        let text_provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(gemini_config));

        tracing::info!(
            model = %config.models.text_model,
            "Initialized Gemini text provider"
        );

        let state = AppState {
            config: config.clone(),
            text_provider,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            "Relay service: HTTP on port {}, serving static files from {}",
            port,
            state.config.static_files.dir
        );

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
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}

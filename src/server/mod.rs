// HTTP server module

mod handlers;
mod types;

pub use handlers::{create_router, handle_feedback, handle_summarize, health_check};
pub use types::{
    ApiError, FeedbackRequest, FeedbackResponse, HealthResponse, SummarizeRequest,
    SummaryResponse,
};

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::feedback::FeedbackLog;
use crate::providers::CompletionProvider;

/// Shared state behind every handler
pub struct AppState {
    /// Runtime configuration
    pub config: Config,
    /// Completion backend (trait object so tests can substitute one)
    pub provider: Arc<dyn CompletionProvider>,
    /// Append-only feedback log
    pub feedback: FeedbackLog,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn CompletionProvider>, feedback: FeedbackLog) -> Self {
        Self {
            config,
            provider,
            feedback,
        }
    }
}

/// Start the HTTP server
pub async fn serve(state: AppState, bind_address: &str) -> Result<()> {
    let addr: SocketAddr = bind_address.parse()?;

    // Request bodies are small JSON; 1MB is generous while blocking
    // oversized payloads outright.
    let app = create_router(Arc::new(state))
        .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

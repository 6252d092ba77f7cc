//! HTTP serving shell
//!
//! A thin axum layer over [`PiiAnonymizer`]. The anonymizer is built once
//! before the listener starts and shared read-only by every request.
//!
//! # Example
//!
//! ```no_run
//! use redakt::anonymization::{AnonymizationConfig, PiiAnonymizer};
//! use redakt::server::{router, AppState};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let anonymizer = PiiAnonymizer::new(AnonymizationConfig::default())?;
//! let app = router(AppState::ready(Arc::new(anonymizer), 100));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod routes;

use crate::anonymization::PiiAnonymizer;
use crate::domain::{RedaktError, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared request state
#[derive(Clone)]
pub struct AppState {
    /// `None` when construction failed; requests then get 503
    pub anonymizer: Option<Arc<PiiAnonymizer>>,
    /// Maximum input items per invocation
    pub max_batch_size: usize,
}

impl AppState {
    /// State with a constructed anonymizer
    pub fn ready(anonymizer: Arc<PiiAnonymizer>, max_batch_size: usize) -> Self {
        Self {
            anonymizer: Some(anonymizer),
            max_batch_size,
        }
    }

    /// State reporting not-ready
    pub fn not_ready(max_batch_size: usize) -> Self {
        Self {
            anonymizer: None,
            max_batch_size,
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(routes::ping))
        .route("/invocations", post(routes::invocations))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `address` and serve until `shutdown` resolves
pub async fn serve<F>(address: &str, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| RedaktError::Server(format!("Failed to bind {address}: {e}")))?;

    tracing::info!(address = %address, ready = state.anonymizer.is_some(), "HTTP server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| RedaktError::Server(format!("Server error: {e}")))?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

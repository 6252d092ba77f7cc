//! HTTP endpoints
//!
//! - `GET /ping`: readiness, 200 once the anonymizer is constructed
//! - `POST /invocations`: batch anonymization, results in input order

use super::AppState;
use crate::anonymization::models::AnonymizeResult;
use crate::anonymization::PiiAnonymizer;
use crate::domain::RedaktError;
use crate::{log_error_with_context, log_request_complete, log_request_start};
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Mode used when neither the request nor the item names one
pub const DEFAULT_MODE: &str = "tagged_text";

/// One text to anonymize
#[derive(Debug, Clone, Deserialize)]
pub struct InvocationItem {
    /// Text to analyze
    pub text: String,
    /// Language code, or `unknown` to detect
    #[serde(default)]
    pub lang: Option<String>,
    /// Per-item output mode override
    #[serde(default)]
    pub mode: Option<String>,
}

/// Body of `POST /invocations`
#[derive(Debug, Clone, Deserialize)]
pub struct InvocationRequest {
    /// Output mode for every item without its own
    #[serde(default)]
    pub mode: Option<String>,
    /// Entity types to look for; all when absent
    #[serde(default)]
    pub entities: Option<Vec<String>>,
    /// Items to process
    pub input: Vec<InvocationItem>,
}

/// Body of a successful `POST /invocations`
#[derive(Debug, Serialize)]
pub struct InvocationResponse {
    /// One result per input item, same order
    pub output: Vec<AnonymizeResult>,
}

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}

/// Body of `GET /ping`
#[derive(Debug, Serialize)]
pub struct PingResponse {
    /// `ready` or `not_ready`
    pub status: &'static str,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// GET /ping
pub async fn ping(State(state): State<AppState>) -> (StatusCode, Json<PingResponse>) {
    if state.anonymizer.is_some() {
        (StatusCode::OK, Json(PingResponse { status: "ready" }))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(PingResponse {
                status: "not_ready",
            }),
        )
    }
}

/// POST /invocations
pub async fn invocations(
    State(state): State<AppState>,
    Json(request): Json<InvocationRequest>,
) -> Result<Json<InvocationResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let started = Instant::now();

    let anonymizer = state.anonymizer.clone().ok_or_else(|| {
        error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Anonymizer is not initialized",
        )
    })?;

    let items = request.input.len();
    if items > state.max_batch_size {
        return Err(error(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!(
                "Too many input items: {} (maximum {})",
                items, state.max_batch_size
            ),
        ));
    }

    log_request_start!(request_id, items);

    let output = tokio::task::spawn_blocking(move || process_batch(&anonymizer, &request))
        .await
        .map_err(|e| {
            log_error_with_context!(e, "Invocation worker failed");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Invocation worker failed")
        })?
        .map_err(|e| {
            log_error_with_context!(&e, "Invocation rejected");
            let status = if e.is_input_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            error(status, e.to_string())
        })?;

    log_request_complete!(request_id, items, started.elapsed());

    Ok(Json(InvocationResponse { output }))
}

fn process_batch(
    anonymizer: &Arc<PiiAnonymizer>,
    request: &InvocationRequest,
) -> Result<Vec<AnonymizeResult>, RedaktError> {
    let entities = request.entities.as_deref();
    request
        .input
        .iter()
        .map(|item| {
            let mode = item
                .mode
                .as_deref()
                .or(request.mode.as_deref())
                .unwrap_or(DEFAULT_MODE);
            let lang = item
                .lang
                .as_deref()
                .unwrap_or_else(|| anonymizer.default_language());
            anonymizer.anonymize_text(&item.text, mode, entities, lang)
        })
        .collect()
}

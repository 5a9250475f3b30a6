// Axum handlers for the summarization API

use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use uuid::Uuid;

use crate::feedback::FeedbackEntry;
use crate::notes::{list_note_files, read_note, MIN_NOTE_LEN};
use crate::summarize::{summarize_note, SummarizeOptions};

use super::types::{
    ApiError, FeedbackRequest, FeedbackResponse, HealthResponse, SummarizeRequest,
    SummaryResponse,
};
use super::AppState;

/// Build the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/summarize", post(handle_summarize))
        .route("/feedback", post(handle_feedback))
        .with_state(state)
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}

/// POST /summarize — summarize every .txt note in the requested directory
pub async fn handle_summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<Vec<SummaryResponse>>, ApiError> {
    tracing::info!(directory = %request.directory, "Processing text files");

    let files = list_note_files(Path::new(&request.directory))?;

    if files.len() > state.config.max_notes_per_request {
        return Err(ApiError::Unprocessable(format!(
            "Directory contains {} notes; limit per request is {}",
            files.len(),
            state.config.max_notes_per_request
        )));
    }

    let options = SummarizeOptions {
        role: request.role.clone(),
        format: request.format.clone(),
        highlight_critical: request.highlight_critical,
    };

    let mut summaries = Vec::new();
    for path in files {
        let text = read_note(&path)?;
        if text.len() < MIN_NOTE_LEN {
            tracing::warn!(file = %path.display(), "File too short, skipping");
            continue;
        }

        let summary = summarize_note(state.provider.as_ref(), &text, &options).await?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        tracing::info!(file = %path.display(), "Generated summary");
        summaries.push(SummaryResponse::from_note_summary(summary, file_name));
    }

    Ok(Json(summaries))
}

/// POST /feedback — append a rating to the feedback log
pub async fn handle_feedback(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    if !(1..=5).contains(&request.rating) {
        return Err(ApiError::Unprocessable(format!(
            "rating must be between 1 and 5, got {}",
            request.rating
        )));
    }

    tracing::info!(
        summary_id = %request.summary_id,
        rating = request.rating,
        "Received feedback"
    );

    let entry = FeedbackEntry::new(request.summary_id, request.rating, request.comments);
    state.feedback.append(&entry)?;

    Ok(Json(FeedbackResponse {
        status: "feedback received".to_string(),
        feedback_id: format!("fb_{}", Uuid::new_v4().simple()),
    }))
}

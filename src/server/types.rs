// API request/response types and the HTTP error type

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::summarize::{NoteSummary, SummaryMetadata};

/// Body of POST /summarize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Directory containing the medical notes
    pub directory: String,
    /// Clinical role (e.g., "physician", "nurse")
    #[serde(default)]
    pub role: Option<String>,
    /// Summary format (e.g., "brief", "detailed")
    #[serde(default)]
    pub format: Option<String>,
    /// Whether to highlight critical findings
    #[serde(default = "default_true")]
    pub highlight_critical: bool,
}

fn default_true() -> bool {
    true
}

/// One element of the POST /summarize response array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary_id: String,
    pub file_name: String,
    pub summary: String,
    pub metadata: SummaryMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_findings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_mappings: Option<std::collections::HashMap<String, Vec<usize>>>,
}

impl SummaryResponse {
    /// Attach the source file name to a pipeline result
    pub fn from_note_summary(summary: NoteSummary, file_name: String) -> Self {
        Self {
            summary_id: summary.summary_id,
            file_name,
            summary: summary.summary,
            metadata: summary.metadata,
            critical_findings: summary.critical_findings,
            source_mappings: summary.source_mappings,
        }
    }
}

/// Body of POST /feedback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    /// ID of the summary being rated
    pub summary_id: String,
    /// Rating from 1 to 5
    pub rating: u8,
    /// Optional free-text comments
    #[serde(default)]
    pub comments: Option<String>,
}

/// Response of POST /feedback
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub status: String,
    pub feedback_id: String,
}

/// Response of GET /health
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// HTTP-level error with a JSON body
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed validation (422)
    #[error("{0}")]
    Unprocessable(String),

    /// Anything else: filesystem errors, upstream model failures (500)
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unprocessable(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            ApiError::Internal(error) => {
                tracing::error!("Request failed: {:#}", error);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", error))
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_request_defaults() {
        let json = r#"{"directory": "/tmp/notes"}"#;
        let request: SummarizeRequest = serde_json::from_str(json).unwrap();
        assert!(request.highlight_critical);
        assert!(request.role.is_none());
        assert!(request.format.is_none());
    }

    #[test]
    fn test_summarize_request_explicit_fields() {
        let json = r#"{
            "directory": "/tmp/notes",
            "role": "physician",
            "format": "brief",
            "highlight_critical": false
        }"#;
        let request: SummarizeRequest = serde_json::from_str(json).unwrap();
        assert!(!request.highlight_critical);
        assert_eq!(request.role.as_deref(), Some("physician"));
    }

    #[test]
    fn test_feedback_request_optional_comments() {
        let json = r#"{"summary_id": "sum_1", "rating": 3}"#;
        let request: FeedbackRequest = serde_json::from_str(json).unwrap();
        assert!(request.comments.is_none());
        assert_eq!(request.rating, 3);
    }
}

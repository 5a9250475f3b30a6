// Summarization pipeline
//
// Per note: build the system prompt, call the completion provider, then
// post-process the reply into summary text, critical findings, and a
// sentence-to-paragraph source mapping.

mod findings;
mod mapping;
mod prompt;

pub use findings::{split_critical_findings, FINDINGS_MARKER};
pub use mapping::create_source_mapping;
pub use prompt::build_system_prompt;

use std::collections::HashMap;
use std::time::Instant;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::providers::{CompletionProvider, CompletionRequest, TokenUsage};

/// Caller-supplied knobs for one summarization run
#[derive(Debug, Clone, Default)]
pub struct SummarizeOptions {
    /// Clinical role the summary is formatted for (e.g., "physician", "nurse")
    pub role: Option<String>,
    /// Summary format (e.g., "brief", "detailed")
    pub format: Option<String>,
    /// Whether to ask the model for a separate critical-findings section
    pub highlight_critical: bool,
}

/// Metadata attached to every generated summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryMetadata {
    pub model: String,
    pub role: Option<String>,
    pub format: Option<String>,
    pub processing_time_sec: f64,
    pub tokens: TokenUsage,
    pub timestamp: DateTime<Utc>,
}

/// The result of summarizing one note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteSummary {
    pub summary_id: String,
    pub summary: String,
    pub metadata: SummaryMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_findings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_mappings: Option<HashMap<String, Vec<usize>>>,
}

/// Summarize one medical note via the completion provider
pub async fn summarize_note(
    provider: &dyn CompletionProvider,
    text: &str,
    options: &SummarizeOptions,
) -> Result<NoteSummary> {
    let start = Instant::now();

    let system_prompt = build_system_prompt(
        options.role.as_deref(),
        options.format.as_deref(),
        options.highlight_critical,
    );

    let request = CompletionRequest::new(text).with_system(system_prompt);
    let response = provider.complete(&request).await?;

    let (summary, critical_findings) = if options.highlight_critical {
        split_critical_findings(&response.text)
    } else {
        (response.text.clone(), None)
    };

    // Always present, possibly empty; only critical_findings is omissible
    let source_mappings = Some(create_source_mapping(text, &summary));

    tracing::info!(
        prompt_tokens = response.usage.prompt_tokens,
        completion_tokens = response.usage.completion_tokens,
        total_tokens = response.usage.total_tokens,
        "Token usage"
    );

    Ok(NoteSummary {
        summary_id: format!("sum_{}", Uuid::new_v4().simple()),
        summary,
        metadata: SummaryMetadata {
            model: response.model,
            role: options.role.clone(),
            format: options.format.clone(),
            processing_time_sec: start.elapsed().as_secs_f64(),
            tokens: response.usage,
            timestamp: Utc::now(),
        },
        critical_findings,
        source_mappings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::providers::CompletionResponse;

    /// Provider that returns a fixed reply
    struct CannedProvider {
        reply: String,
    }

    #[async_trait]
    impl CompletionProvider for CannedProvider {
        async fn complete(&self, _request: &CompletionRequest) -> Result<CompletionResponse> {
            Ok(CompletionResponse {
                text: self.reply.clone(),
                model: "test-model".to_string(),
                usage: TokenUsage {
                    prompt_tokens: 100,
                    completion_tokens: 50,
                    total_tokens: 150,
                },
            })
        }

        fn name(&self) -> &str {
            "canned"
        }

        fn default_model(&self) -> &str {
            "test-model"
        }
    }

    #[tokio::test]
    async fn test_summarize_note_extracts_findings() {
        let provider = CannedProvider {
            reply: "Patient is stable. Critical Findings:\n- Elevated troponin".to_string(),
        };
        let options = SummarizeOptions {
            role: Some("physician".to_string()),
            format: Some("brief".to_string()),
            highlight_critical: true,
        };

        let result = summarize_note(&provider, "Patient presents with chest pain.", &options)
            .await
            .unwrap();

        assert!(result.summary_id.starts_with("sum_"));
        assert_eq!(result.summary, "Patient is stable.");
        assert_eq!(
            result.critical_findings,
            Some(vec!["- Elevated troponin".to_string()])
        );
        assert_eq!(result.metadata.model, "test-model");
        assert_eq!(result.metadata.role.as_deref(), Some("physician"));
        assert_eq!(result.metadata.tokens.total_tokens, 150);
    }

    #[tokio::test]
    async fn test_summarize_note_without_highlighting() {
        let provider = CannedProvider {
            reply: "Summary text. Critical Findings: ignored".to_string(),
        };
        let options = SummarizeOptions {
            highlight_critical: false,
            ..Default::default()
        };

        let result = summarize_note(&provider, "Some note text here.", &options)
            .await
            .unwrap();

        // Marker is left untouched when highlighting is off
        assert!(result.summary.contains("Critical Findings"));
        assert!(result.critical_findings.is_none());
    }

    #[tokio::test]
    async fn test_summarize_note_source_mapping_present() {
        let provider = CannedProvider {
            reply: "Patient has hypertension.".to_string(),
        };
        let options = SummarizeOptions {
            highlight_critical: true,
            ..Default::default()
        };

        let result = summarize_note(
            &provider,
            "History of hypertension and diabetes.\nOn metformin.",
            &options,
        )
        .await
        .unwrap();

        let mappings = result.source_mappings.unwrap();
        assert_eq!(mappings.get("sentence_0"), Some(&vec![0]));
    }

    #[tokio::test]
    async fn test_summarize_note_empty_mapping_serialized_as_object() {
        let provider = CannedProvider {
            // No word longer than five chars, so no key terms and no matches
            reply: "All is well now.".to_string(),
        };
        let options = SummarizeOptions {
            highlight_critical: true,
            ..Default::default()
        };

        let result = summarize_note(&provider, "Some note text goes here.", &options)
            .await
            .unwrap();

        assert_eq!(result.source_mappings, Some(HashMap::new()));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["source_mappings"], serde_json::json!({}));
    }
}

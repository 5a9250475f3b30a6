// Append-only feedback log
//
// Each rating is one JSON line; the file is opened per append so there is
// no buffered state to lose on shutdown.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single feedback record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// ID of the summary this feedback is about
    pub summary_id: String,
    /// Rating from 1 to 5
    pub rating: u8,
    /// Optional free-text comments
    pub comments: Option<String>,
    /// When the feedback was received
    pub timestamp: DateTime<Utc>,
}

impl FeedbackEntry {
    pub fn new(summary_id: String, rating: u8, comments: Option<String>) -> Self {
        Self {
            summary_id,
            rating,
            comments,
            timestamp: Utc::now(),
        }
    }
}

/// Feedback logger that appends JSONL records
#[derive(Debug, Clone)]
pub struct FeedbackLog {
    path: PathBuf,
}

impl FeedbackLog {
    /// Create a feedback log, ensuring the parent directory exists
    pub fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create feedback directory: {}", parent.display())
            })?;
        }

        Ok(Self { path })
    }

    /// Append one feedback entry as a JSON line
    pub fn append(&self, entry: &FeedbackEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open feedback log: {}", self.path.display()))?;

        let json = serde_json::to_string(entry).context("Failed to serialize feedback entry")?;
        writeln!(file, "{}", json).context("Failed to write feedback entry")?;

        tracing::debug!(summary_id = %entry.summary_id, rating = entry.rating, "Feedback recorded");
        Ok(())
    }

    /// Get the log file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

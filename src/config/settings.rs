// Configuration structs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default chat-completion model
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default bind address for the HTTP server
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the completion endpoint
    pub api_key: String,

    /// Model identifier sent with each completion request
    pub model: String,

    /// Optional base URL override (for self-hosted or proxy endpoints)
    pub base_url: Option<String>,

    /// Bind address (e.g., "127.0.0.1:8000")
    pub bind_address: String,

    /// Path of the append-only feedback log
    pub feedback_path: PathBuf,

    /// Request timeout for the completion API in seconds
    pub request_timeout_secs: u64,

    /// Maximum number of note files a single /summarize request may fan out to
    pub max_notes_per_request: usize,
}

impl Config {
    /// Build a config with defaults for everything except the API key
    pub fn with_api_key(api_key: String) -> Self {
        let feedback_path = std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("feedback")
            .join("feedback.jsonl");

        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            feedback_path,
            request_timeout_secs: 60,
            max_notes_per_request: 64,
        }
    }

    /// Validate configuration and return helpful errors
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!(
                "API key is empty.\n\n\
                 Set it in ~/.chartbrief/config.toml or via:\n  \
                 export OPENAI_API_KEY=\"sk-...\""
            );
        }

        // OpenAI keys start with "sk-"; only warn-level strictness for
        // custom base URLs where the key format is the operator's business.
        if self.base_url.is_none() && !self.api_key.starts_with("sk-") {
            anyhow::bail!(
                "API key has incorrect format (expected 'sk-' prefix).\n\n\
                 Get a valid key from:\n  \
                 https://platform.openai.com/api-keys"
            );
        }

        if !self.bind_address.contains(':') {
            anyhow::bail!(
                "Invalid bind address: '{}'\n\
                 Bind address should be in format 'IP:PORT', e.g. 127.0.0.1:8000",
                self.bind_address
            );
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        if self.max_notes_per_request == 0 {
            anyhow::bail!("max_notes_per_request must be greater than 0");
        }

        Ok(())
    }
}

/// TOML-serializable config (subset of Config; missing fields take defaults)
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct TomlConfig {
    pub api_key: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub bind_address: Option<String>,
    #[serde(default)]
    pub feedback_path: Option<PathBuf>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub max_notes_per_request: Option<usize>,
}

impl TomlConfig {
    pub fn into_config(self) -> Config {
        let mut config = Config::with_api_key(self.api_key);
        if let Some(model) = self.model {
            config.model = model;
        }
        config.base_url = self.base_url;
        if let Some(bind_address) = self.bind_address {
            config.bind_address = bind_address;
        }
        if let Some(feedback_path) = self.feedback_path {
            config.feedback_path = feedback_path;
        }
        if let Some(timeout) = self.request_timeout_secs {
            config.request_timeout_secs = timeout;
        }
        if let Some(max_notes) = self.max_notes_per_request {
            config.max_notes_per_request = max_notes;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::with_api_key("sk-test".to_string());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.request_timeout_secs, 60);
        assert!(config.feedback_path.ends_with("feedback/feedback.jsonl"));
    }

    #[test]
    fn test_validate_accepts_sk_key() {
        let config = Config::with_api_key("sk-abc123".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let config = Config::with_api_key("   ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_malformed_key() {
        let config = Config::with_api_key("not-a-key".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_allows_any_key_with_custom_base_url() {
        let mut config = Config::with_api_key("local-token".to_string());
        config.base_url = Some("http://localhost:11434".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_bind_address() {
        let mut config = Config::with_api_key("sk-abc".to_string());
        config.bind_address = "localhost".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_config_partial() {
        let toml = r#"
            api_key = "sk-abc"
            model = "gpt-4o-mini"
        "#;
        let parsed: TomlConfig = toml::from_str(toml).unwrap();
        let config = parsed.into_config();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
    }
}

//! Settings structure for the xAI client

use crate::error::{GrokError, Result};
use crate::{DEFAULT_BASE_URL, DEFAULT_MODEL, PLACEHOLDER_API_KEY};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Credential, endpoint and model for one client.
///
/// On disk this is the `xai` section of the config file:
///
/// ```json
/// {"xai": {"api_key": "xai-...", "base_url": "...", "model": "..."}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bearer token sent to the API
    pub api_key: String,
    /// Chat-completions endpoint
    pub base_url: String,
    /// Model identifier
    pub model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON config file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => GrokError::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => GrokError::ConfigUnreadable {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let malformed = |source| GrokError::ConfigMalformed {
            path: path.to_path_buf(),
            source,
        };

        let root: Value = serde_json::from_str(&content).map_err(malformed)?;

        let section = root.get("xai").ok_or_else(|| GrokError::ConfigIncomplete {
            path: path.to_path_buf(),
            field: "xai",
        })?;
        if section.get("api_key").is_none() {
            return Err(GrokError::ConfigIncomplete {
                path: path.to_path_buf(),
                field: "api_key",
            });
        }

        serde_json::from_value(section.clone()).map_err(malformed)
    }

    /// Build settings from explicit values, defaulting what is omitted
    pub fn from_parameters(
        api_key: impl Into<String>,
        base_url: Option<String>,
        model: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_key: api_key.into(),
            base_url: base_url.unwrap_or(defaults.base_url),
            model: model.unwrap_or(defaults.model),
        }
    }

    /// Merge with environment variables (XAI_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("XAI_API_KEY") {
            if !val.is_empty() {
                self.api_key = val;
            }
        }
        if let Ok(val) = std::env::var("XAI_BASE_URL") {
            if !val.is_empty() {
                self.base_url = val;
            }
        }
        if let Ok(val) = std::env::var("XAI_MODEL") {
            if !val.is_empty() {
                self.model = val;
            }
        }
    }

    /// Whether the credential is set to something other than the placeholder
    pub fn has_usable_api_key(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != PLACEHOLDER_API_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.base_url, "https://api.x.ai/v1/chat/completions");
        assert_eq!(settings.model, "grok-3-latest");
        assert!(!settings.has_usable_api_key());
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r#"{"xai": {"api_key": "xai-abc", "base_url": "http://localhost:9/v1", "model": "grok-2"}}"#,
        );
        let settings = Settings::load_from_file(file.path()).unwrap();
        assert_eq!(settings.api_key, "xai-abc");
        assert_eq!(settings.base_url, "http://localhost:9/v1");
        assert_eq!(settings.model, "grok-2");
    }

    #[test]
    fn test_load_applies_defaults() {
        let file = write_config(r#"{"xai": {"api_key": "xai-abc"}}"#);
        let settings = Settings::load_from_file(file.path()).unwrap();
        assert_eq!(settings.api_key, "xai-abc");
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_missing_api_key() {
        let file = write_config(r#"{"xai": {"model": "grok-2"}}"#);
        let err = Settings::load_from_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            GrokError::ConfigIncomplete { field: "api_key", .. }
        ));
    }

    #[test]
    fn test_missing_section() {
        let file = write_config(r#"{"openai": {"api_key": "sk-abc"}}"#);
        let err = Settings::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, GrokError::ConfigIncomplete { field: "xai", .. }));
    }

    #[test]
    fn test_nonexistent_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = Settings::load_from_file(&path).unwrap_err();
        match err {
            GrokError::ConfigNotFound { path: p } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json() {
        let file = write_config("{ xai: api_key = nope");
        let err = Settings::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, GrokError::ConfigMalformed { .. }));
    }

    #[test]
    fn test_from_parameters() {
        let settings = Settings::from_parameters("xai-abc", None, None);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.model, DEFAULT_MODEL);

        let settings = Settings::from_parameters(
            "xai-abc",
            Some("http://127.0.0.1/v1".to_string()),
            Some("grok-beta".to_string()),
        );
        assert_eq!(settings.base_url, "http://127.0.0.1/v1");
        assert_eq!(settings.model, "grok-beta");
    }

    #[test]
    fn test_from_parameters_does_not_validate() {
        let settings = Settings::from_parameters("", None, None);
        assert!(settings.api_key.is_empty());
        assert!(!settings.has_usable_api_key());

        let settings = Settings::from_parameters(PLACEHOLDER_API_KEY, None, None);
        assert!(!settings.has_usable_api_key());
    }
}

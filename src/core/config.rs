//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Configuration errors detected at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("LEAD_WEBHOOK_URL is not a valid URL: {0}")]
    InvalidWebhookUrl(String),

    #[error("LEAD_WEBHOOK_URL must use http or https, got {0}")]
    UnsupportedWebhookScheme(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Endpoint that receives completed lead forms as JSON
    /// Example: https://hooks.example.com/leads
    /// Leads are only logged when unset
    pub lead_webhook_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    /// Blank values count as unset.
    pub fn from_env() -> Self {
        Self {
            lead_webhook_url: std::env::var("LEAD_WEBHOOK_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        }
    }

    /// Check if a lead webhook is configured
    pub fn has_lead_webhook(&self) -> bool {
        self.lead_webhook_url.is_some()
    }

    /// Parsed webhook URL, if one is configured
    pub fn lead_webhook(&self) -> Result<Option<reqwest::Url>, ConfigError> {
        let Some(raw) = self.lead_webhook_url.as_deref() else {
            return Ok(None);
        };

        let url = reqwest::Url::parse(raw.trim())
            .map_err(|e| ConfigError::InvalidWebhookUrl(e.to_string()))?;

        match url.scheme() {
            "http" | "https" => Ok(Some(url)),
            other => Err(ConfigError::UnsupportedWebhookScheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_without_webhook() {
        let config = Config {
            lead_webhook_url: None,
        };

        assert!(!config.has_lead_webhook());
        assert!(config.lead_webhook().unwrap().is_none());
    }

    #[test]
    fn test_config_with_webhook() {
        let config = Config {
            lead_webhook_url: Some("https://hooks.example.com/leads".to_string()),
        };

        assert!(config.has_lead_webhook());
        let url = config.lead_webhook().unwrap().unwrap();
        assert_eq!(url.host_str(), Some("hooks.example.com"));
        assert_eq!(url.path(), "/leads");
    }

    #[test]
    fn test_invalid_webhook_url() {
        let config = Config {
            lead_webhook_url: Some("not a url".to_string()),
        };

        assert!(matches!(
            config.lead_webhook(),
            Err(ConfigError::InvalidWebhookUrl(_))
        ));
    }

    #[test]
    fn test_non_http_webhook_rejected() {
        let config = Config {
            lead_webhook_url: Some("ftp://files.example.com/leads".to_string()),
        };

        let err = config.lead_webhook().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedWebhookScheme(ref s) if s == "ftp"));
        assert!(err.to_string().contains("ftp"));
    }

    #[test]
    fn test_config_default_has_no_webhook() {
        let config = Config::default();
        assert!(!config.has_lead_webhook());
    }

    #[test]
    fn test_config_debug() {
        let config = Config {
            lead_webhook_url: Some("https://hooks.example.com".to_string()),
        };

        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("lead_webhook_url"));
    }
}

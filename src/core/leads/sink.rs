//! Lead delivery targets

use super::service::{LeadError, LeadRecord};
use crate::core::config::{Config, ConfigError};

/// Where accepted leads go
#[derive(Debug, Clone)]
pub enum LeadSink {
    /// Structured log line per lead
    Log,
    /// JSON POST to an external endpoint
    Webhook {
        client: reqwest::Client,
        url: reqwest::Url,
    },
}

impl LeadSink {
    /// Pick the sink from configuration: webhook when configured, log otherwise
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(match config.lead_webhook()? {
            Some(url) => LeadSink::Webhook {
                client: reqwest::Client::new(),
                url,
            },
            None => LeadSink::Log,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            LeadSink::Log => "log",
            LeadSink::Webhook { .. } => "webhook",
        }
    }

    pub async fn deliver(&self, record: &LeadRecord) -> Result<(), LeadError> {
        match self {
            LeadSink::Log => {
                let payload = serde_json::to_string(&record.lead)
                    .map_err(|e| LeadError::Delivery(e.to_string()))?;
                tracing::info!(
                    lead_id = %record.id,
                    received_at = %record.received_at,
                    lead = %payload,
                    "Lead received"
                );
                Ok(())
            }
            LeadSink::Webhook { client, url } => {
                let response = client
                    .post(url.clone())
                    .json(record)
                    .send()
                    .await
                    .map_err(|e| LeadError::Delivery(e.to_string()))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(LeadError::Delivery(format!(
                        "webhook responded with {}",
                        status
                    )));
                }

                tracing::info!(lead_id = %record.id, %status, "Lead forwarded to webhook");
                Ok(())
            }
        }
    }
}

//! Lead intake service
//!
//! Checks an incoming lead form, stamps it and hands it to the configured sink.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::sink::LeadSink;
use crate::core::lead::{LeadForm, TextField};

/// Lead intake error types
#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    #[error("Missing required field: {}", .0.name())]
    MissingField(TextField),

    #[error("Lead delivery failed: {0}")]
    Delivery(String),
}

/// A lead as handed to a sink
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub lead: LeadForm,
}

impl LeadRecord {
    pub fn new(lead: LeadForm) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            lead,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeadService {
    sink: LeadSink,
}

impl LeadService {
    pub fn new(sink: LeadSink) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &LeadSink {
        &self.sink
    }

    /// Validate, stamp and deliver a lead
    pub async fn accept(&self, lead: LeadForm) -> Result<LeadRecord, LeadError> {
        if let Some(field) = lead.missing_field() {
            return Err(LeadError::MissingField(field));
        }

        let record = LeadRecord::new(lead);
        self.sink.deliver(&record).await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_lead() -> LeadForm {
        LeadForm {
            first_name: "Jane".to_string(),
            email: "jane@company.com".to_string(),
            company_name: "Acme".to_string(),
            role: "CTO".to_string(),
            project_needs: "Automate patient intake".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_accept_complete_lead() {
        let service = LeadService::new(LeadSink::Log);

        let record = service.accept(complete_lead()).await.unwrap();

        assert_eq!(record.lead, complete_lead());
        assert!(record.received_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_reject_lead_missing_role() {
        let service = LeadService::new(LeadSink::Log);
        let lead = LeadForm {
            role: String::new(),
            ..complete_lead()
        };

        let result = service.accept(lead).await;

        assert!(matches!(
            result,
            Err(LeadError::MissingField(TextField::Role))
        ));
    }

    #[tokio::test]
    async fn test_optional_fields_may_be_empty() {
        let service = LeadService::new(LeadSink::Log);
        let lead = LeadForm {
            phone: String::new(),
            email_opt_in: false,
            sms_opt_in: false,
            ..complete_lead()
        };

        assert!(service.accept(lead).await.is_ok());
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let a = LeadRecord::new(complete_lead());
        let b = LeadRecord::new(complete_lead());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_record_serialization() {
        let record = LeadRecord::new(complete_lead());
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("receivedAt").is_some());
        assert_eq!(json["lead"]["companyName"], "Acme");
    }

    #[test]
    fn test_error_messages() {
        let err = LeadError::MissingField(TextField::ProjectNeeds);
        assert_eq!(err.to_string(), "Missing required field: projectNeeds");
    }
}

//! Lead API endpoint
//!
//! - POST /api/leads - Accept a completed lead form

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::service::{LeadError, LeadService};
use crate::core::lead::LeadForm;
use crate::core::site::LEADS_ENDPOINT;

/// Lead API state containing the intake service
#[derive(Clone)]
pub struct LeadApiState {
    pub lead_service: LeadService,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Convert LeadError to API response
impl IntoResponse for LeadError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            LeadError::MissingField(_) => (StatusCode::UNPROCESSABLE_ENTITY, "MISSING_FIELD"),
            LeadError::Delivery(_) => (StatusCode::BAD_GATEWAY, "DELIVERY_FAILED"),
        };

        let body = ApiError::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

/// Response for an accepted lead
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadAccepted {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

/// Create the lead API router
pub fn leads_router(state: LeadApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route(LEADS_ENDPOINT, post(submit_lead_handler))
        .with_state(state)
}

/// POST /api/leads
/// Accept a completed lead form
async fn submit_lead_handler(
    State(state): State<Arc<LeadApiState>>,
    Json(lead): Json<LeadForm>,
) -> Result<(StatusCode, Json<LeadAccepted>), LeadError> {
    let record = state.lead_service.accept(lead).await.inspect_err(|e| match e {
        LeadError::MissingField(field) => {
            tracing::warn!(field = field.name(), "Rejected incomplete lead")
        }
        LeadError::Delivery(reason) => {
            tracing::error!(sink = state.lead_service.sink().name(), %reason, "Lead delivery failed")
        }
    })?;

    Ok((
        StatusCode::ACCEPTED,
        Json(LeadAccepted {
            id: record.id,
            received_at: record.received_at,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::leads::LeadSink;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        leads_router(LeadApiState {
            lead_service: LeadService::new(LeadSink::Log),
        })
    }

    fn post_json(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(LEADS_ENDPOINT)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_submit_complete_lead() {
        let lead = LeadForm {
            first_name: "Jane".to_string(),
            email: "jane@company.com".to_string(),
            company_name: "Acme".to_string(),
            role: "CTO".to_string(),
            project_needs: "Automate dispatching".to_string(),
            phone: "+1 (555) 555-5555".to_string(),
            email_opt_in: true,
            sms_opt_in: false,
        };

        let response = create_test_app()
            .oneshot(post_json(serde_json::to_string(&lead).unwrap()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let json = body_json(response).await;
        assert!(json["id"].as_str().is_some());
        assert!(json["receivedAt"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_submit_lead_missing_email() {
        let body = serde_json::json!({
            "firstName": "Jane",
            "email": "",
            "companyName": "Acme",
            "role": "CTO",
            "projectNeeds": "Automate dispatching"
        });

        let response = create_test_app()
            .oneshot(post_json(body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["code"], "MISSING_FIELD");
        assert_eq!(json["error"], "Missing required field: email");
    }

    #[tokio::test]
    async fn test_optional_fields_may_be_omitted() {
        let body = serde_json::json!({
            "firstName": "Jane",
            "email": "jane@company.com",
            "companyName": "Acme",
            "role": "CTO",
            "projectNeeds": "Automate dispatching"
        });

        let response = create_test_app()
            .oneshot(post_json(body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let response = create_test_app()
            .oneshot(post_json("{not json".to_string()))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("Lead delivery failed", "DELIVERY_FAILED");
        let json = serde_json::to_string(&error).unwrap();

        assert!(json.contains("Lead delivery failed"));
        assert!(json.contains("DELIVERY_FAILED"));
    }

    #[test]
    fn test_delivery_error_maps_to_bad_gateway() {
        let response = LeadError::Delivery("timeout".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}

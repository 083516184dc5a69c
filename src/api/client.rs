//! HTTP API Client
//!
//! Builds and sends the medication registration request.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::IdentityClient;
use crate::config::AppConfig;

/// A medication schedule as sent to the API.
///
/// Exactly one of `schedule_time` (non-empty) or `interval_hours` (non-zero)
/// is meaningful; the form clears the inactive one before submission. `0` is
/// the "no interval" sentinel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRecord {
    pub name: String,
    pub schedule_time: Vec<String>,
    pub interval_hours: u8,
}

/// Success body from `POST /medications`.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateMedicationResponse {
    /// User-displayable confirmation message
    pub message: String,
}

/// Error body the API returns on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Submission failures.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request build error: {0}")]
    Request(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// The API rejected the request; carries the server's error message
    #[error("{0}")]
    Rejected(String),

    #[error("Login error: {0}")]
    Identity(String),
}

/// Client for the medication API.
///
/// Built once at startup from [`AppConfig`] and shared via context. When an
/// identity client is attached, requests carry a bearer ID token.
#[derive(Clone)]
pub struct MedicationApi {
    base: String,
    identity: Option<IdentityClient>,
}

impl MedicationApi {
    pub fn new(config: &AppConfig, identity: Option<IdentityClient>) -> Self {
        Self {
            base: config.api_base.clone(),
            identity,
        }
    }

    /// Register a medication schedule.
    pub async fn create(
        &self,
        record: &MedicationRecord,
    ) -> Result<CreateMedicationResponse, ClientError> {
        let mut request = Request::post(&format!("{}/medications", self.base));

        // Token and init failures surface as the overall request failure
        if let Some(identity) = &self.identity {
            let token = identity.id_token().await.map_err(ClientError::Identity)?;
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .json(record)
            .map_err(|e| ClientError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !response.ok() {
            let body: ApiErrorBody = response.json().await.unwrap_or(ApiErrorBody {
                error: "Unknown error".to_string(),
                code: None,
            });
            return Err(ClientError::Rejected(body.error));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_format_times_mode() {
        let record = MedicationRecord {
            name: "Aspirin".to_string(),
            schedule_time: vec!["08:00".to_string(), "20:00".to_string()],
            interval_hours: 0,
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({
                "name": "Aspirin",
                "scheduleTime": ["08:00", "20:00"],
                "intervalHours": 0,
            })
        );
    }

    #[test]
    fn test_record_wire_format_interval_mode() {
        let record = MedicationRecord {
            name: "Ibuprofen".to_string(),
            schedule_time: Vec::new(),
            interval_hours: 8,
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({
                "name": "Ibuprofen",
                "scheduleTime": [],
                "intervalHours": 8,
            })
        );
    }

    #[test]
    fn test_success_body_requires_message() {
        let ok: CreateMedicationResponse =
            serde_json::from_str(r#"{"message":"Medication registered"}"#).unwrap();
        assert_eq!(ok.message, "Medication registered");

        // Anything without a message field is a parse error, not a toast
        assert!(serde_json::from_str::<CreateMedicationResponse>(r#"{"status":"ok"}"#).is_err());
    }

    #[test]
    fn test_error_body_code_is_optional() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"name required"}"#).unwrap();
        assert_eq!(body.error, "name required");
        assert_eq!(body.code, None);
    }
}

//! Prediction backend client.
//!
//! Wraps the `/health` and `/predict` endpoints with request construction,
//! response validation, and error normalization. Raw payloads never leave
//! this module; callers get the typed entities from [`crate::state::global`].

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::RequestCredentials;

use crate::api::error::ApiError;
use crate::state::global::{Coordinate, PredictionResult};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Get the API base URL, overridable at build time via `ROADRISK_API_BASE`.
pub fn api_base() -> String {
    // Normalize: remove trailing slash
    option_env!("ROADRISK_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

// ============ Response Types ============

/// Body of a successful `/health` response. Anything without a string
/// `status` field is treated as malformed.
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub models_loaded: Option<bool>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    latitude: f64,
    longitude: f64,
}

// ============ API Functions ============

/// Check backend health.
pub async fn check_health() -> Result<HealthResponse, ApiError> {
    let response = Request::get(&format!("{}/health", api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|_| ApiError::Unreachable("backend server"))?;

    if !response.ok() {
        return Err(ApiError::Server(format!(
            "Backend health check failed: {}",
            response.status()
        )));
    }

    response.json().await.map_err(|_| ApiError::InvalidResponse)
}

/// Fetch an accident risk prediction for a coordinate.
pub async fn get_prediction(coord: Coordinate) -> Result<PredictionResult, ApiError> {
    let response = Request::post(&format!("{}/predict", api_base()))
        .credentials(RequestCredentials::Include)
        .json(&PredictRequest {
            latitude: coord.lat,
            longitude: coord.lng,
        })
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|_| ApiError::Unreachable("prediction server"))?;

    if !response.ok() {
        let status = response.status();
        // Prefer the server-provided message when the body carries one.
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| format!("Server error: {}", status));
        return Err(ApiError::Server(message));
    }

    response.json().await.map_err(|_| ApiError::InvalidResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_request_body_carries_the_exact_pair() {
        let body = PredictRequest {
            latitude: 12.9716,
            longitude: 77.5946,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["latitude"], 12.9716);
        assert_eq!(json["longitude"], 77.5946);
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
    }

    #[test]
    fn health_response_requires_a_string_status() {
        let ok: Result<HealthResponse, _> =
            serde_json::from_str(r#"{"status":"healthy","models_loaded":true}"#);
        assert_eq!(ok.unwrap().status, "healthy");

        let missing: Result<HealthResponse, _> = serde_json::from_str(r#"{"uptime":3}"#);
        assert!(missing.is_err());

        let wrong_type: Result<HealthResponse, _> = serde_json::from_str(r#"{"status":42}"#);
        assert!(wrong_type.is_err());
    }

    #[test]
    fn error_body_tolerates_missing_error_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());

        let body: ErrorBody = serde_json::from_str(r#"{"error":"model not loaded"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("model not loaded"));
    }
}

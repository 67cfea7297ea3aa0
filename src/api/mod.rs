//! Backend API Bindings
//!
//! Typed access to the volunteer-center REST API, organized as:
//! - `routes`: URL paths and query strings
//! - `payload`: lenient JSON envelope extraction
//! - `client`: the `gloo-net` implementation used in the browser

mod client;
pub mod payload;
pub mod routes;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::models::{
    ApplyRequest, Certificate, CoordinatorReport, Initiative, InitiativeFilter, Participation,
    ReviewDecision, Statistics, User,
};

pub use client::HttpApi;

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response
    Network(String),
    /// Response body was not the JSON we expected
    Decode(String),
    /// Backend answered with a non-success status
    Rejected { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Backend-supplied explanation, if the error body carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            ApiError::Rejected { status, detail: Some(detail) } => {
                write!(f, "Rejected with HTTP {}: {}", status, detail)
            }
            ApiError::Rejected { status, detail: None } => write!(f, "Rejected with HTTP {}", status),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Everything the UI asks of the backend.
///
/// Futures are `?Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait VolunteerApi {
    async fn list_initiatives(&self, filter: &InitiativeFilter) -> ApiResult<Vec<Initiative>>;

    async fn get_statistics(&self) -> ApiResult<Statistics>;

    async fn list_participations(&self, volunteer_id: u32) -> ApiResult<Vec<Participation>>;

    async fn list_certificates(&self, volunteer_id: u32) -> ApiResult<Vec<Certificate>>;

    async fn list_organization_initiatives(&self, organization_id: u32) -> ApiResult<Vec<Initiative>>;

    async fn list_pending_applications(&self, organization_id: u32) -> ApiResult<Vec<Participation>>;

    async fn list_students(&self, coordinator_id: u32) -> ApiResult<Vec<User>>;

    async fn get_coordinator_report(&self, coordinator_id: u32) -> ApiResult<CoordinatorReport>;

    async fn apply(&self, request: &ApplyRequest<'_>) -> ApiResult<()>;

    async fn review_participation(&self, participation_id: u32, decision: ReviewDecision) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Rejected { status: 400, detail: Some("Brak miejsc".to_string()) };
        assert_eq!(err.to_string(), "Rejected with HTTP 400: Brak miejsc");
        assert_eq!(err.detail(), Some("Brak miejsc"));

        let err = ApiError::Rejected { status: 500, detail: None };
        assert_eq!(err.to_string(), "Rejected with HTTP 500");
        assert_eq!(err.detail(), None);

        assert_eq!(ApiError::Network("offline".into()).detail(), None);
    }

    #[test]
    fn test_serde_error_maps_to_decode() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}

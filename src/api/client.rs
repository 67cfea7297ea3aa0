//! HTTP Client
//!
//! `gloo-net` (browser `fetch`) implementation of `VolunteerApi`.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{payload, routes, ApiError, ApiResult, VolunteerApi};
use crate::config;
use crate::models::{
    ApplyRequest, Certificate, CoordinatorReport, Initiative, InitiativeFilter, Participation,
    ReviewDecision, ReviewRequest, Statistics, User,
};

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Backend client bound to one base URL
#[derive(Debug, Clone, PartialEq)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON body. The status code is not checked: error bodies simply
    /// fail to match the expected shape further down.
    async fn get_value(&self, path: &str) -> ApiResult<Value> {
        let response = Request::get(&self.url(path)).send().await?;
        if !response.ok() {
            log::warn!("GET {} answered HTTP {}", path, response.status());
        }
        Ok(response.json::<Value>().await?)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str, field: &str) -> ApiResult<Vec<T>> {
        let value = self.get_value(path).await?;
        Ok(payload::list_field(&value, field))
    }

    async fn get_object<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let value = self.get_value(path).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Send a JSON body; any non-2xx answer becomes `ApiError::Rejected`
    async fn send_json<B: Serialize>(&self, builder: RequestBuilder, path: &str, body: &B) -> ApiResult<()> {
        let response = builder.json(body)?.send().await?;
        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let detail = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| payload::error_detail(&body));
        log::warn!("{} rejected with HTTP {} ({:?})", path, status, detail);
        Err(ApiError::Rejected { status, detail })
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(config::api_base_url())
    }
}

#[async_trait(?Send)]
impl VolunteerApi for HttpApi {
    async fn list_initiatives(&self, filter: &InitiativeFilter) -> ApiResult<Vec<Initiative>> {
        self.get_list(&routes::initiatives(filter), "initiatives").await
    }

    async fn get_statistics(&self) -> ApiResult<Statistics> {
        self.get_object(routes::statistics()).await
    }

    async fn list_participations(&self, volunteer_id: u32) -> ApiResult<Vec<Participation>> {
        self.get_list(&routes::volunteer_participations(volunteer_id), "participations").await
    }

    async fn list_certificates(&self, volunteer_id: u32) -> ApiResult<Vec<Certificate>> {
        self.get_list(&routes::volunteer_certificates(volunteer_id), "certificates").await
    }

    async fn list_organization_initiatives(&self, organization_id: u32) -> ApiResult<Vec<Initiative>> {
        self.get_list(&routes::organization_initiatives(organization_id), "initiatives").await
    }

    async fn list_pending_applications(&self, organization_id: u32) -> ApiResult<Vec<Participation>> {
        self.get_list(&routes::organization_pending_applications(organization_id), "applications").await
    }

    async fn list_students(&self, coordinator_id: u32) -> ApiResult<Vec<User>> {
        self.get_list(&routes::coordinator_students(coordinator_id), "students").await
    }

    async fn get_coordinator_report(&self, coordinator_id: u32) -> ApiResult<CoordinatorReport> {
        self.get_object(&routes::coordinator_report(coordinator_id)).await
    }

    async fn apply(&self, request: &ApplyRequest<'_>) -> ApiResult<()> {
        let path = routes::apply(request.initiative_id);
        self.send_json(Request::post(&self.url(&path)), &path, request).await
    }

    async fn review_participation(&self, participation_id: u32, decision: ReviewDecision) -> ApiResult<()> {
        let path = routes::review_participation(participation_id);
        let body = ReviewRequest { status: decision };
        self.send_json(Request::put(&self.url(&path)), &path, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let api = HttpApi::new("http://localhost:8000");
        assert_eq!(api.url("/statistics"), "http://localhost:8000/statistics");
        assert_eq!(
            api.url(&routes::coordinator_report(18)),
            "http://localhost:8000/coordinators/18/reports"
        );
    }

    #[test]
    fn test_default_uses_configured_base() {
        assert_eq!(HttpApi::default().base_url(), config::api_base_url());
    }
}

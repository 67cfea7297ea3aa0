//! Recording fake of `VolunteerApi` for unit tests.

use std::cell::RefCell;

use async_trait::async_trait;

use super::{ApiError, ApiResult, VolunteerApi};
use crate::models::{
    ApplyRequest, Certificate, CoordinatorReport, Initiative, InitiativeFilter, Participation,
    ReviewDecision, Statistics, User,
};

/// Canned responses plus a log of every call made.
///
/// A `None` response makes the matching call fail with a network error.
#[derive(Default)]
pub struct FakeApi {
    pub initiatives: Option<Vec<Initiative>>,
    pub statistics: Option<Statistics>,
    pub participations: Option<Vec<Participation>>,
    pub certificates: Option<Vec<Certificate>>,
    pub organization_initiatives: Option<Vec<Initiative>>,
    pub applications: Option<Vec<Participation>>,
    pub students: Option<Vec<User>>,
    pub report: Option<CoordinatorReport>,
    /// Error returned by the write endpoints; `None` means success
    pub write_error: Option<ApiError>,
    pub call_log: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.call_log.borrow().clone()
    }

    /// Number of calls whose log entry starts with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.call_log.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) {
        self.call_log.borrow_mut().push(call);
    }

    fn respond<T: Clone>(canned: &Option<T>) -> ApiResult<T> {
        canned
            .clone()
            .ok_or_else(|| ApiError::Network("connection refused".to_string()))
    }

    fn write_result(&self) -> ApiResult<()> {
        match &self.write_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl VolunteerApi for FakeApi {
    async fn list_initiatives(&self, filter: &InitiativeFilter) -> ApiResult<Vec<Initiative>> {
        self.record(format!("initiatives {}|{}", filter.category, filter.location));
        Self::respond(&self.initiatives)
    }

    async fn get_statistics(&self) -> ApiResult<Statistics> {
        self.record("statistics".to_string());
        Self::respond(&self.statistics)
    }

    async fn list_participations(&self, volunteer_id: u32) -> ApiResult<Vec<Participation>> {
        self.record(format!("participations {}", volunteer_id));
        Self::respond(&self.participations)
    }

    async fn list_certificates(&self, volunteer_id: u32) -> ApiResult<Vec<Certificate>> {
        self.record(format!("certificates {}", volunteer_id));
        Self::respond(&self.certificates)
    }

    async fn list_organization_initiatives(&self, organization_id: u32) -> ApiResult<Vec<Initiative>> {
        self.record(format!("organization_initiatives {}", organization_id));
        Self::respond(&self.organization_initiatives)
    }

    async fn list_pending_applications(&self, organization_id: u32) -> ApiResult<Vec<Participation>> {
        self.record(format!("applications {}", organization_id));
        Self::respond(&self.applications)
    }

    async fn list_students(&self, coordinator_id: u32) -> ApiResult<Vec<User>> {
        self.record(format!("students {}", coordinator_id));
        Self::respond(&self.students)
    }

    async fn get_coordinator_report(&self, coordinator_id: u32) -> ApiResult<CoordinatorReport> {
        self.record(format!("report {}", coordinator_id));
        Self::respond(&self.report)
    }

    async fn apply(&self, request: &ApplyRequest<'_>) -> ApiResult<()> {
        self.record(format!("apply {} {}", request.volunteer_id, request.initiative_id));
        self.write_result()
    }

    async fn review_participation(&self, participation_id: u32, decision: ReviewDecision) -> ApiResult<()> {
        self.record(format!("review {} {:?}", participation_id, decision));
        self.write_result()
    }
}

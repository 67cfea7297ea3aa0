//! Write Actions
//!
//! Apply and review. A successful write reloads the acting user's data
//! exactly once; a failed one reloads nothing. Either way the caller gets a
//! notice to show the user.

use crate::api::{ApiError, VolunteerApi};
use crate::config::APPLICATION_MESSAGE;
use crate::loaders;
use crate::models::{ApplyRequest, OrganizationData, ReviewDecision, VolunteerData};

const APPLY_SUCCESS: &str = "Zgłoszenie wysłane pomyślnie!";
const APPLY_REJECTED: &str = "Błąd podczas zgłaszania";
const APPLY_UNREACHABLE: &str = "Błąd podczas zgłaszania się do inicjatywy";
const REVIEW_FAILED: &str = "Błąd podczas aktualizacji statusu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-facing result of a write
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    /// Backend detail when present, otherwise `fallback`
    fn from_error(err: &ApiError, fallback: &str) -> Self {
        Self::error(err.detail().unwrap_or(fallback))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome<T> {
    pub notice: Notice,
    /// Fresh data for the acting user, present only after a successful write
    pub reloaded: Option<T>,
}

/// Apply the volunteer to an initiative, then reload the volunteer's data
pub async fn apply_to_initiative<A: VolunteerApi + ?Sized>(
    api: &A,
    volunteer_id: u32,
    initiative_id: u32,
) -> ActionOutcome<VolunteerData> {
    let request = ApplyRequest {
        volunteer_id,
        initiative_id,
        message: APPLICATION_MESSAGE,
    };

    match api.apply(&request).await {
        Ok(()) => {
            log::info!("Volunteer {} applied to initiative {}", volunteer_id, initiative_id);
            ActionOutcome {
                notice: Notice::success(APPLY_SUCCESS),
                reloaded: Some(loaders::load_volunteer_data(api, volunteer_id).await),
            }
        }
        Err(e) => {
            log::error!("Applying to initiative {} failed: {}", initiative_id, e);
            let fallback = match &e {
                ApiError::Rejected { .. } => APPLY_REJECTED,
                _ => APPLY_UNREACHABLE,
            };
            ActionOutcome {
                notice: Notice::from_error(&e, fallback),
                reloaded: None,
            }
        }
    }
}

/// Approve or reject a pending application, then reload the organization's data
pub async fn review_application<A: VolunteerApi + ?Sized>(
    api: &A,
    organization_id: u32,
    participation_id: u32,
    decision: ReviewDecision,
) -> ActionOutcome<OrganizationData> {
    match api.review_participation(participation_id, decision).await {
        Ok(()) => {
            log::info!("Participation {} marked {:?}", participation_id, decision);
            ActionOutcome {
                notice: Notice::success(review_success_message(decision)),
                reloaded: Some(loaders::load_organization_data(api, organization_id).await),
            }
        }
        Err(e) => {
            log::error!("Reviewing participation {} failed: {}", participation_id, e);
            ActionOutcome {
                notice: Notice::from_error(&e, REVIEW_FAILED),
                reloaded: None,
            }
        }
    }
}

fn review_success_message(decision: ReviewDecision) -> &'static str {
    match decision {
        ReviewDecision::Approved => "Zgłoszenie zaakceptowane!",
        ReviewDecision::Rejected => "Zgłoszenie odrzucone!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::models::{Initiative, Participation};

    fn volunteer_api() -> FakeApi {
        FakeApi {
            participations: Some(vec![Participation { id: 1, status: "pending".to_string(), ..Default::default() }]),
            certificates: Some(Vec::new()),
            ..Default::default()
        }
    }

    fn organization_api() -> FakeApi {
        FakeApi {
            organization_initiatives: Some(vec![Initiative { id: 3, ..Default::default() }]),
            applications: Some(Vec::new()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_apply_success_reloads_participations_once() {
        let api = volunteer_api();

        let outcome = apply_to_initiative(&api, 1, 7).await;

        assert_eq!(outcome.notice, Notice::success(APPLY_SUCCESS));
        assert_eq!(outcome.reloaded.map(|d| d.participations.len()), Some(1));
        assert_eq!(
            api.calls(),
            vec!["apply 1 7".to_string(), "participations 1".to_string(), "certificates 1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_apply_rejected_uses_backend_detail() {
        let api = FakeApi {
            write_error: Some(ApiError::Rejected {
                status: 400,
                detail: Some("Brak wolnych miejsc".to_string()),
            }),
            ..volunteer_api()
        };

        let outcome = apply_to_initiative(&api, 1, 7).await;

        assert_eq!(outcome.notice, Notice::error("Brak wolnych miejsc"));
        assert!(outcome.reloaded.is_none());
        assert_eq!(api.count("participations"), 0);
    }

    #[tokio::test]
    async fn test_apply_rejected_without_detail() {
        let api = FakeApi {
            write_error: Some(ApiError::Rejected { status: 500, detail: None }),
            ..volunteer_api()
        };

        let outcome = apply_to_initiative(&api, 1, 7).await;

        assert_eq!(outcome.notice, Notice::error(APPLY_REJECTED));
    }

    #[tokio::test]
    async fn test_apply_network_failure() {
        let api = FakeApi {
            write_error: Some(ApiError::Network("offline".to_string())),
            ..volunteer_api()
        };

        let outcome = apply_to_initiative(&api, 1, 7).await;

        assert_eq!(outcome.notice, Notice::error(APPLY_UNREACHABLE));
        assert_eq!(api.calls(), vec!["apply 1 7".to_string()]);
    }

    #[tokio::test]
    async fn test_review_success_reloads_organization_once() {
        let api = organization_api();

        let outcome = review_application(&api, 11, 42, ReviewDecision::Approved).await;

        assert_eq!(outcome.notice, Notice::success("Zgłoszenie zaakceptowane!"));
        assert_eq!(outcome.reloaded.map(|d| d.initiatives.len()), Some(1));
        assert_eq!(api.count("review 42 Approved"), 1);
        assert_eq!(api.count("organization_initiatives 11"), 1);
        assert_eq!(api.count("applications 11"), 1);
        assert_eq!(api.count("participations"), 0);
    }

    #[tokio::test]
    async fn test_review_reject_message() {
        let api = organization_api();

        let outcome = review_application(&api, 11, 42, ReviewDecision::Rejected).await;

        assert_eq!(outcome.notice.message, "Zgłoszenie odrzucone!");
        assert_eq!(outcome.notice.kind, NoticeKind::Success);
    }

    #[tokio::test]
    async fn test_review_failure_does_not_reload() {
        let api = FakeApi {
            write_error: Some(ApiError::Rejected { status: 404, detail: None }),
            ..organization_api()
        };

        let outcome = review_application(&api, 11, 42, ReviewDecision::Approved).await;

        assert_eq!(outcome.notice, Notice::error(REVIEW_FAILED));
        assert!(outcome.reloaded.is_none());
        assert_eq!(api.calls(), vec!["review 42 Approved".to_string()]);
    }
}

//! Frontend Models
//!
//! Data structures matching backend API payloads. Fields that older
//! payloads may omit default instead of failing deserialization.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field (SQL aggregates over no rows)
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Volunteering opportunity posted by an organization
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Initiative {
    pub id: u32,
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub category: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub hours_required: f64,
    pub spots_available: u32,
    pub requirements: Option<String>,
    /// active / completed / cancelled (backend-owned)
    pub status: String,
    pub organization_id: u32,
    pub organization_name: Option<String>,
    pub organization_email: Option<String>,
    pub phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub applications_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub pending_applications: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub approved_volunteers: u32,
}

/// Role discriminator of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Volunteer,
    Organization,
    Coordinator,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    pub phone: Option<String>,
    pub age_category: Option<String>,
    pub school_id: Option<u32>,
    pub school_name: Option<String>,
    pub created_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_participations: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_hours: f64,
}

/// A volunteer's application to (and engagement in) an initiative
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Participation {
    pub id: u32,
    pub volunteer_id: u32,
    pub initiative_id: u32,
    /// pending / approved / rejected / completed
    pub status: String,
    pub applied_date: String,
    pub approved_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub hours_completed: f64,
    pub message: Option<String>,
    pub initiative_title: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub organization_name: Option<String>,
    pub volunteer_name: Option<String>,
    pub volunteer_email: Option<String>,
    pub volunteer_phone: Option<String>,
}

impl Participation {
    /// Initiative title, or a numbered placeholder when the backend did not join it in
    pub fn display_title(&self) -> String {
        match self.initiative_title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("Inicjatywa #{}", self.initiative_id),
        }
    }
}

/// Backend-issued proof of completed hours
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    pub id: u32,
    pub participation_id: u32,
    pub volunteer_id: u32,
    pub organization_id: u32,
    pub issued_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hours_completed: f64,
    pub certificate_data: Option<String>,
    pub initiative_title: Option<String>,
    pub organization_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryCount {
    pub category: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsOverview {
    pub volunteers: u32,
    pub organizations: u32,
    pub coordinators: u32,
    pub active_initiatives: u32,
    pub completed_participations: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentInitiative {
    pub title: String,
    pub category: String,
    pub start_date: String,
    pub organization: String,
}

/// Platform-wide aggregates from `GET /statistics`
///
/// `overview` is required so an error body never reads as all-zero statistics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub overview: StatisticsOverview,
    #[serde(default)]
    pub categories: Vec<CategoryCount>,
    #[serde(default)]
    pub recent_initiatives: Vec<RecentInitiative>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportStatistics {
    pub total_students: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_participations: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_hours: f64,
    pub total_certificates: u32,
}

/// School-level aggregates over a coordinator's students.
///
/// `school_id` and `statistics` are required: a body without them (an error
/// payload, for instance) is not a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinatorReport {
    pub school_id: u32,
    pub statistics: ReportStatistics,
    #[serde(default)]
    pub popular_categories: Vec<CategoryCount>,
    #[serde(default)]
    pub generated_at: String,
}

impl CoordinatorReport {
    /// Whole hours per student, 0 for a school without students
    pub fn average_hours_per_student(&self) -> u32 {
        let stats = &self.statistics;
        if stats.total_students == 0 {
            return 0;
        }
        (stats.total_hours / f64::from(stats.total_students)).round() as u32
    }
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplyRequest<'a> {
    pub volunteer_id: u32,
    pub initiative_id: u32,
    pub message: &'a str,
}

/// Organization's answer to a pending application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRequest {
    pub status: ReviewDecision,
}

// ========================
// Per-View Data
// ========================

/// Initiative list filter; empty strings mean "any"
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InitiativeFilter {
    pub category: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VolunteerData {
    pub participations: Vec<Participation>,
    pub certificates: Vec<Certificate>,
}

impl VolunteerData {
    pub fn total_hours(&self) -> f64 {
        self.participations.iter().map(|p| p.hours_completed).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrganizationData {
    pub initiatives: Vec<Initiative>,
    pub pending_applications: Vec<Participation>,
}

impl OrganizationData {
    /// Volunteers approved across all of the organization's initiatives
    pub fn active_volunteers(&self) -> u32 {
        self.initiatives.iter().map(|i| i.approved_volunteers).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinatorData {
    pub students: Vec<User>,
    pub report: Option<CoordinatorReport>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initiative_tolerates_missing_optional_fields() {
        let initiative: Initiative = serde_json::from_value(json!({
            "id": 7,
            "title": "Sprzątanie Wisły",
            "category": "Ekologia",
            "location": "Kazimierz",
            "start_date": "2024-05-01",
            "hours_required": 4,
            "spots_available": 10,
            "status": "active",
            "organization_id": 11
        }))
        .unwrap();

        assert_eq!(initiative.id, 7);
        assert_eq!(initiative.hours_required, 4.0);
        assert!(initiative.organization_name.is_none());
        assert_eq!(initiative.approved_volunteers, 0);
        assert_eq!(initiative.description, "");
    }

    #[test]
    fn test_unknown_user_type_does_not_fail() {
        let user: User = serde_json::from_value(json!({
            "id": 3, "name": "Ala", "email": "ala@example.org", "user_type": "admin"
        }))
        .unwrap();
        assert_eq!(user.user_type, UserType::Unknown);

        let user: User = serde_json::from_value(json!({
            "id": 4, "name": "Ola", "email": "ola@example.org", "user_type": "coordinator"
        }))
        .unwrap();
        assert_eq!(user.user_type, UserType::Coordinator);
    }

    #[test]
    fn test_null_aggregates_become_zero() {
        let stats: Statistics = serde_json::from_value(json!({
            "overview": { "volunteers": 12, "organizations": 3, "total_hours": null },
            "categories": []
        }))
        .unwrap();
        assert_eq!(stats.overview.volunteers, 12);
        assert_eq!(stats.overview.total_hours, 0.0);
        assert!(stats.recent_initiatives.is_empty());

        let report: CoordinatorReport = serde_json::from_value(json!({
            "school_id": 1,
            "statistics": { "total_students": 0, "total_participations": null, "total_hours": null, "total_certificates": 0 },
            "generated_at": "2024-06-01T12:00:00"
        }))
        .unwrap();
        assert_eq!(report.statistics.total_hours, 0.0);
        assert!(report.popular_categories.is_empty());
    }

    #[test]
    fn test_report_requires_statistics() {
        let error_body = json!({ "detail": "Coordinator not found" });
        assert!(serde_json::from_value::<CoordinatorReport>(error_body).is_err());
    }

    #[test]
    fn test_statistics_require_overview() {
        let error_body = json!({ "detail": "Internal Server Error" });
        assert!(serde_json::from_value::<Statistics>(error_body).is_err());

        let minimal: Statistics = serde_json::from_value(json!({ "overview": {} })).unwrap();
        assert_eq!(minimal.overview, StatisticsOverview::default());
        assert!(minimal.categories.is_empty());
    }

    #[test]
    fn test_average_hours_per_student() {
        let mut report = CoordinatorReport {
            school_id: 2,
            statistics: ReportStatistics {
                total_students: 4,
                total_participations: 9,
                total_hours: 42.0,
                total_certificates: 3,
            },
            popular_categories: Vec::new(),
            generated_at: String::new(),
        };
        // 10.5 rounds half away from zero
        assert_eq!(report.average_hours_per_student(), 11);

        report.statistics.total_students = 0;
        assert_eq!(report.average_hours_per_student(), 0);
    }

    #[test]
    fn test_participation_display_title() {
        let mut participation = Participation {
            initiative_id: 5,
            ..Default::default()
        };
        assert_eq!(participation.display_title(), "Inicjatywa #5");

        participation.initiative_title = Some("Kuchnia dla potrzebujących".to_string());
        assert_eq!(participation.display_title(), "Kuchnia dla potrzebujących");
    }

    #[test]
    fn test_view_aggregates() {
        let volunteer = VolunteerData {
            participations: vec![
                Participation { hours_completed: 3.5, ..Default::default() },
                Participation { hours_completed: 6.0, ..Default::default() },
            ],
            certificates: Vec::new(),
        };
        assert_eq!(volunteer.total_hours(), 9.5);

        let organization = OrganizationData {
            initiatives: vec![
                Initiative { approved_volunteers: 2, ..Default::default() },
                Initiative { approved_volunteers: 5, ..Default::default() },
            ],
            pending_applications: Vec::new(),
        };
        assert_eq!(organization.active_volunteers(), 7);
    }

    #[test]
    fn test_request_bodies_serialize_as_backend_expects() {
        let apply = ApplyRequest { volunteer_id: 1, initiative_id: 9, message: "hej" };
        assert_eq!(
            serde_json::to_value(&apply).unwrap(),
            json!({ "volunteer_id": 1, "initiative_id": 9, "message": "hej" })
        );

        let review = ReviewRequest { status: ReviewDecision::Rejected };
        assert_eq!(serde_json::to_value(&review).unwrap(), json!({ "status": "rejected" }));
    }
}

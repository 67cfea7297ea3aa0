//! API Routes
//!
//! Paths are relative to the configured base URL.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::InitiativeFilter;

/// Same reserved set as JavaScript's `encodeURIComponent`
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `/initiatives` with only the non-empty filters as query parameters
pub fn initiatives(filter: &InitiativeFilter) -> String {
    let params: Vec<String> = [("category", &filter.category), ("location", &filter.location)]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_COMPONENT)))
        .collect();

    if params.is_empty() {
        "/initiatives".to_string()
    } else {
        format!("/initiatives?{}", params.join("&"))
    }
}

pub fn statistics() -> &'static str {
    "/statistics"
}

pub fn volunteer_participations(volunteer_id: u32) -> String {
    format!("/volunteers/{}/participations", volunteer_id)
}

pub fn volunteer_certificates(volunteer_id: u32) -> String {
    format!("/volunteers/{}/certificates", volunteer_id)
}

pub fn organization_initiatives(organization_id: u32) -> String {
    format!("/organizations/{}/initiatives", organization_id)
}

pub fn organization_pending_applications(organization_id: u32) -> String {
    format!("/organizations/{}/applications?status=pending", organization_id)
}

pub fn coordinator_students(coordinator_id: u32) -> String {
    format!("/coordinators/{}/students", coordinator_id)
}

pub fn coordinator_report(coordinator_id: u32) -> String {
    format!("/coordinators/{}/reports", coordinator_id)
}

pub fn apply(initiative_id: u32) -> String {
    format!("/initiatives/{}/apply", initiative_id)
}

pub fn review_participation(participation_id: u32) -> String {
    format!("/participations/{}/approve", participation_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(category: &str, location: &str) -> InitiativeFilter {
        InitiativeFilter {
            category: category.to_string(),
            location: location.to_string(),
        }
    }

    #[test]
    fn test_initiatives_without_filters() {
        assert_eq!(initiatives(&InitiativeFilter::default()), "/initiatives");
    }

    #[test]
    fn test_initiatives_encodes_like_encode_uri_component() {
        assert_eq!(
            initiatives(&filter("Pomoc społeczna", "")),
            "/initiatives?category=Pomoc%20spo%C5%82eczna"
        );
        assert_eq!(
            initiatives(&filter("", "Prądnik Biały")),
            "/initiatives?location=Pr%C4%85dnik%20Bia%C5%82y"
        );
        assert_eq!(
            initiatives(&filter("Sport", "Nowa Huta")),
            "/initiatives?category=Sport&location=Nowa%20Huta"
        );
        assert_eq!(initiatives(&filter("a&b=c", "")), "/initiatives?category=a%26b%3Dc");
    }

    #[test]
    fn test_entity_routes() {
        assert_eq!(volunteer_participations(1), "/volunteers/1/participations");
        assert_eq!(volunteer_certificates(1), "/volunteers/1/certificates");
        assert_eq!(organization_initiatives(11), "/organizations/11/initiatives");
        assert_eq!(
            organization_pending_applications(11),
            "/organizations/11/applications?status=pending"
        );
        assert_eq!(coordinator_students(18), "/coordinators/18/students");
        assert_eq!(coordinator_report(18), "/coordinators/18/reports");
        assert_eq!(apply(3), "/initiatives/3/apply");
        assert_eq!(review_participation(42), "/participations/42/approve");
        assert_eq!(statistics(), "/statistics");
    }
}

//! Data Loaders
//!
//! One function per view. Loaders never fail: errors are logged and the
//! affected piece of state falls back to empty / `None`. Paired requests
//! run concurrently and each half degrades on its own.

use futures::join;

use crate::api::{ApiResult, VolunteerApi};
use crate::models::{
    CoordinatorData, Initiative, InitiativeFilter, OrganizationData, Statistics, VolunteerData,
};

fn or_empty<T: Default>(result: ApiResult<T>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        log::error!("Failed to load {}: {}", what, e);
        T::default()
    })
}

fn or_none<T>(result: ApiResult<T>, what: &str) -> Option<T> {
    result.map_err(|e| log::error!("Failed to load {}: {}", what, e)).ok()
}

pub async fn load_initiatives<A: VolunteerApi + ?Sized>(api: &A, filter: &InitiativeFilter) -> Vec<Initiative> {
    let initiatives = or_empty(api.list_initiatives(filter).await, "initiatives");
    log::info!("Loaded {} initiatives", initiatives.len());
    initiatives
}

pub async fn load_statistics<A: VolunteerApi + ?Sized>(api: &A) -> Option<Statistics> {
    or_none(api.get_statistics().await, "statistics")
}

pub async fn load_volunteer_data<A: VolunteerApi + ?Sized>(api: &A, volunteer_id: u32) -> VolunteerData {
    let (participations, certificates) = join!(
        api.list_participations(volunteer_id),
        api.list_certificates(volunteer_id)
    );
    VolunteerData {
        participations: or_empty(participations, "participations"),
        certificates: or_empty(certificates, "certificates"),
    }
}

pub async fn load_organization_data<A: VolunteerApi + ?Sized>(api: &A, organization_id: u32) -> OrganizationData {
    let (initiatives, applications) = join!(
        api.list_organization_initiatives(organization_id),
        api.list_pending_applications(organization_id)
    );
    OrganizationData {
        initiatives: or_empty(initiatives, "organization initiatives"),
        pending_applications: or_empty(applications, "pending applications"),
    }
}

pub async fn load_coordinator_data<A: VolunteerApi + ?Sized>(api: &A, coordinator_id: u32) -> CoordinatorData {
    let (students, report) = join!(
        api.list_students(coordinator_id),
        api.get_coordinator_report(coordinator_id)
    );
    CoordinatorData {
        students: or_empty(students, "students"),
        report: or_none(report, "coordinator report"),
    }
}

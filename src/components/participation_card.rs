//! Participation Card Component

use leptos::prelude::*;

use crate::components::StatusBadge;
use crate::format::{format_date, format_hours};
use crate::models::Participation;

/// One of the volunteer's own participations
#[component]
pub fn ParticipationCard(participation: Participation) -> impl IntoView {
    let title = participation.display_title();
    let organization = participation.organization_name.unwrap_or_default();

    view! {
        <div class="border rounded-lg p-3">
            <div class="flex justify-between items-start mb-2">
                <div>
                    <div class="font-medium">{title}</div>
                    <div class="text-xs text-gray-500">{organization}</div>
                </div>
                <StatusBadge status=participation.status />
            </div>
            <div class="text-sm text-gray-600">
                <div>{format!("Data zgłoszenia: {}", format_date(&participation.applied_date))}</div>
                <div>{format!("Ukończone godziny: {}", format_hours(participation.hours_completed))}</div>
            </div>
        </div>
    }
}

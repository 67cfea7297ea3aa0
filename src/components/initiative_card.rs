//! Initiative Card Component
//!
//! Full initiative row for the volunteer and organization dashboards.

use leptos::prelude::*;

use crate::components::{CategoryPill, StatusBadge};
use crate::format::{format_date, format_hours};
use crate::models::Initiative;

/// Initiative details.
///
/// With `on_apply` the card gets an apply button (volunteer view); with
/// `show_counters` it lists pending/approved application counts
/// (organization view).
#[component]
pub fn InitiativeCard(
    initiative: Initiative,
    #[prop(optional)] on_apply: Option<Callback<u32>>,
    #[prop(optional)] show_counters: bool,
) -> impl IntoView {
    let id = initiative.id;
    let counters = show_counters.then(|| {
        let pending = format!("Oczekujących: {}", initiative.pending_applications);
        let approved = format!("Zaakceptowanych: {}", initiative.approved_volunteers);
        view! {
            <div class="flex gap-4 mt-2 text-sm">
                <span class="text-yellow-600 font-medium">{pending}</span>
                <span class="text-green-600 font-medium">{approved}</span>
            </div>
        }
    });

    view! {
        <div class="border rounded-lg p-4 hover:shadow-md transition">
            <div class="flex justify-between items-start">
                <div class="flex-1">
                    <h3 class="font-bold text-lg mb-1">{initiative.title}</h3>
                    <p class="text-gray-600 text-sm mb-2">{initiative.description}</p>
                    <div class="flex flex-wrap gap-2 mb-2">
                        <CategoryPill category=initiative.category />
                        <StatusBadge status=initiative.status />
                    </div>
                    <div class="flex flex-wrap gap-4 text-sm text-gray-600">
                        <span>"📍 "{initiative.location}</span>
                        <span>"📅 "{format_date(&initiative.start_date)}</span>
                        <span>"⏱ "{format_hours(initiative.hours_required)}</span>
                        <span>"👥 "{format!("{} miejsc", initiative.spots_available)}</span>
                    </div>
                    {counters}
                </div>
                {on_apply.map(|on_apply| view! {
                    <button
                        class="ml-4 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 whitespace-nowrap"
                        on:click=move |_| on_apply.run(id)
                    >
                        "Zgłoś się ›"
                    </button>
                })}
            </div>
        </div>
    }
}

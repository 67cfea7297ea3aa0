//! Organization View
//!
//! Pending applications to review and the organization's own initiatives.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::browser;
use crate::components::{ApplicationCard, EmptyState, InitiativeCard, StatCard, ViewHeader};
use crate::context::use_app_context;
use crate::loaders;
use crate::models::ReviewDecision;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn OrganizationView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    Effect::new(move |_| {
        let organization_id = store.selected_user_id().get();
        let api = ctx.api();
        log::debug!("Loading organization {}", organization_id);
        spawn_local(async move {
            let data = loaders::load_organization_data(&api, organization_id).await;
            store.organization().set(data);
        });
    });

    let on_review = Callback::new(move |(participation_id, decision): (u32, ReviewDecision)| {
        let api = ctx.api();
        let organization_id = store.selected_user_id().get_untracked();
        spawn_local(async move {
            let outcome = actions::review_application(&api, organization_id, participation_id, decision).await;
            if let Some(data) = outcome.reloaded {
                store.organization().set(data);
            }
            browser::alert(&outcome.notice);
        });
    });

    let initiative_count = Signal::derive(move || store.organization().with(|d| d.initiatives.len().to_string()));
    let pending_count =
        Signal::derive(move || store.organization().with(|d| d.pending_applications.len().to_string()));
    let active_volunteers = Signal::derive(move || store.organization().with(|d| d.active_volunteers().to_string()));

    let applications = move || {
        let applications = store.organization().get().pending_applications;
        if applications.is_empty() {
            return view! { <EmptyState message="Brak oczekujących zgłoszeń" /> }.into_any();
        }
        applications
            .into_iter()
            .map(|application| view! { <ApplicationCard application on_review /> })
            .collect_view()
            .into_any()
    };

    let initiatives = move || {
        let initiatives = store.organization().get().initiatives;
        if initiatives.is_empty() {
            return view! { <EmptyState message="Brak inicjatyw" /> }.into_any();
        }
        initiatives
            .into_iter()
            .map(|initiative| view! { <InitiativeCard initiative show_counters=true /> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <ViewHeader title="Panel Organizacji" />

            <div class="max-w-7xl mx-auto px-4 py-8">
                <div class="grid md:grid-cols-3 gap-4 mb-8">
                    <StatCard label="Moje inicjatywy" value=initiative_count />
                    <StatCard label="Oczekujące zgłoszenia" value=pending_count accent="text-yellow-600" />
                    <StatCard label="Aktywni wolontariusze" value=active_volunteers accent="text-green-600" />
                </div>

                <div class="bg-white rounded-lg shadow p-6 mb-6">
                    <h2 class="text-xl font-bold mb-4">"Oczekujące zgłoszenia"</h2>
                    <div class="space-y-4">{applications}</div>
                </div>

                <div class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-xl font-bold mb-4">"Moje inicjatywy"</h2>
                    <div class="space-y-4">{initiatives}</div>
                </div>
            </div>
        </div>
    }
}

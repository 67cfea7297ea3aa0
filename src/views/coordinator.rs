//! Coordinator View
//!
//! School report and the student roster.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::{CategoryPill, EmptyState, StatCard, StudentTable, ViewHeader};
use crate::context::use_app_context;
use crate::format::{format_hours, format_timestamp};
use crate::loaders;
use crate::models::CoordinatorReport;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CoordinatorView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    Effect::new(move |_| {
        let coordinator_id = store.selected_user_id().get();
        let api = ctx.api();
        log::debug!("Loading coordinator {}", coordinator_id);
        spawn_local(async move {
            let data = loaders::load_coordinator_data(&api, coordinator_id).await;
            store.coordinator().set(data);
        });
    });

    let report = move || {
        store
            .coordinator()
            .get()
            .report
            .map(|report| view! { <ReportSection report /> })
    };

    let students = move || {
        let students = store.coordinator().get().students;
        if students.is_empty() {
            return view! { <EmptyState message="Brak uczniów" /> }.into_any();
        }
        view! { <StudentTable students /> }.into_any()
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <ViewHeader title="Panel Koordynatora" />

            <div class="max-w-7xl mx-auto px-4 py-8">
                {report}

                <div class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-xl font-bold mb-4">"Uczniowie"</h2>
                    {students}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ReportSection(report: CoordinatorReport) -> impl IntoView {
    let stats = report.statistics.clone();
    let average = format!("{}h", report.average_hours_per_student());
    let generated_at = format_timestamp(&report.generated_at);

    let categories = if report.popular_categories.is_empty() {
        view! { <EmptyState message="Brak danych" compact=true /> }.into_any()
    } else {
        report
            .popular_categories
            .into_iter()
            .map(|entry| {
                view! {
                    <div class="flex justify-between items-center">
                        <CategoryPill category=entry.category large=true />
                        <span class="font-bold">{entry.count}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="grid md:grid-cols-4 gap-4 mb-8">
            <StatCard label="Uczniowie" value=stats.total_students.to_string() />
            <StatCard label="Uczestnictwa" value=stats.total_participations.to_string() accent="text-green-600" />
            <StatCard label="Łączne godziny" value=format_hours(stats.total_hours) accent="text-purple-600" />
            <StatCard label="Zaświadczenia" value=stats.total_certificates.to_string() accent="text-orange-600" />
        </div>

        <div class="grid md:grid-cols-2 gap-6 mb-8">
            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-bold mb-4">"Popularne kategorie"</h2>
                <div class="space-y-3">{categories}</div>
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-bold mb-4">"Informacje o raporcie"</h2>
                <div class="space-y-3 text-sm">
                    <div class="flex justify-between">
                        <span class="text-gray-600">"ID szkoły:"</span>
                        <span class="font-medium">{report.school_id}</span>
                    </div>
                    <div class="flex justify-between">
                        <span class="text-gray-600">"Data wygenerowania:"</span>
                        <span class="font-medium">{generated_at}</span>
                    </div>
                    <div class="flex justify-between">
                        <span class="text-gray-600">"Średnio godzin na ucznia:"</span>
                        <span class="font-medium">{average}</span>
                    </div>
                </div>
                <button
                    class="mt-6 w-full px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
                    on:click=move |_| browser::print_page()
                >
                    "🖨 Drukuj raport"
                </button>
            </div>
        </div>
    }
}

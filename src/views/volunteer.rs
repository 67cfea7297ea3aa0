//! Volunteer View
//!
//! Own hours, participations and certificates, plus the filterable
//! initiative list with an apply button per initiative.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::browser;
use crate::components::{
    CertificateCard, EmptyState, FilterPanel, InitiativeCard, ParticipationCard, StatCard, ViewHeader,
};
use crate::context::use_app_context;
use crate::format::format_hours;
use crate::loaders;
use crate::store::{store_toggle_filters, use_app_store, AppStateStoreFields};

#[component]
pub fn VolunteerView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    Effect::new(move |_| {
        let volunteer_id = store.selected_user_id().get();
        let api = ctx.api();
        log::debug!("Loading volunteer {}", volunteer_id);
        spawn_local(async move {
            let data = loaders::load_volunteer_data(&api, volunteer_id).await;
            store.volunteer().set(data);
        });
    });

    let on_apply = Callback::new(move |initiative_id: u32| {
        let api = ctx.api();
        let volunteer_id = store.selected_user_id().get_untracked();
        spawn_local(async move {
            let outcome = actions::apply_to_initiative(&api, volunteer_id, initiative_id).await;
            if let Some(data) = outcome.reloaded {
                store.volunteer().set(data);
            }
            browser::alert(&outcome.notice);
        });
    });

    let total_hours = Signal::derive(move || store.volunteer().with(|d| format_hours(d.total_hours())));
    let participation_count = Signal::derive(move || store.volunteer().with(|d| d.participations.len().to_string()));
    let certificate_count = Signal::derive(move || store.volunteer().with(|d| d.certificates.len().to_string()));

    let initiatives = move || {
        let initiatives = store.initiatives().get();
        if initiatives.is_empty() {
            return view! { <EmptyState message="Brak inicjatyw do wyświetlenia" /> }.into_any();
        }
        initiatives
            .into_iter()
            .map(|initiative| view! { <InitiativeCard initiative on_apply /> })
            .collect_view()
            .into_any()
    };

    let participations = move || {
        let participations = store.volunteer().get().participations;
        if participations.is_empty() {
            return view! { <EmptyState message="Brak zgłoszeń" compact=true /> }.into_any();
        }
        participations
            .into_iter()
            .map(|participation| view! { <ParticipationCard participation /> })
            .collect_view()
            .into_any()
    };

    let certificates = move || {
        let certificates = store.volunteer().get().certificates;
        if certificates.is_empty() {
            return view! { <EmptyState message="Brak zaświadczeń" compact=true /> }.into_any();
        }
        certificates
            .into_iter()
            .map(|certificate| view! { <CertificateCard certificate /> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <ViewHeader title="Panel Wolontariusza" />

            <div class="max-w-7xl mx-auto px-4 py-8">
                <div class="grid md:grid-cols-3 gap-4 mb-8">
                    <StatCard label="Przepracowane godziny" value=total_hours />
                    <StatCard label="Uczestnictwa" value=participation_count accent="text-green-600" />
                    <StatCard label="Zaświadczenia" value=certificate_count accent="text-purple-600" />
                </div>

                <div class="grid lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2">
                        <div class="bg-white rounded-lg shadow p-6">
                            <div class="flex justify-between items-center mb-4">
                                <h2 class="text-xl font-bold">"Dostępne inicjatywy"</h2>
                                <button
                                    class="flex items-center gap-2 px-4 py-2 bg-gray-100 rounded-lg hover:bg-gray-200"
                                    on:click=move |_| store_toggle_filters(&store)
                                >
                                    "⚙ Filtry"
                                </button>
                            </div>

                            <Show when=move || store.show_filters().get()>
                                <FilterPanel />
                            </Show>

                            <div class="space-y-4">{initiatives}</div>
                        </div>
                    </div>

                    <div class="space-y-6">
                        <div class="bg-white rounded-lg shadow p-6">
                            <h2 class="text-xl font-bold mb-4">"Moje zgłoszenia"</h2>
                            <div class="space-y-3">{participations}</div>
                        </div>

                        <div class="bg-white rounded-lg shadow p-6">
                            <h2 class="text-xl font-bold mb-4">"Moje zaświadczenia"</h2>
                            <div class="space-y-3">{certificates}</div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

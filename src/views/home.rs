//! Home View
//!
//! Platform statistics, role entry points and a preview of open initiatives.

use leptos::prelude::*;

use crate::components::{CategoryPill, EmptyState, StatCard};
use crate::config::HOME_PREVIEW_COUNT;
use crate::context::use_app_context;
use crate::format::format_hours;
use crate::models::Initiative;
use crate::store::{store_navigate, use_app_store, AppStateStoreFields, View};

/// (view, icon, title, description, accent classes)
const ROLE_CARDS: &[(View, &str, &str, &str, &str)] = &[
    (
        View::Volunteer,
        "🙋",
        "Wolontariusz",
        "Przeglądaj inicjatywy i zgłaszaj się do akcji wolontariackich",
        "border-blue-200 hover:border-blue-400",
    ),
    (
        View::Organization,
        "🏢",
        "Organizacja",
        "Twórz inicjatywy i zarządzaj zgłoszeniami wolontariuszy",
        "border-green-200 hover:border-green-400",
    ),
    (
        View::Coordinator,
        "🎓",
        "Koordynator",
        "Monitoruj uczniów i generuj raporty szkolne",
        "border-purple-200 hover:border-purple-400",
    ),
];

#[component]
pub fn HomeView() -> impl IntoView {
    let store = use_app_store();
    let api_url = use_app_context().api().base_url().to_string();

    let stats_cards = move || {
        store.statistics().get().map(|stats| {
            let overview = stats.overview;
            view! {
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-12">
                    <StatCard label="Wolontariusze" value=overview.volunteers.to_string() />
                    <StatCard
                        label="Organizacje"
                        value=overview.organizations.to_string()
                        accent="text-green-600"
                    />
                    <StatCard
                        label="Aktywne inicjatywy"
                        value=overview.active_initiatives.to_string()
                        accent="text-purple-600"
                    />
                    <StatCard
                        label="Przepracowane godziny"
                        value=format_hours(overview.total_hours)
                        accent="text-orange-600"
                    />
                </div>
            }
        })
    };

    let role_cards = ROLE_CARDS
        .iter()
        .map(|&(view, icon, title, description, accent)| {
            view! {
                <button
                    class=format!("bg-white rounded-xl shadow p-6 text-left border-2 transition {}", accent)
                    on:click=move |_| store_navigate(&store, view)
                >
                    <div class="text-4xl mb-3">{icon}</div>
                    <h3 class="text-xl font-bold mb-2">{title}</h3>
                    <p class="text-gray-600 text-sm">{description}</p>
                </button>
            }
        })
        .collect_view();

    let preview = move || {
        let initiatives = store.initiatives().get();
        if initiatives.is_empty() {
            view! {
                <EmptyState
                    message="Brak dostępnych inicjatyw lub trwa ładowanie danych..."
                    hint=format!("Upewnij się, że backend działa na {}", api_url)
                />
            }
            .into_any()
        } else {
            view! {
                <div class="grid md:grid-cols-2 gap-4">
                    {initiatives
                        .into_iter()
                        .take(HOME_PREVIEW_COUNT)
                        .map(|initiative| view! { <PreviewCard initiative /> })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-purple-50">
            <div class="max-w-7xl mx-auto px-4 py-12">
                <div class="text-center mb-12">
                    <h1 class="text-5xl font-bold text-gray-900 mb-4">"Krakowskie Cyfrowe Centrum Wolontariatu"</h1>
                    <p class="text-xl text-gray-600">
                        "Łączymy młodych wolontariuszy z organizacjami w Krakowie"
                    </p>
                </div>

                {stats_cards}

                <div class="grid md:grid-cols-3 gap-6 mb-12">{role_cards}</div>

                <div class="bg-white rounded-xl shadow p-6">
                    <h2 class="text-2xl font-bold mb-4">"Dostępne inicjatywy"</h2>
                    {preview}
                </div>
            </div>
        </div>
    }
}

#[component]
fn PreviewCard(initiative: Initiative) -> impl IntoView {
    view! {
        <div class="border rounded-lg p-4 hover:shadow-md transition">
            <div class="flex justify-between items-start mb-2">
                <h3 class="font-bold">{initiative.title}</h3>
                <CategoryPill category=initiative.category />
            </div>
            <p class="text-gray-600 text-sm mb-2 line-clamp-2">{initiative.description}</p>
            <div class="flex items-center gap-4 text-sm text-gray-600">
                <span>"📍 "{initiative.location}</span>
                <span>"⏱ "{format_hours(initiative.hours_required)}</span>
            </div>
        </div>
    }
}

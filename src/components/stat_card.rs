//! Stat Card Component
//!
//! Labelled counter tile used in the dashboard headers.

use leptos::prelude::*;

/// Counter tile; `accent` is the text color class of the value
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(default = "text-blue-600")] accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <div class="text-sm text-gray-600">{label}</div>
            <div class=format!("text-2xl font-bold {}", accent)>{move || value.get()}</div>
        </div>
    }
}

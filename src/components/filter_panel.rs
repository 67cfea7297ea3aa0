//! Filter Panel Component
//!
//! Category and location selects bound to the store filter.
//! The empty option ("Wszystkie") clears the filter.

use leptos::prelude::*;

use crate::config::{CATEGORIES, LOCATIONS};
use crate::store::{
    store_set_category_filter, store_set_location_filter, use_app_store, AppStateStoreFields,
};

#[component]
fn FilterSelect(
    label: &'static str,
    options: &'static [&'static str],
    value: Signal<String>,
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium mb-2">{label}</label>
            <select
                class="w-full border rounded-lg p-2"
                prop:value=move || value.get()
                on:change=move |ev| on_change(event_target_value(&ev))
            >
                <option value="">"Wszystkie"</option>
                {options.iter().map(|option| view! {
                    <option value=*option>{*option}</option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn FilterPanel() -> impl IntoView {
    let store = use_app_store();
    let category = Signal::derive(move || store.filter().get().category);
    let location = Signal::derive(move || store.filter().get().location);

    view! {
        <div class="grid md:grid-cols-2 gap-4 mb-4 p-4 bg-gray-50 rounded-lg">
            <FilterSelect
                label="Kategoria"
                options=CATEGORIES
                value=category
                on_change=move |value| store_set_category_filter(&store, value)
            />
            <FilterSelect
                label="Lokalizacja"
                options=LOCATIONS
                value=location
                on_change=move |value| store_set_location_filter(&store, value)
            />
        </div>
    }
}

//! View Header Component
//!
//! Dashboard title bar with a back-to-home button.

use leptos::prelude::*;

use crate::store::{store_navigate, use_app_store, View};

#[component]
pub fn ViewHeader(title: &'static str) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="bg-white shadow-sm border-b">
            <div class="max-w-7xl mx-auto px-4 py-4 flex justify-between items-center">
                <h1 class="text-2xl font-bold">{title}</h1>
                <button
                    class="text-blue-600 hover:text-blue-800 font-medium"
                    on:click=move |_| store_navigate(&store, View::Home)
                >
                    "← Powrót"
                </button>
            </div>
        </div>
    }
}

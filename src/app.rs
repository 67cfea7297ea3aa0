//! Root Component
//!
//! Provides the store and API client, loads the public data and renders
//! the active view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpApi;
use crate::context::{use_app_context, AppContext};
use crate::loaders;
use crate::store::{use_app_store, AppState, AppStateStoreFields, View};
use crate::views::{CoordinatorView, HomeView, OrganizationView, VolunteerView};

#[component]
pub fn App() -> impl IntoView {
    let api = HttpApi::default();
    log::info!("Using backend at {}", api.base_url());

    provide_context(Store::new(AppState::new()));
    provide_context(AppContext::new(api));

    let store = use_app_store();
    let ctx = use_app_context();

    // Statistics: once per mount
    {
        let api = ctx.api();
        spawn_local(async move {
            let statistics = loaders::load_statistics(&api).await;
            store.statistics().set(statistics);
        });
    }

    // Initiatives: on mount and whenever the filter changes
    Effect::new(move |_| {
        let filter = store.filter().get();
        let api = ctx.api();
        spawn_local(async move {
            let initiatives = loaders::load_initiatives(&api, &filter).await;
            store.initiatives().set(initiatives);
        });
    });

    view! {
        <div class="min-h-screen">
            {move || match store.view().get() {
                View::Home => view! { <HomeView /> }.into_any(),
                View::Volunteer => view! { <VolunteerView /> }.into_any(),
                View::Organization => view! { <OrganizationView /> }.into_any(),
                View::Coordinator => view! { <CoordinatorView /> }.into_any(),
            }}
        </div>
    }
}

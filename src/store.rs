//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::{DEMO_COORDINATOR_ID, DEMO_ORGANIZATION_ID, DEMO_VOLUNTEER_ID};
use crate::models::{CoordinatorData, Initiative, InitiativeFilter, OrganizationData, Statistics, VolunteerData};

/// The four mutually exclusive screens
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Volunteer,
    Organization,
    Coordinator,
}

impl View {
    /// User acting in this view. Role views switch to their demo identity,
    /// `Home` keeps whoever was selected.
    pub fn acting_user(self, current: u32) -> u32 {
        match self {
            View::Home => current,
            View::Volunteer => DEMO_VOLUNTEER_ID,
            View::Organization => DEMO_ORGANIZATION_ID,
            View::Coordinator => DEMO_COORDINATOR_ID,
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Active screen
    pub view: View,
    /// Volunteer, organization or coordinator the role view acts as
    pub selected_user_id: u32,
    /// Public initiative list (home and volunteer views)
    pub initiatives: Vec<Initiative>,
    pub statistics: Option<Statistics>,
    pub filter: InitiativeFilter,
    pub show_filters: bool,
    pub volunteer: VolunteerData,
    pub organization: OrganizationData,
    pub coordinator: CoordinatorData,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            selected_user_id: DEMO_VOLUNTEER_ID,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Switch screens. No guards: data that hasn't loaded yet renders as a placeholder.
///
/// The user id is only written when it changes, so leaving a role view does
/// not wake that view's load effect.
pub fn store_navigate(store: &AppStore, view: View) {
    let current = store.selected_user_id().get_untracked();
    let user_id = view.acting_user(current);
    if user_id != current {
        store.selected_user_id().set(user_id);
    }
    store.view().set(view);
}

pub fn store_set_category_filter(store: &AppStore, category: String) {
    store.filter().write().category = category;
}

pub fn store_set_location_filter(store: &AppStore, location: String) {
    store.filter().write().location = location;
}

pub fn store_toggle_filters(store: &AppStore) {
    store.show_filters().update(|shown| *shown = !*shown);
}

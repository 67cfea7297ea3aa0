//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpApi;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend client, shared by every view
    api: StoredValue<HttpApi>,
}

impl AppContext {
    pub fn new(api: HttpApi) -> Self {
        Self {
            api: StoredValue::new(api),
        }
    }

    /// Clone of the backend client, to move into a spawned load
    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

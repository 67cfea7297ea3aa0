//! Volunteer Hub Frontend Entry Point

mod actions;
mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod format;
mod labels;
mod loaders;
mod models;
mod store;
mod views;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(config::LOG_LEVEL) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }
    mount_to_body(App);
}

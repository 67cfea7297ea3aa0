//! Badge Components
//!
//! Category pills and status badges backed by the `labels` tables.

use leptos::prelude::*;

use crate::labels::{category_color, status_label, status_style};

#[component]
pub fn CategoryPill(
    #[prop(into)] category: String,
    /// Larger variant used in the coordinator report
    #[prop(optional)] large: bool,
) -> impl IntoView {
    let size = if large { "px-3 py-1 text-sm" } else { "px-2 py-1 text-xs" };
    let class = format!("rounded-full {} {}", size, category_color(&category));
    view! { <span class=class>{category}</span> }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = format!("px-2 py-1 rounded-full text-xs font-medium {}", status_style(&status));
    let label = status_label(&status).to_string();
    view! { <span class=class>{label}</span> }
}

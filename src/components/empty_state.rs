//! Empty State Component
//!
//! Placeholder shown when a list has nothing to display (or hasn't loaded).

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    message: &'static str,
    /// Optional second line
    #[prop(optional, into)] hint: Option<String>,
    /// Tighter padding for side panels
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let class = if compact {
        "text-center py-4 text-gray-500 text-sm"
    } else {
        "text-center py-8 text-gray-500"
    };
    view! {
        <div class=class>
            <p>{message}</p>
            {hint.map(|hint| view! { <p class="text-sm mt-2">{hint}</p> })}
        </div>
    }
}

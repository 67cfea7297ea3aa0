//! Application Card Component
//!
//! Pending application with volunteer contact and approve/reject buttons.

use leptos::prelude::*;

use crate::format::format_date;
use crate::models::{Participation, ReviewDecision};

#[component]
pub fn ApplicationCard(
    application: Participation,
    /// Called with (participation id, decision)
    on_review: Callback<(u32, ReviewDecision)>,
) -> impl IntoView {
    let id = application.id;
    let phone = application.volunteer_phone.filter(|p| !p.is_empty());
    let message = application.message.filter(|m| !m.is_empty());

    view! {
        <div class="border rounded-lg p-4">
            <div class="flex justify-between items-start mb-3">
                <div class="flex-1">
                    <h3 class="font-bold text-lg">{application.initiative_title.unwrap_or_default()}</h3>
                    <div class="text-sm text-gray-600 mt-1">
                        <div class="font-medium">{application.volunteer_name.unwrap_or_default()}</div>
                        <div>{application.volunteer_email.unwrap_or_default()}</div>
                        {phone.map(|phone| view! { <div>{format!("Tel: {}", phone)}</div> })}
                    </div>
                    {message.map(|message| view! {
                        <div class="mt-2 p-2 bg-gray-50 rounded text-sm">
                            <span class="font-medium">"Wiadomość: "</span>
                            {message}
                        </div>
                    })}
                    <div class="text-xs text-gray-500 mt-2">
                        {format!("Zgłoszono: {}", format_date(&application.applied_date))}
                    </div>
                </div>
                <div class="flex gap-2 ml-4">
                    <button
                        class="px-3 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700"
                        on:click=move |_| on_review.run((id, ReviewDecision::Approved))
                    >
                        "✓ Akceptuj"
                    </button>
                    <button
                        class="px-3 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700"
                        on:click=move |_| on_review.run((id, ReviewDecision::Rejected))
                    >
                        "✗ Odrzuć"
                    </button>
                </div>
            </div>
        </div>
    }
}

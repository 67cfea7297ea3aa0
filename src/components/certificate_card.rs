//! Certificate Card Component

use leptos::prelude::*;

use crate::format::{format_date, format_hours};
use crate::models::Certificate;

#[component]
pub fn CertificateCard(certificate: Certificate) -> impl IntoView {
    view! {
        <div class="border rounded-lg p-3 bg-purple-50">
            <div class="flex items-center gap-2 mb-2">
                <span class="text-purple-600">"🏅"</span>
                <div class="font-medium">{format!("Zaświadczenie #{}", certificate.id)}</div>
            </div>
            <div class="text-sm text-gray-600">
                <div class="font-medium">{certificate.initiative_title.unwrap_or_default()}</div>
                <div>{certificate.organization_name.unwrap_or_default()}</div>
                <div class="mt-1">{format!("Data wystawienia: {}", format_date(&certificate.issued_date))}</div>
                <div>{format!("Potwierdzone godziny: {}", format_hours(certificate.hours_completed))}</div>
            </div>
        </div>
    }
}

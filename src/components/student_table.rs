//! Student Table Component
//!
//! Coordinator's roster with per-student hours and participation counts.

use leptos::prelude::*;

use crate::format::format_hours;
use crate::models::User;

const COLUMNS: &[&str] = &["Imię i nazwisko", "Email", "Telefon", "Godziny", "Uczestnictwa"];

#[component]
pub fn StudentTable(students: Vec<User>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        {COLUMNS.iter().map(|column| view! {
                            <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                {*column}
                            </th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    <For
                        each=move || students.clone()
                        key=|student| student.id
                        children=move |student| {
                            let phone = student.phone.filter(|p| !p.is_empty()).unwrap_or_else(|| "-".to_string());
                            view! {
                                <tr class="hover:bg-gray-50">
                                    <td class="px-4 py-3 whitespace-nowrap text-sm font-medium text-gray-900">{student.name}</td>
                                    <td class="px-4 py-3 whitespace-nowrap text-sm text-gray-600">{student.email}</td>
                                    <td class="px-4 py-3 whitespace-nowrap text-sm text-gray-600">{phone}</td>
                                    <td class="px-4 py-3 whitespace-nowrap text-sm">
                                        <span class="font-bold text-blue-600">{format_hours(student.total_hours)}</span>
                                    </td>
                                    <td class="px-4 py-3 whitespace-nowrap text-sm">
                                        <span class="px-2 py-1 bg-green-100 text-green-800 rounded-full text-xs">
                                            {student.total_participations}
                                        </span>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

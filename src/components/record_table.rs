//! Record Table Component
//!
//! Tabular view of the record sequence.

use leptos::*;

use crate::state::global::AppState;

/// Fixed column order, matching the record fields
const COLUMNS: [&str; 7] = ["Name", "Age", "Height (cm)", "Weight (kg)", "BMI", "City", "Country"];

/// Records table, rebuilt from the record signal on every change
#[component]
pub fn RecordTable() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let state_for_clear = state.clone();

    let on_clear = move |_| {
        let confirmed = web_sys::window()
            .map(|window| {
                window
                    .confirm_with_message("Delete all records? This cannot be undone.")
                    .unwrap_or(false)
            })
            .unwrap_or(false);

        if confirmed {
            state_for_clear.clear_all();
            state_for_clear.show_success("All records cleared");
        }
    };

    view! {
        <div class="space-y-4">
            <div class="overflow-x-auto">
                <table class="w-full text-left text-sm">
                    <thead>
                        <tr class="text-gray-400 border-b border-gray-700">
                            {COLUMNS.into_iter().map(|column| view! {
                                <th class="px-4 py-3 font-medium">{column}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let records = state.records.get();

                            if records.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="7" class="px-4 py-6 text-center text-gray-400">
                                            "No records yet"
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                records.into_iter().map(|record| {
                                    let bmi = record.display_bmi();
                                    view! {
                                        <tr class="border-b border-gray-700 last:border-0 hover:bg-gray-750">
                                            <td class="px-4 py-3">{record.name}</td>
                                            <td class="px-4 py-3">{record.age}</td>
                                            <td class="px-4 py-3">{format!("{:.1}", record.height)}</td>
                                            <td class="px-4 py-3">{format!("{:.1}", record.weight)}</td>
                                            <td class="px-4 py-3">{bmi}</td>
                                            <td class="px-4 py-3">{record.city}</td>
                                            <td class="px-4 py-3">{record.country}</td>
                                        </tr>
                                    }
                                }).collect_view()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <div class="flex justify-end">
                <button
                    on:click=on_clear
                    class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg text-sm
                           font-medium transition-colors"
                >
                    "Clear All"
                </button>
            </div>
        </div>
    }
}

//! App Root Component
//!
//! Single-page layout with global state providers.

use leptos::*;

use crate::components::{AgeHistogram, BmiTrend, CountryPie, RecordForm, RecordTable, Toast};
use crate::state::global::{provide_app_state, AppState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_app_state();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Page header
            <header class="border-b border-gray-700 px-4 py-6">
                <div class="container mx-auto">
                    <h1 class="text-3xl font-bold">"Vitalog"</h1>
                    <p class="text-gray-400 mt-1">"Personal records at a glance"</p>
                </div>
            </header>

            // Main content area
            <main class="flex-1 container mx-auto px-4 py-8 pb-24 space-y-8">
                // Entry form
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"New Record"</h2>
                    <RecordForm />
                </section>

                // Records table
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Records"</h2>
                    <RecordTable />
                </section>

                // Charts
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Statistics"</h2>
                    <div class="grid md:grid-cols-2 gap-8">
                        <div>
                            <h3 class="text-lg font-medium mb-2">"Age distribution"</h3>
                            <AgeHistogram />
                        </div>
                        <div>
                            <h3 class="text-lg font-medium mb-2">"Records by country"</h3>
                            <CountryPie />
                        </div>
                        <div class="md:col-span-2">
                            <h3 class="text-lg font-medium mb-2">"BMI trend"</h3>
                            <BmiTrend />
                        </div>
                    </div>
                </section>
            </main>

            // Footer with record count
            <Footer />

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Footer component showing the live record count
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <span class="text-gray-400">"Stored locally in this browser"</span>

                <span class="text-gray-400">
                    {move || {
                        let count = state.record_count();
                        if count == 1 {
                            "1 record".to_string()
                        } else {
                            format!("{} records", count)
                        }
                    }}
                </span>
            </div>
        </footer>
    }
}

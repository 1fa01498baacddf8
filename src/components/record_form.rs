//! Record Form Component
//!
//! Form for entering new records.

use leptos::*;

use crate::record::RecordDraft;
use crate::state::global::AppState;

/// Record entry form component
///
/// Validation failures surface as a blocking alert and leave the record
/// sequence untouched; a valid submission appends, persists, and resets
/// the fields.
#[component]
pub fn RecordForm() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (name, set_name) = create_signal(String::new());
    let (age, set_age) = create_signal(String::new());
    let (height, set_height) = create_signal(String::new());
    let (weight, set_weight) = create_signal(String::new());
    let (city, set_city) = create_signal(String::new());
    let (country, set_country) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = RecordDraft {
            name: name.get(),
            age: age.get(),
            height: height.get(),
            weight: weight.get(),
            city: city.get(),
            country: country.get(),
        };

        match draft.parse() {
            Ok(record) => {
                let saved_name = record.name.clone();
                state.append_record(record);
                state.show_success(&format!("Record saved for {}", saved_name));

                set_name.set(String::new());
                set_age.set(String::new());
                set_height.set(String::new());
                set_weight.set(String::new());
                set_city.set(String::new());
                set_country.set(String::new());
            }
            Err(err) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&err.to_string());
                }
            }
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="grid md:grid-cols-2 gap-4">
                <Field label="Name" input_type="text" placeholder="Ana"
                    value=name set_value=set_name />
                <Field label="Age" input_type="number" placeholder="30"
                    value=age set_value=set_age />
                <Field label="Height (cm)" input_type="number" placeholder="165"
                    value=height set_value=set_height />
                <Field label="Weight (kg)" input_type="number" placeholder="60"
                    value=weight set_value=set_weight />
                <Field label="City" input_type="text" placeholder="Lima"
                    value=city set_value=set_city />
                <Field label="Country" input_type="text" placeholder="Peru"
                    value=country set_value=set_country />
            </div>

            <button
                type="submit"
                class="w-full bg-orange-600 hover:bg-orange-700 rounded-lg py-3
                       font-semibold transition-colors"
            >
                "Add Record"
            </button>
        </form>
    }
}

/// Labelled form input bound to a string signal
#[component]
fn Field(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=input_type
                step="any"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-orange-500 focus:outline-none"
            />
        </div>
    }
}

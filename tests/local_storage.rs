//! Browser round-trip tests for the localStorage-backed record store.
//!
//! These run under `wasm-bindgen-test` in a browser
//! (`wasm-pack test --headless --chrome`); on native targets the whole
//! file compiles away.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use vitalog::record::{compute_bmi, Record};
use vitalog::storage;

wasm_bindgen_test_configure!(run_in_browser);

fn sample_record(name: &str, age: u32, country: &str) -> Record {
    Record {
        name: name.to_string(),
        age,
        height: 170.0,
        weight: 70.0,
        bmi: compute_bmi(70.0, 170.0),
        city: "Lima".to_string(),
        country: country.to_string(),
    }
}

fn raw_storage() -> web_sys::Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

#[wasm_bindgen_test]
fn save_load_round_trip() {
    storage::clear_records();

    let records = vec![
        sample_record("Ana", 30, "Peru"),
        sample_record("Luis", 52, "Chile"),
    ];
    storage::save_records(&records);

    assert_eq!(storage::load_records(), records);

    storage::clear_records();
}

#[wasm_bindgen_test]
fn clear_removes_persisted_entry() {
    storage::save_records(&[sample_record("Ana", 30, "Peru")]);
    storage::clear_records();

    assert!(storage::load_records().is_empty());
    assert!(raw_storage()
        .get_item(storage::STORAGE_KEY)
        .unwrap()
        .is_none());
}

#[wasm_bindgen_test]
fn malformed_blob_loads_as_empty() {
    raw_storage()
        .set_item(storage::STORAGE_KEY, "definitely not json")
        .unwrap();

    assert!(storage::load_records().is_empty());

    storage::clear_records();
}

#[wasm_bindgen_test]
fn append_pattern_overwrites_malformed_blob() {
    raw_storage()
        .set_item(storage::STORAGE_KEY, "[{\"broken\":")
        .unwrap();

    let mut records = storage::load_records();
    records.push(sample_record("Ana", 30, "Peru"));
    storage::save_records(&records);

    assert_eq!(storage::load_records().len(), 1);

    storage::clear_records();
}

//! # Vitalog
//!
//! Personal records dashboard - a client-side rendered (CSR) Leptos
//! application that compiles to WebAssembly. Records entered through the
//! form are kept in reactive state, persisted as a single JSON blob in
//! `window.localStorage`, and visualized as a table plus three canvas
//! charts.
//!
//! ## Modules
//!
//! - [`record`]: the `Record` data model, BMI derivation, and form validation
//! - [`stats`]: pure aggregations behind the charts (age buckets, country
//!   counts, BMI series)
//! - [`storage`]: the localStorage-backed persistence layer
//! - [`state`]: reactive application state shared via Leptos context
//! - [`components`]: form, table, chart, and toast components
//! - [`app`]: the root component and page layout

pub mod app;
pub mod components;
pub mod record;
pub mod state;
pub mod stats;
pub mod storage;

//! UI Components
//!
//! Leptos components for the records dashboard.

pub mod charts;
pub mod record_form;
pub mod record_table;
pub mod toast;

pub use charts::{AgeHistogram, BmiTrend, CountryPie};
pub use record_form::RecordForm;
pub use record_table::RecordTable;
pub use toast::Toast;

//! State Management
//!
//! Reactive application state shared through Leptos context.

pub mod global;

pub use global::{provide_app_state, AppState};

//! State Management
//!
//! Global application state shared through Leptos context.

pub mod profile;

pub use profile::{provide_app_state, AppState, LearnerProfile};

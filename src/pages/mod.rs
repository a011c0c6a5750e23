//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod topics;

pub use dashboard::Dashboard;
pub use topics::Topics;

//! Pages
//!
//! Top-level routed views.

pub mod dashboard;

pub use dashboard::Dashboard;

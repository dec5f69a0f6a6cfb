//! Application state.
//!
//! Reactive state management using Leptos signals, plus the speech
//! synthesis wrapper used by voice alerts.

pub mod global;
pub mod speech;

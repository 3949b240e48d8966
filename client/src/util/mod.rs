//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, dialogs, Chart.js,
//! blob URLs) from page and component logic to improve reuse and testability.

pub mod audio;
pub mod chart;
#[cfg(feature = "hydrate")]
pub mod chart_js;
pub mod dialog;
pub mod task;
pub mod theme;

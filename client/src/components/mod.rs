//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and panels while reading shared state
//! from Leptos context providers.

pub mod chart;
pub mod chart_panel;
pub mod chat_widget;
pub mod clock;
pub mod header;
pub mod logo;
pub mod overview;
pub mod ticker;

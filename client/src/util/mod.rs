//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (timers, wall clock) and chart
//! geometry from page and component logic so they can be tested natively.

pub mod chart_layout;
pub mod clock;
pub mod timer;

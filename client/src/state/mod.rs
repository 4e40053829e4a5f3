//! Reactive application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component wraps each struct here in an `RwSignal` and provides
//! it as context. Components read with `expect_context` and write through
//! the structs' methods, which hold all transition rules.

pub mod chat;
pub mod session;
pub mod ui;

use std::sync::Arc;

use catalog::{DashboardSource, LabelKey};
use leptos::prelude::*;

use self::ui::UiState;

/// The data provider every panel reads from.
pub type SharedSource = Arc<dyn DashboardSource>;

/// Label text in the active language. Re-evaluates on language change.
pub fn use_label(key: LabelKey) -> Signal<String> {
    let source = expect_context::<SharedSource>();
    let ui = expect_context::<RwSignal<UiState>>();
    Signal::derive(move || source.labels(ui.get().language).get(key).to_owned())
}

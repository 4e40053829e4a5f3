//! Scrolling alert strip under the header.

use catalog::{DashboardSource, LabelKey};
use catalog::ticker::ticker_message;
use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::state::{SharedSource, use_label};

#[component]
pub fn Ticker() -> impl IntoView {
    let source = expect_context::<SharedSource>();
    let ui = expect_context::<RwSignal<UiState>>();
    let live = use_label(LabelKey::Live);

    let message = move || {
        let state = ui.get();
        ticker_message(state.region, source.dataset(state.region), source.labels(state.language))
    };

    view! {
        <div class="ticker" role="status">
            <span class="ticker__live">{move || live.get()}</span>
            <div class="ticker__track">
                <p class="ticker__message">{message}</p>
            </div>
        </div>
    }
}

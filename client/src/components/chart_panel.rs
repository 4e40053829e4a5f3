//! Titled card around one charted panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each card derives its chart from the selected region, the active language,
//! and (for the anomaly card) the filter in `UiState`. Nothing is cached; a
//! selection change simply rebuilds the spec.

use catalog::{AnomalyFilter, ChartSpec, DashboardSource, Panel};
use leptos::prelude::*;

use crate::components::chart::Chart;
use crate::state::ui::UiState;
use crate::state::{SharedSource, use_label};

/// Reactive chart spec for `panel` under the current selections.
pub fn use_panel_chart(panel: Panel) -> Signal<ChartSpec> {
    let source = expect_context::<SharedSource>();
    let ui = expect_context::<RwSignal<UiState>>();
    Signal::derive(move || {
        let state = ui.get();
        panel.chart(source.dataset(state.region), source.labels(state.language), state.anomaly_filter)
    })
}

#[component]
pub fn ChartPanel(panel: Panel, #[prop(optional)] tall: bool, #[prop(optional)] wide: bool) -> impl IntoView {
    let spec = use_panel_chart(panel);

    view! {
        <section class="card chart-card" class:chart-card--wide=wide>
            <div class="chart-card__head">
                <h3 class="chart-card__title">{move || spec.get().title}</h3>
                <Show when=move || panel == Panel::Anomaly>
                    <AnomalyFilterBar/>
                </Show>
            </div>
            <Chart spec=spec tall=tall/>
        </section>
    }
}

/// Total / kids / adult toggle for the anomaly chart.
#[component]
pub fn AnomalyFilterBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="filter-bar" role="group">
            {AnomalyFilter::ALL
                .into_iter()
                .map(|filter| {
                    let caption = use_label(filter.label_key());
                    view! {
                        <button
                            class="filter-bar__button"
                            class:filter-bar__button--active=move || ui.get().anomaly_filter == filter
                            on:click=move |_| ui.update(|u| u.anomaly_filter = filter)
                        >
                            {move || caption.get()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

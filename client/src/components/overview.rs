//! Top-row summary cards and the regional insight strip.

use catalog::notices::PolicyStatus;
use catalog::{DashboardSource, LabelKey, Panel};
use leptos::prelude::*;

use crate::components::chart::Chart;
use crate::components::chart_panel::use_panel_chart;
use crate::state::ui::UiState;
use crate::state::{SharedSource, use_label};

fn status_badge_class(status: PolicyStatus) -> String {
    format!("badge badge--{}", status.tone().css())
}

/// Population headline with the age distribution bars.
#[component]
pub fn PopulationCard() -> impl IntoView {
    let source = expect_context::<SharedSource>();
    let ui = expect_context::<RwSignal<UiState>>();
    let spec = use_panel_chart(Panel::Population);
    let headline = move || source.dataset(ui.get().region).population.clone();

    view! {
        <section class="card summary-card summary-card--orange">
            <h2 class="summary-card__title">{move || spec.get().title}</h2>
            <div class="summary-card__headline">{headline}</div>
            <Chart spec=spec/>
        </section>
    }
}

/// Current government directives. Text is not translated.
#[component]
pub fn PolicyCard() -> impl IntoView {
    let source = expect_context::<SharedSource>();
    let title = use_label(LabelKey::PolicyTitle);

    let policies = source
        .policies()
        .iter()
        .map(|policy| {
            view! {
                <li class="policy">
                    <span class=status_badge_class(policy.status)>{policy.status.label()}</span>
                    <span class="policy__text">{policy.text.clone()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="card summary-card summary-card--green">
            <h2 class="summary-card__title">{move || title.get()}</h2>
            <ul class="policy-list">{policies}</ul>
        </section>
    }
}

/// Emergency helpline tiles.
#[component]
pub fn ContactCard() -> impl IntoView {
    let source = expect_context::<SharedSource>();
    let title = use_label(LabelKey::HelpTitle);

    let tiles = source
        .contacts()
        .iter()
        .map(|contact| {
            view! {
                <div class=format!("contact contact--{}", contact.tone.css())>
                    <div class="contact__number">{contact.number.clone()}</div>
                    <div class="contact__agency">{contact.agency.clone()}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="card summary-card summary-card--red">
            <h2 class="summary-card__title">{move || title.get()}</h2>
            <div class="contact-grid">{tiles}</div>
        </section>
    }
}

/// One-line analyst note for the selected region.
#[component]
pub fn InsightStrip() -> impl IntoView {
    let source = expect_context::<SharedSource>();
    let ui = expect_context::<RwSignal<UiState>>();
    let title = use_label(LabelKey::InsightTitle);
    let insight = move || {
        let state = ui.get();
        source.dataset(state.region).insight.get(state.language).to_owned()
    };

    view! {
        <section class="card insight">
            <h3 class="insight__title">{move || title.get()}</h3>
            <p class="insight__text">{insight}</p>
        </section>
    }
}

//! Dashboard page: login gate plus the panel grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. Until the session holds a user it renders the
//! login card; afterwards the header, ticker, summary cards, chart panels,
//! and chat widget all read the shared selection and catalog contexts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use catalog::{LabelKey, Panel};
use leptos::prelude::*;

use crate::components::chart_panel::ChartPanel;
use crate::components::chat_widget::ChatWidget;
use crate::components::header::DashboardHeader;
use crate::components::overview::{ContactCard, InsightStrip, PolicyCard, PopulationCard};
use crate::components::ticker::Ticker;
use crate::pages::login::LoginPage;
use crate::state::session::SessionState;
use crate::state::use_label;

/// `Welcome, Paritosh`.
fn welcome_line(welcome: &str, name: &str) -> String {
    format!("{welcome}, {name}")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show when=move || session.with(|s| s.user().is_some()) fallback=|| view! { <LoginPage/> }>
            <DashboardView/>
        </Show>
    }
}

#[component]
fn DashboardView() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let welcome = use_label(LabelKey::Welcome);
    let footer = use_label(LabelKey::Footer);
    let greeting = move || {
        let name = session.with(|s| s.user().map(|u| u.display_name.clone())).unwrap_or_default();
        welcome_line(&welcome.get(), &name)
    };

    view! {
        <div class="dashboard-page">
            <DashboardHeader/>
            <main class="dashboard-page__main">
                <p class="dashboard-page__welcome">{greeting}</p>
                <Ticker/>
                <div class="grid grid--three">
                    <PopulationCard/>
                    <PolicyCard/>
                    <ContactCard/>
                </div>
                <div class="grid grid--two">
                    <ChartPanel panel=Panel::Anomaly/>
                    <ChartPanel panel=Panel::Migration/>
                </div>
                <div class="grid grid--two">
                    <ChartPanel panel=Panel::Gender/>
                    <ChartPanel panel=Panel::Efficiency/>
                </div>
                <ChartPanel panel=Panel::Biometric tall=true wide=true/>
                <InsightStrip/>
            </main>
            <ChatWidget/>
            <footer class="dashboard-page__footer">{move || footer.get()}</footer>
        </div>
    }
}

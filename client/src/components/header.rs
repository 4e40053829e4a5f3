//! Sticky dashboard header: brand, clock, identity badge, and selectors.

use catalog::{LabelKey, Language, Region};
use leptos::prelude::*;

use crate::components::clock::HeaderClock;
use crate::components::logo::Logo;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::state::use_label;

#[component]
pub fn DashboardHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let title = use_label(LabelKey::Title);
    let last_login = use_label(LabelKey::LastLogin);

    let user = move || session.with(|s| s.user().cloned());
    let user_name = move || user().map(|u| u.display_name).unwrap_or_default();
    let user_role = move || user().map(|u| u.role).unwrap_or_default();
    let user_initial = move || user().map(|u| u.initial()).unwrap_or_default();
    let user_last_login = move || user().map(|u| u.last_login).unwrap_or_default();

    let on_region = move |ev: leptos::ev::Event| {
        let code = event_target_value(&ev);
        ui.update(|u| {
            if !u.select_region(&code) {
                leptos::logging::warn!("ignoring unknown region {code}");
            }
        });
    };
    let on_language = move |ev: leptos::ev::Event| {
        let code = event_target_value(&ev);
        ui.update(|u| {
            if !u.select_language(&code) {
                leptos::logging::warn!("ignoring unknown language {code}");
            }
        });
    };

    view! {
        <header class="dashboard-header">
            <div class="dashboard-header__brand">
                <Logo class="logo logo--small"/>
                <h1 class="dashboard-header__title">{move || title.get()}</h1>
            </div>
            <div class="dashboard-header__right">
                <div class="dashboard-header__clock">
                    <HeaderClock/>
                    <span class="dashboard-header__last-login">
                        {move || last_login.get()}
                        ": "
                        {user_last_login}
                    </span>
                </div>

                <div class="user-badge">
                    <span class="user-badge__avatar">{user_initial}</span>
                    <span class="user-badge__text">
                        <span class="user-badge__name">{user_name}</span>
                        <span class="user-badge__role">{user_role}</span>
                    </span>
                </div>

                <div class="dashboard-header__controls">
                    <select
                        class="control-select"
                        aria-label="Region"
                        prop:value=move || ui.get().region.code()
                        on:change=on_region
                    >
                        {Region::ALL
                            .into_iter()
                            .map(|region| {
                                view! {
                                    <option value=region.code() selected=move || ui.get().region == region>
                                        {region.caption()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <select
                        class="control-select"
                        aria-label="Language"
                        prop:value=move || ui.get().language.code()
                        on:change=on_language
                    >
                        {Language::ALL
                            .into_iter()
                            .map(|language| {
                                view! {
                                    <option value=language.code() selected=move || ui.get().language == language>
                                        {language.caption()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
        </header>
    }
}

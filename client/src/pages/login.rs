//! Simulated official login.
//!
//! Any identifier is accepted. The email is matched case-insensitively
//! against the account directory, falling back to the default officer, and
//! the session flips to logged-in after `LOGIN_DELAY`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::{Arc, Mutex};

use catalog::{DashboardSource, LabelKey};
use leptos::prelude::*;

use crate::components::logo::Logo;
use crate::state::session::{LOGIN_DELAY, SessionState};
use crate::state::{SharedSource, use_label};
use crate::util::timer::{TaskHandle, spawn_after};

/// Caption of the submit button for the current phase.
fn submit_caption(pending: bool, idle: String, busy: String) -> String {
    if pending { busy } else { idle }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let source = expect_context::<SharedSource>();
    let session = expect_context::<RwSignal<SessionState>>();
    let title = use_label(LabelKey::Title);
    let subtitle = use_label(LabelKey::LoginSubtitle);
    let placeholder = use_label(LabelKey::LoginPlaceholder);
    let btn_login = use_label(LabelKey::BtnLogin);
    let login_pending = use_label(LabelKey::LoginPending);

    let email = RwSignal::new(String::new());
    let completion: Arc<Mutex<Option<TaskHandle>>> = Arc::new(Mutex::new(None));

    let on_submit = {
        let completion = completion.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let mut ticket = None;
            session.update(|s| ticket = s.submit(&email.get_untracked(), source.accounts()));
            let Some(ticket) = ticket else {
                return;
            };
            let task = spawn_after(LOGIN_DELAY, move || {
                let mut signed_in = None;
                session.update(|s| {
                    if s.complete(ticket) {
                        signed_in = s.user().map(|u| u.display_name.clone());
                    }
                });
                if let Some(name) = signed_in {
                    leptos::logging::log!("signed in as {name}");
                }
            });
            if let Ok(mut slot) = completion.lock() {
                if let Some(stale) = slot.replace(task) {
                    stale.cancel();
                }
            }
        }
    };

    on_cleanup(move || {
        if let Ok(slot) = completion.lock() {
            if let Some(task) = slot.as_ref() {
                task.cancel();
            }
        }
    });

    let pending = move || session.with(SessionState::is_pending);

    view! {
        <div class="login-page">
            <div class="card login-card">
                <Logo class="logo logo--large"/>
                <h1 class="login-card__title">{move || title.get()}</h1>
                <p class="login-card__subtitle">{move || subtitle.get()}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="email"
                        placeholder=move || placeholder.get()
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=pending>
                        {move || submit_caption(pending(), btn_login.get(), login_pending.get())}
                    </button>
                </form>
            </div>
        </div>
    }
}

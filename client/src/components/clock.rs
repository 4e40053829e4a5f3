//! Header wall clock.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page's only repeating timer. The server render shows a
//! placeholder; the first reading lands right after hydration and the timer
//! is cancelled when the header unmounts.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::clock::{CLOCK_PERIOD, WallTime, clock_text, now_local};
use crate::util::timer::spawn_every;

#[component]
pub fn HeaderClock() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let now = RwSignal::new(None::<WallTime>);

    Effect::new(move || now.set(now_local()));
    let tick = spawn_every(CLOCK_PERIOD, move || now.set(now_local()));
    on_cleanup(move || {
        tick.cancel();
    });

    view! { <span class="header-clock">{move || clock_text(now.get(), ui.get().language)}</span> }
}

//! Inline brand mark.

use leptos::prelude::*;

/// Saffron/green arcs around a navy iris.
#[component]
pub fn Logo(#[prop(into, default = "logo".to_owned())] class: String) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 100 100" fill="none" aria-hidden="true">
            <defs>
                <linearGradient id="drishti-logo-ring">
                    <stop offset="0%" stop-color="#f97316"></stop>
                    <stop offset="100%" stop-color="#22c55e"></stop>
                </linearGradient>
            </defs>
            <circle
                cx="50"
                cy="50"
                r="48"
                stroke="url(#drishti-logo-ring)"
                stroke-width="2"
                fill="white"
                fill-opacity="0.1"
            ></circle>
            <path d="M20 50 Q 50 20 80 50" stroke="#f97316" stroke-width="6" stroke-linecap="round"></path>
            <path d="M20 50 Q 50 80 80 50" stroke="#22c55e" stroke-width="6" stroke-linecap="round"></path>
            <circle cx="50" cy="50" r="12" fill="#1e3a8a"></circle>
            <circle cx="50" cy="50" r="4" fill="white"></circle>
        </svg>
    }
}

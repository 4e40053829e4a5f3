//! Root application component with routing and context providers.

use catalog::{CatalogError, DashboardSource, LabelKey, Language, ReplyPolicy};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::dashboard::DashboardPage;
use crate::state::SharedSource;
use crate::state::chat::ChatState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the catalog and all shared state contexts, then mounts the
/// single dashboard route. A catalog that fails to load renders an error
/// notice instead of the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = match catalog::shared() {
        Ok(catalog) => {
            let source: SharedSource = catalog;
            let greeting = source.labels(Language::En).get(LabelKey::ChatGreeting).to_owned();

            provide_context(RwSignal::new(UiState::default()));
            provide_context(RwSignal::new(SessionState::default()));
            provide_context(RwSignal::new(ChatState::with_greeting(&greeting)));
            provide_context(ReplyPolicy::default());
            provide_context(source);

            view! {
                <Router>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=DashboardPage/>
                    </Routes>
                </Router>
            }
            .into_any()
        }
        Err(e) => {
            leptos::logging::error!("catalog failed to load: {e}");
            view! { <CatalogErrorNotice error=e/> }.into_any()
        }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/bharat-drishti.css"/>
        <Title text="Bharat-Drishti"/>
        {content}
    }
}

#[component]
fn CatalogErrorNotice(error: CatalogError) -> impl IntoView {
    view! {
        <div class="catalog-error" role="alert">
            <h1>"Dashboard data unavailable"</h1>
            <p>{error.to_string()}</p>
        </div>
    }
}

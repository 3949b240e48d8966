//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::chat::ChatPage;
use crate::state::{
    conversations::ConversationsState, session::SessionState, toast::ToastState, transcript::TranscriptState,
    ui::UiState,
};
use crate::util::theme;

/// Chart.js build loaded before hydration; `util::chart_js` binds its
/// global `Chart` class.
pub const CHART_JS_SRC: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src=CHART_JS_SRC></script>
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
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The server renders the light theme and the greeting; the stored theme
    // is applied once hydrated so both renders agree.
    let session = RwSignal::new(SessionState::default());
    let conversations = RwSignal::new(ConversationsState::default());
    let transcript = RwSignal::new({
        let mut t = TranscriptState::default();
        t.reset_to_greeting();
        t
    });
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(conversations);
    provide_context(transcript);
    provide_context(ui);
    provide_context(toasts);

    Effect::new(move || {
        let stored = theme::read_preference();
        theme::apply(stored);
        session.update(|s| s.theme = stored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/financial-analyst.css"/>
        <Title text="Analista Financeiro"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_header::AppHeader;
use crate::components::connection_status::RealtimeTracker;
use crate::pages::dashboard::{AdminHome, HomePage, OrganizerHome, StudentHome};
use crate::pages::login::LoginPage;
use crate::pages::unauthorized::UnauthorizedPage;
use crate::state::auth::{AuthContext, provide_auth};
use crate::state::session::SessionStore;

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
/// Owns the single `AuthContext` for the tab and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new(SessionStore::browser());
    provide_auth(auth.clone());

    // Effects run only in the browser, after hydration, so the stored session
    // is checked without holding up the first render.
    Effect::new(move || auth.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-events.css"/>
        <Title text="Campus Events"/>

        <Router>
            <RealtimeTracker>
                <AppHeader/>
                <main class="app-main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                        <Route path=StaticSegment("student") view=StudentHome/>
                        <Route path=StaticSegment("organizer") view=OrganizerHome/>
                        <Route path=StaticSegment("admin") view=AdminHome/>
                    </Routes>
                </main>
            </RealtimeTracker>
        </Router>
    }
}

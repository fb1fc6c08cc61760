//! Top bar with the signed-in user, connectivity, and sign-out.

use leptos::prelude::*;

use crate::components::connection_status::ConnectionIndicator;
use crate::state::auth::use_auth;

/// Header shown on every page.
///
/// Sign-out only clears the session; mounted route guards observe the change
/// and redirect on their own.
#[component]
pub fn AppHeader() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();

    let who = move || {
        state.with(|s| {
            s.user().map(|user| {
                let name = s.profile().map_or(user.usernumber.as_str(), |p| p.name.as_str());
                format!("{name} · {}", user.role.label())
            })
        })
    };

    let on_logout = move |_: leptos::ev::MouseEvent| auth.logout();

    view! {
        <header class="app-header">
            <a class="app-header__brand" href="/">"Campus Events"</a>
            <span class="app-header__spacer"></span>
            <ConnectionIndicator/>
            <Show when=move || who().is_some()>
                <span class="app-header__user">{move || who().unwrap_or_default()}</span>
                <button class="btn app-header__logout" on:click=on_logout.clone()>
                    "Sign out"
                </button>
            </Show>
        </header>
    }
}

//! Landing page for signed-in users who hit a route outside their role.

use leptos::prelude::*;

use crate::state::auth::use_auth;
use crate::util::auth::SIGN_IN_PATH;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let state = use_auth().state();
    let back_path = move || state.with(|s| s.role().map_or(SIGN_IN_PATH, |r| r.home_path()));

    view! {
        <div class="unauthorized-page">
            <h1>"Not allowed"</h1>
            <p>"Your account does not have access to that page."</p>
            <a class="btn btn--primary" href=back_path>"Back to my dashboard"</a>
        </div>
    }
}

//! Login page: user number, role, and password verified by the backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Credentials, Role};
use crate::state::auth::{AuthStatus, use_auth};
use crate::util::auth::redirect_options;

const MISSING_FIELDS: &str = "Enter your user number and password.";
const UNKNOWN_ROLE: &str = "Choose whether you are a student, organizer or admin.";

/// Trim and check the raw form fields, producing the verification request.
fn validate_login_input(user_number: &str, role: &str, password: &str) -> Result<Credentials, &'static str> {
    let user_number = user_number.trim();
    if user_number.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    let user_type = role.parse::<Role>().map_err(|_| UNKNOWN_ROLE)?;
    Ok(Credentials { user_number: user_number.to_owned(), user_type, password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();
    let navigate = use_navigate();

    let user_number = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student.as_str().to_owned());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in (restored session or a fresh login): go home.
    Effect::new(move || {
        let home = state.with(|s| match s.status() {
            AuthStatus::Authenticated => s.role().map(Role::home_path),
            AuthStatus::Initializing | AuthStatus::Anonymous => None,
        });
        if let Some(path) = home {
            navigate(path, redirect_options());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&user_number.get(), &role.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::verify_credentials(&credentials).await {
                    Ok(verified) => match auth.login(verified.identity, verified.profile) {
                        Ok(()) => {
                            password.set(String::new());
                            info.set(String::new());
                        }
                        Err(e) => info.set(format!("Could not save your session: {e}")),
                    },
                    Err(e) => info.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &auth);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Campus Events"</h1>
                <p class="login-card__subtitle">"Sign in with your university number"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        inputmode="numeric"
                        placeholder="User number"
                        prop:value=move || user_number.get()
                        on:input=move |ev| user_number.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

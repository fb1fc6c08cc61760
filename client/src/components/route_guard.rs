//! Role-gated wrapper for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps page content; reads the shared `AuthContext` and either renders the
//! children, shows a neutral placeholder while the stored session is being
//! checked, or replaces the location with the sign-in or unauthorized route.
//! The decision is a memo over auth state, so a logout anywhere in the UI
//! re-runs it without remounting.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::use_auth;
use crate::util::auth::{GuardDecision, guard_memo, install_guard_redirect};

#[component]
pub fn RouteGuard(
    /// Roles allowed to see the children.
    #[prop(into)]
    allow: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let state = use_auth().state();
    let decision = guard_memo(state, allow);

    install_guard_redirect(decision, use_navigate());

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Loading => view! {
            <div class="route-guard__loading" role="status">"Checking your session..."</div>
        }
        .into_any(),
        GuardDecision::RedirectSignIn | GuardDecision::RedirectUnauthorized => ().into_any(),
    }
}

//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same render-or-redirect rule. The rule
//! itself is a pure function so it can be checked without a browser; the
//! effect wiring lives in `install_guard_redirect`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Sign-in entry point.
pub const SIGN_IN_PATH: &str = "/login";
/// Shown when a signed-in user lacks the role a route requires.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Outcome of checking auth state against a route's allow-list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Stored session not checked yet; show a neutral placeholder.
    Loading,
    RedirectSignIn,
    RedirectUnauthorized,
    Render,
}

impl GuardDecision {
    /// Navigation target for redirect outcomes.
    #[must_use]
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            GuardDecision::RedirectSignIn => Some(SIGN_IN_PATH),
            GuardDecision::RedirectUnauthorized => Some(UNAUTHORIZED_PATH),
            GuardDecision::Loading | GuardDecision::Render => None,
        }
    }
}

/// Decide whether `state` may see a route open to `allow`.
#[must_use]
pub fn guard_decision(state: &AuthState, allow: &[Role]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    match state.role() {
        None => GuardDecision::RedirectSignIn,
        Some(role) if allow.contains(&role) => GuardDecision::Render,
        Some(_) => GuardDecision::RedirectUnauthorized,
    }
}

/// Decision memo for a route open to `allow`; re-evaluated on every auth change.
pub fn guard_memo(state: ReadSignal<AuthState>, allow: Vec<Role>) -> Memo<GuardDecision> {
    Memo::new(move |_| state.with(|s| guard_decision(s, &allow)))
}

/// Options for guard redirects: replace history so Back skips the gated page.
#[must_use]
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigate whenever `decision` settles on a redirect outcome.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = decision.get().redirect_path() {
            navigate(path, redirect_options());
        }
    });
}

//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The app root constructs exactly one
//! [`AuthContext`] and provides it; everything else reaches it via
//! [`use_auth`].
//!
//! LIFECYCLE
//! =========
//! `Initializing -> {Authenticated, Anonymous}` once the stored session has
//! been checked, then `login`/`logout` move between the two settled states.
//! Until the stored session is checked `loading` stays true so guards can
//! tell "not yet known" from "known anonymous".

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::{Identity, Profile, Role};
use crate::state::session::{SessionRecord, SessionStore, StorageError};

/// Signed-in identity together with its optional profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    pub profile: Option<Profile>,
}

impl From<SessionRecord> for Session {
    fn from(record: SessionRecord) -> Self {
        Self { identity: record.identity, profile: record.profile }
    }
}

/// Settled-or-not view of [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Initializing,
    Anonymous,
    Authenticated,
}

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn anonymous() -> Self {
        Self { session: None, loading: false }
    }

    #[must_use]
    pub fn authenticated(session: Session) -> Self {
        Self { session: Some(session), loading: false }
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        match (self.loading, &self.session) {
            (true, _) => AuthStatus::Initializing,
            (false, None) => AuthStatus::Anonymous,
            (false, Some(_)) => AuthStatus::Authenticated,
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&Identity> {
        self.session.as_ref().map(|s| &s.identity)
    }

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.session.as_ref().and_then(|s| s.profile.as_ref())
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }
}

/// Error raised when auth is looked up outside of its provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("AuthContext is not provided; call provide_auth at the application root")]
    MissingProvider,
}

/// Handle to the process-wide auth state.
///
/// Clones share the same signal and store.
#[derive(Clone)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    store: SessionStore,
}

impl AuthContext {
    pub fn new(store: SessionStore) -> Self {
        Self { state: RwSignal::new(AuthState::default()), store }
    }

    /// Read-only view for consumers; only `login`/`logout` mutate it.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Settle the initial state from the stored session.
    ///
    /// Does nothing once the state has settled, so a `login` that raced ahead
    /// of initialization is never overwritten, and a disposed context is
    /// never written.
    pub fn initialize(&self) {
        let still_loading = self.state.try_get_untracked().is_some_and(|s| s.loading);
        if !still_loading {
            return;
        }

        let restored = self.store.load().map(Session::from);
        self.state.try_update(|state| {
            if state.loading {
                *state = match restored {
                    Some(session) => AuthState::authenticated(session),
                    None => AuthState::anonymous(),
                };
            }
        });
    }

    /// Persist the session, then publish it.
    ///
    /// Re-entrant calls overwrite the current identity and profile.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the session cannot be persisted; the
    /// in-memory state is left untouched in that case.
    pub fn login(&self, identity: Identity, profile: Option<Profile>) -> Result<(), StorageError> {
        self.store.save(&identity, profile.as_ref())?;
        self.state.set(AuthState::authenticated(Session { identity, profile }));
        Ok(())
    }

    /// Drop the session from storage and memory. Never fails.
    pub fn logout(&self) {
        self.store.clear();
        self.state.set(AuthState::anonymous());
    }
}

/// Make `auth` available to every descendant component.
pub fn provide_auth(auth: AuthContext) {
    provide_context(auth);
}

/// Look up the provided [`AuthContext`].
///
/// # Errors
///
/// Returns [`AuthError::MissingProvider`] when called outside the provider.
pub fn try_use_auth() -> Result<AuthContext, AuthError> {
    use_context::<AuthContext>().ok_or(AuthError::MissingProvider)
}

/// Look up the provided [`AuthContext`].
///
/// # Panics
///
/// Panics with [`AuthError::MissingProvider`] when called outside the
/// provider; this is an integration bug, not a runtime condition.
pub fn use_auth() -> AuthContext {
    match try_use_auth() {
        Ok(auth) => auth,
        Err(e) => panic!("{e}"),
    }
}

//! Admin session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the dashboard route guard and the login page. The source of truth
//! is the `admin_authenticated` flag in `sessionStorage`; this struct mirrors
//! it into a signal so views can react.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use content::{AuthGate, StoragePort};

/// Authentication state tracking whether the admin flag is set.
///
/// `loading` stays `true` until the session has been read after hydration,
/// so the server render and the first client render agree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { authenticated: false, loading: true }
    }
}

impl AuthState {
    /// Resolved state read from session storage.
    pub fn from_session(session: &impl StoragePort) -> Self {
        Self { authenticated: AuthGate::is_authenticated(session), loading: false }
    }

    #[must_use]
    pub fn signed_in() -> Self {
        Self { authenticated: true, loading: false }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { authenticated: false, loading: false }
    }
}

//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin routes should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Route of the admin login page.
pub const LOGIN_PATH: &str = "/admin";

/// Route of the admin dashboard.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Whether the session has resolved without the admin flag.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.authenticated
}

/// Redirect to the login page whenever the session resolves signed out.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

//! Admin login page.
//!
//! A single password field. A match sets the session flag and moves to the
//! dashboard; a miss shows an inline error and clears the field.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use content::auth::ADMIN_PASSWORD;
use content::{AuthGate, StoragePort};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SITE_NAME;
use crate::state::auth::AuthState;
use crate::util::auth::DASHBOARD_PATH;
use crate::util::storage::BrowserStorage;

/// Inline error shown after a wrong password.
pub const INVALID_PASSWORD: &str = "Invalid password";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected,
    /// The password matched but the session flag could not be written.
    Failed(String),
}

/// Check `candidate` against `gate` and record the session on a match.
pub fn attempt_login(gate: &AuthGate, session: &impl StoragePort, candidate: &str) -> LoginOutcome {
    match gate.login(session, candidate) {
        Ok(true) => LoginOutcome::Accepted,
        Ok(false) => LoginOutcome::Rejected,
        Err(e) => LoginOutcome::Failed(format!("Could not start the admin session: {e}")),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let candidate = password.get_untracked();
        match attempt_login(&AuthGate::default(), &BrowserStorage::session(), &candidate) {
            LoginOutcome::Accepted => {
                error.set(String::new());
                auth.set(AuthState::signed_in());
                navigate(DASHBOARD_PATH, NavigateOptions::default());
            }
            LoginOutcome::Rejected => {
                error.set(INVALID_PASSWORD.to_owned());
                password.set(String::new());
            }
            LoginOutcome::Failed(message) => error.set(message),
        }
    };

    view! {
        <div class="login-page">
            <a class="login-page__back" href="/">
                "← Back to Site"
            </a>
            <div class="login-card">
                <h1>"Admin Login"</h1>
                <p class="login-card__subtitle">{SITE_NAME}</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label" for="admin-password">
                        "Password"
                    </label>
                    <input
                        id="admin-password"
                        class="login-input"
                        type="password"
                        placeholder="Enter admin password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            error.set(String::new());
                        }
                    />
                    <Show when=move || error.with(|e| !e.is_empty())>
                        <p class="login-message login-message--error">{move || error.get()}</p>
                    </Show>
                    <button class="login-button" type="submit">
                        "Login"
                    </button>
                </form>
                <p class="login-card__hint">
                    "Demo password: "
                    <code>{ADMIN_PASSWORD}</code>
                </p>
            </div>
        </div>
    }
}

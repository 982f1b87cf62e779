use super::*;
use content::MemoryStorage;
use content::auth::{ADMIN_PASSWORD, SESSION_FLAG};

#[test]
fn auth_state_default_is_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.authenticated);
}

#[test]
fn from_session_without_flag_is_signed_out() {
    let session = MemoryStorage::new();
    assert_eq!(AuthState::from_session(&session), AuthState::signed_out());
}

#[test]
fn from_session_after_login_is_signed_in() {
    let session = MemoryStorage::new();
    AuthGate::default().login(&session, ADMIN_PASSWORD).expect("login");
    assert_eq!(AuthState::from_session(&session), AuthState::signed_in());
}

#[test]
fn from_session_accepts_any_flag_value() {
    let session = MemoryStorage::new();
    session.set_item(SESSION_FLAG, "yes").expect("set");
    assert!(AuthState::from_session(&session).authenticated);
}

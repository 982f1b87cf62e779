use super::*;

#[test]
fn should_redirect_unauth_when_resolved_and_signed_out() {
    assert!(should_redirect_unauth(&AuthState::signed_out()));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_signed_in() {
    assert!(!should_redirect_unauth(&AuthState::signed_in()));
}

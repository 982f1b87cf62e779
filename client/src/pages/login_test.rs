use super::*;
use content::MemoryStorage;
use content::auth::SESSION_FLAG;

#[test]
fn correct_password_is_accepted_and_flags_session() {
    let session = MemoryStorage::new();
    let outcome = attempt_login(&AuthGate::default(), &session, "admin123");
    assert_eq!(outcome, LoginOutcome::Accepted);
    assert_eq!(session.get_item(SESSION_FLAG).expect("get").as_deref(), Some("true"));
}

#[test]
fn wrong_password_is_rejected_without_flag() {
    let session = MemoryStorage::new();
    let outcome = attempt_login(&AuthGate::default(), &session, "admin");
    assert_eq!(outcome, LoginOutcome::Rejected);
    assert!(session.is_empty());
}

#[test]
fn empty_password_is_rejected() {
    let session = MemoryStorage::new();
    assert_eq!(attempt_login(&AuthGate::default(), &session, ""), LoginOutcome::Rejected);
}

#[test]
fn unwritable_session_reports_failure() {
    let session = MemoryStorage::with_quota(0);
    let outcome = attempt_login(&AuthGate::default(), &session, "admin123");
    assert!(matches!(outcome, LoginOutcome::Failed(ref m) if m.starts_with("Could not start the admin session")));
}

use super::*;

fn directory() -> AccountDirectory {
    catalog::Catalog::builtin()
        .map(|c| catalog::DashboardSource::accounts(&c).clone())
        .unwrap()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_starts_logged_out() {
    let session = SessionState::default();
    assert_eq!(session.phase, LoginPhase::LoggedOut);
    assert!(session.user().is_none());
    assert!(!session.is_pending());
}

// =============================================================
// Submit / complete
// =============================================================

#[test]
fn matching_email_resolves_only_after_completion() {
    let dir = directory();
    let mut session = SessionState::default();
    let ticket = session.submit("ADMIN@gov.in", &dir).unwrap();

    assert!(session.is_pending());
    assert!(session.user().is_none(), "must not resolve before the delay");

    assert!(session.complete(ticket));
    let user = session.user().unwrap();
    assert_eq!(user.email, "admin@gov.in");
    assert_eq!(user.display_name, "Ramesh Gupta");
}

#[test]
fn unknown_email_resolves_to_default_account() {
    let dir = directory();
    let mut session = SessionState::default();
    let ticket = session.submit("nobody@example.com", &dir).unwrap();
    assert!(session.user().is_none());
    assert!(session.complete(ticket));
    assert_eq!(session.user(), Some(dir.default_account()));
}

#[test]
fn empty_email_still_logs_in() {
    let dir = directory();
    let mut session = SessionState::default();
    let ticket = session.submit("", &dir).unwrap();
    assert!(session.complete(ticket));
    assert_eq!(session.user().unwrap().display_name, "Paritosh");
}

#[test]
fn resubmit_supersedes_earlier_ticket() {
    let dir = directory();
    let mut session = SessionState::default();
    let first = session.submit("admin@gov.in", &dir).unwrap();
    let second = session.submit("citizen@gmail.com", &dir).unwrap();
    assert_ne!(first, second);

    assert!(!session.complete(first));
    assert!(session.user().is_none());

    assert!(session.complete(second));
    assert_eq!(session.user().unwrap().display_name, "Rahul Kumar");
}

#[test]
fn completion_applies_once() {
    let dir = directory();
    let mut session = SessionState::default();
    let ticket = session.submit("admin@gov.in", &dir).unwrap();
    assert!(session.complete(ticket));
    assert!(!session.complete(ticket));
}

#[test]
fn no_transition_back_once_logged_in() {
    let dir = directory();
    let mut session = SessionState::default();
    let ticket = session.submit("admin@gov.in", &dir).unwrap();
    session.complete(ticket);

    assert_eq!(session.submit("citizen@gmail.com", &dir), None);
    assert_eq!(session.user().unwrap().display_name, "Ramesh Gupta");
}

#[test]
fn complete_without_submit_is_ignored() {
    let mut session = SessionState::default();
    assert!(!session.complete(1));
    assert_eq!(session.phase, LoginPhase::LoggedOut);
}

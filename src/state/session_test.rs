use super::*;

fn user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        national_id: "123456789012".to_owned(),
    }
}

// =============================================================
// SessionState lifecycle
// =============================================================

#[test]
fn session_starts_unknown() {
    assert_eq!(SessionState::default(), SessionState::Unknown);
}

#[test]
fn unknown_holds_no_user() {
    let state = SessionState::Unknown;
    assert!(state.user().is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_exposes_the_principal() {
    let state = SessionState::Authenticated(user());
    assert!(state.is_authenticated());
    assert_eq!(state.user().map(|u| u.name.as_str()), Some("Asha"));
}

#[test]
fn unauthenticated_holds_no_user() {
    let state = SessionState::Unauthenticated;
    assert!(state.user().is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Sign-out
// =============================================================

#[test]
fn sign_out_clears_the_session_when_logout_succeeds() {
    assert_eq!(
        SessionState::after_sign_out(LogoutOutcome::Ack),
        SessionState::Unauthenticated
    );
}

#[test]
fn sign_out_clears_the_session_even_on_network_failure() {
    assert_eq!(
        SessionState::after_sign_out(LogoutOutcome::NetworkFailure),
        SessionState::Unauthenticated
    );
}

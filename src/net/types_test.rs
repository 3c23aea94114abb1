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
// Wire shapes
// =============================================================

#[test]
fn principal_response_parses_backend_shape() {
    let body = serde_json::json!({
        "valid": true,
        "user": {
            "id": "u-1",
            "name": "Asha",
            "email": "asha@example.com",
            "national_id": "123456789012"
        }
    });
    let parsed: PrincipalResponse = serde_json::from_value(body).expect("principal");
    assert_eq!(parsed.user, user());
}

#[test]
fn error_response_detail_is_optional() {
    let parsed: ErrorResponse = serde_json::from_value(serde_json::json!({})).expect("error body");
    assert!(parsed.detail.is_none());

    let parsed: ErrorResponse =
        serde_json::from_value(serde_json::json!({"detail": "Invalid email or password"}))
            .expect("error body");
    assert_eq!(parsed.detail.as_deref(), Some("Invalid email or password"));
}

// =============================================================
// Outcome messages
// =============================================================

#[test]
fn login_success_has_no_error_message() {
    assert!(LoginOutcome::Authenticated(user()).error_message().is_none());
}

#[test]
fn login_rejection_surfaces_server_detail_verbatim() {
    let outcome = LoginOutcome::InvalidCredentials("Invalid email or password".to_owned());
    assert_eq!(
        outcome.error_message().as_deref(),
        Some("Invalid email or password")
    );
}

#[test]
fn login_network_failure_is_generic_connectivity_message() {
    assert_eq!(
        LoginOutcome::NetworkFailure.error_message().as_deref(),
        Some("Failed to connect to server")
    );
}

#[test]
fn signup_rejection_surfaces_server_detail_verbatim() {
    let outcome = SignupOutcome::Rejected("Email already registered".to_owned());
    assert_eq!(
        outcome.error_message().as_deref(),
        Some("Email already registered")
    );
}

#[test]
fn signup_created_has_no_error_message() {
    assert!(SignupOutcome::Created.error_message().is_none());
}

//! Wire types and call outcomes for the authentication service.
//!
//! Every remote operation resolves to a closed outcome enum rather than a
//! `Result`: "no session" and "bad credentials" are normal protocol
//! answers, not transport errors, and call sites are expected to match
//! every variant explicitly. Only `NetworkFailure` represents the
//! transport itself giving up.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated principal as reported by the service.
///
/// `national_id` arrives in canonical form (12 digits, no separators);
/// screens format it for display via [`crate::util::national_id`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub national_id: String,
}

/// Body of a successful `GET /api/auth/verify` or `POST /api/auth/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct PrincipalResponse {
    pub user: User,
}

/// Error body shape used by the service for every rejection.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorResponse {
    pub detail: Option<String>,
}

/// Result of a session verification round-trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The implicit session context is valid; the server returned the principal.
    Authenticated(User),
    /// No valid session. A normal outcome, not an error.
    Unauthenticated,
    /// The verification endpoint could not be reached or answered garbage.
    NetworkFailure,
}

/// Result of a login attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted; the session cookie is now set by the server.
    Authenticated(User),
    /// Credentials rejected, with the server's human-readable reason.
    InvalidCredentials(String),
    NetworkFailure,
}

/// Result of a signup attempt. Creation does not establish a session;
/// the caller must log in separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    Created,
    /// Server-side validation rejected the profile (duplicate email,
    /// weak password, ...), with the human-readable reason.
    Rejected(String),
    NetworkFailure,
}

/// Result of a logout request. Best-effort: callers clear local session
/// state regardless of which variant comes back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutOutcome {
    Ack,
    NetworkFailure,
}

impl LoginOutcome {
    /// Message to surface near the login form, if the outcome carries one.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Authenticated(_) => None,
            Self::InvalidCredentials(m) => Some(m.clone()),
            Self::NetworkFailure => Some("Failed to connect to server".to_owned()),
        }
    }
}

impl SignupOutcome {
    /// Message to surface near the signup form, if the outcome carries one.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Created => None,
            Self::Rejected(m) => Some(m.clone()),
            Self::NetworkFailure => Some("Failed to connect to server".to_owned()),
        }
    }
}

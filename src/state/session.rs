#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{LogoutOutcome, User};

/// The page-lifetime session store: the single source of truth for who is
/// logged in, shared by every screen via context.
///
/// Starts `Unknown` on page load and moves to `Authenticated` or
/// `Unauthenticated` only as the result of a completed remote call. It
/// never returns to `Unknown` within one page lifetime. Each write fully
/// replaces the prior state; there is no merging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No verification has completed yet.
    #[default]
    Unknown,
    Authenticated(User),
    Unauthenticated,
}

impl SessionState {
    /// The current principal, when one is known.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unknown | Self::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The store state after sign-out. Logout is best-effort, so the
    /// server's answer is irrelevant: a missing acknowledgement must never
    /// leave the client believing it is still authenticated.
    pub fn after_sign_out(outcome: LogoutOutcome) -> Self {
        match outcome {
            LogoutOutcome::Ack | LogoutOutcome::NetworkFailure => Self::Unauthenticated,
        }
    }
}

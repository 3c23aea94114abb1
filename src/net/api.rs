//! REST calls to the remote authentication service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. The session
//! credential is an HTTP-only cookie the browser attaches on its own; no
//! function here ever sees or stores it.
//! Server-side (SSR): stubs resolving to `NetworkFailure`, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every function resolves to one of the closed outcome enums in
//! [`super::types`] — never a panic and never an unhandled error. A
//! non-OK status is a protocol answer (no session, bad credentials, ...);
//! only an unreachable endpoint or an unparsable success body maps to
//! `NetworkFailure`.

#![allow(clippy::unused_async)]

use super::types::{LoginOutcome, LogoutOutcome, SignupOutcome, VerifyOutcome};

/// Ask the service whether the implicit session context is valid.
///
/// `Unauthenticated` is the normal answer for a missing or expired
/// session, not an error.
pub async fn verify() -> VerifyOutcome {
    #[cfg(feature = "hydrate")]
    {
        use super::types::PrincipalResponse;

        let Ok(resp) = gloo_net::http::Request::get("/api/auth/verify").send().await else {
            return VerifyOutcome::NetworkFailure;
        };
        if !resp.ok() {
            return VerifyOutcome::Unauthenticated;
        }
        match resp.json::<PrincipalResponse>().await {
            Ok(body) => VerifyOutcome::Authenticated(body.user),
            Err(_) => VerifyOutcome::NetworkFailure,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        VerifyOutcome::NetworkFailure
    }
}

/// Attempt to log in. On success the server establishes the session as a
/// side effect; the returned principal is the new SessionStore payload.
pub async fn login(email: &str, password: &str) -> LoginOutcome {
    #[cfg(feature = "hydrate")]
    {
        use super::types::PrincipalResponse;

        let body = serde_json::json!({ "email": email, "password": password });
        let Ok(req) = gloo_net::http::Request::post("/api/auth/login").json(&body) else {
            return LoginOutcome::NetworkFailure;
        };
        let Ok(resp) = req.send().await else {
            return LoginOutcome::NetworkFailure;
        };
        if resp.ok() {
            match resp.json::<PrincipalResponse>().await {
                Ok(body) => LoginOutcome::Authenticated(body.user),
                Err(_) => LoginOutcome::NetworkFailure,
            }
        } else {
            LoginOutcome::InvalidCredentials(
                error_detail(resp).await.unwrap_or_else(|| "Login failed".to_owned()),
            )
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        LoginOutcome::NetworkFailure
    }
}

/// Create an account. Does not establish a session; the caller must log
/// in separately. `national_id` must already be canonical (12 digits).
pub async fn signup(name: &str, email: &str, national_id: &str, password: &str) -> SignupOutcome {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({
            "name": name,
            "email": email,
            "national_id": national_id,
            "password": password,
        });
        let Ok(req) = gloo_net::http::Request::post("/api/auth/signup").json(&body) else {
            return SignupOutcome::NetworkFailure;
        };
        let Ok(resp) = req.send().await else {
            return SignupOutcome::NetworkFailure;
        };
        if resp.ok() {
            SignupOutcome::Created
        } else {
            SignupOutcome::Rejected(
                error_detail(resp).await.unwrap_or_else(|| "Signup failed".to_owned()),
            )
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, national_id, password);
        SignupOutcome::NetworkFailure
    }
}

/// Tear down the server-side session. Best-effort: callers must clear
/// local session state whatever this returns.
pub async fn logout() -> LogoutOutcome {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::post("/api/auth/logout").send().await {
            Ok(resp) if resp.ok() => LogoutOutcome::Ack,
            _ => LogoutOutcome::NetworkFailure,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        LogoutOutcome::NetworkFailure
    }
}

/// Pull the `detail` message out of a rejection body, if there is one.
#[cfg(feature = "hydrate")]
async fn error_detail(resp: gloo_net::http::Response) -> Option<String> {
    resp.json::<super::types::ErrorResponse>().await.ok()?.detail
}

use super::*;
use crate::net::types::User;

fn user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        national_id: "123456789012".to_owned(),
    }
}

fn protected_guard() -> AuthGuard {
    AuthGuard::new(GuardPolicy::RequireAuthenticated, "/guest")
}

fn logged_out_guard() -> AuthGuard {
    AuthGuard::new(GuardPolicy::RequireUnauthenticated, "/")
}

// =============================================================
// RequireAuthenticated (fail closed)
// =============================================================

#[test]
fn protected_screen_stays_when_authenticated() {
    let mut guard = protected_guard();
    let generation = guard.begin();

    let resolution = guard
        .resolve(generation, VerifyOutcome::Authenticated(user()))
        .expect("current generation");

    assert_eq!(resolution.decision, NavDecision::Stay);
    assert_eq!(resolution.store, Some(SessionState::Authenticated(user())));
    assert_eq!(guard.phase(), RenderPhase::Ready);
}

#[test]
fn protected_screen_redirects_when_unauthenticated() {
    let mut guard = protected_guard();
    let generation = guard.begin();

    let resolution = guard
        .resolve(generation, VerifyOutcome::Unauthenticated)
        .expect("current generation");

    assert_eq!(resolution.decision, NavDecision::Redirect("/guest"));
    assert_eq!(resolution.store, Some(SessionState::Unauthenticated));
    assert_eq!(guard.phase(), RenderPhase::Redirecting);
}

#[test]
fn protected_screen_redirects_on_network_failure() {
    // An unreachable verification endpoint must never grant access.
    let mut guard = protected_guard();
    let generation = guard.begin();

    let resolution = guard
        .resolve(generation, VerifyOutcome::NetworkFailure)
        .expect("current generation");

    assert_eq!(resolution.decision, NavDecision::Redirect("/guest"));
    assert_eq!(resolution.store, None);
    assert_eq!(guard.phase(), RenderPhase::Redirecting);
}

#[test]
fn protected_screen_navigation_is_issued_exactly_once() {
    let mut guard = protected_guard();
    let generation = guard.begin();

    assert!(guard.resolve(generation, VerifyOutcome::Unauthenticated).is_some());
    // Resolved is terminal for this cycle; a duplicate result yields nothing.
    assert!(guard.resolve(generation, VerifyOutcome::Unauthenticated).is_none());
}

// =============================================================
// RequireUnauthenticated (fail open)
// =============================================================

#[test]
fn logged_out_screen_redirects_when_authenticated() {
    let mut guard = logged_out_guard();
    let generation = guard.begin();

    let resolution = guard
        .resolve(generation, VerifyOutcome::Authenticated(user()))
        .expect("current generation");

    assert_eq!(resolution.decision, NavDecision::Redirect("/"));
    assert_eq!(resolution.store, Some(SessionState::Authenticated(user())));
    assert_eq!(guard.phase(), RenderPhase::Redirecting);

    // No second navigation can follow.
    assert!(guard.resolve(generation, VerifyOutcome::Authenticated(user())).is_none());
}

#[test]
fn logged_out_screen_stays_when_unauthenticated() {
    let mut guard = logged_out_guard();
    let generation = guard.begin();

    let resolution = guard
        .resolve(generation, VerifyOutcome::Unauthenticated)
        .expect("current generation");

    assert_eq!(resolution.decision, NavDecision::Stay);
    assert_eq!(resolution.store, Some(SessionState::Unauthenticated));
    assert_eq!(guard.phase(), RenderPhase::Ready);
}

#[test]
fn logged_out_screen_stays_on_network_failure() {
    let mut guard = logged_out_guard();
    let generation = guard.begin();

    let resolution = guard
        .resolve(generation, VerifyOutcome::NetworkFailure)
        .expect("current generation");

    assert_eq!(resolution.decision, NavDecision::Stay);
    assert_eq!(resolution.store, None);
    assert_eq!(guard.phase(), RenderPhase::Ready);
}

// =============================================================
// Generation tokens / cancellation
// =============================================================

#[test]
fn retired_guard_discards_the_inflight_result() {
    let mut guard = protected_guard();
    let generation = guard.begin();
    guard.retire();

    assert!(guard.resolve(generation, VerifyOutcome::Authenticated(user())).is_none());
    // The discarded result must not have advanced the state machine.
    assert_eq!(guard.state(), &GuardState::Verifying);
}

#[test]
fn restarted_cycle_invalidates_the_previous_token() {
    let mut guard = logged_out_guard();
    let first = guard.begin();
    let second = guard.begin();
    assert_ne!(first, second);

    assert!(guard.resolve(first, VerifyOutcome::Authenticated(user())).is_none());
    assert!(guard.resolve(second, VerifyOutcome::Unauthenticated).is_some());
}

#[test]
fn result_without_begin_is_ignored() {
    let mut guard = protected_guard();
    assert!(guard.resolve(0, VerifyOutcome::Unauthenticated).is_none());
    assert_eq!(guard.state(), &GuardState::Idle);
}

// =============================================================
// Idempotence and phase sequences
// =============================================================

#[test]
fn repeated_verification_resolves_identically() {
    // Two full cycles against an unchanged remote session land in the
    // same resolved state both times.
    let mut guard = protected_guard();

    let first = guard.begin();
    let a = guard.resolve(first, VerifyOutcome::Authenticated(user())).expect("first cycle");

    let second = guard.begin();
    let b = guard.resolve(second, VerifyOutcome::Authenticated(user())).expect("second cycle");

    assert_eq!(a, b);
    assert_eq!(guard.state(), &GuardState::Resolved(VerifyOutcome::Authenticated(user())));
}

#[test]
fn profile_without_session_goes_loading_then_redirecting() {
    // Fresh page load on a protected screen with no valid remote session.
    let mut guard = protected_guard();
    assert_eq!(guard.phase(), RenderPhase::Loading);

    let generation = guard.begin();
    assert_eq!(guard.phase(), RenderPhase::Loading);

    let resolution = guard
        .resolve(generation, VerifyOutcome::Unauthenticated)
        .expect("current generation");
    assert_eq!(guard.phase(), RenderPhase::Redirecting);
    assert_eq!(resolution.decision, NavDecision::Redirect("/guest"));
    assert_eq!(resolution.store, Some(SessionState::Unauthenticated));
}

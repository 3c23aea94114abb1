//! Session guard: the state machine tying session verification to
//! navigation and rendering for one screen mount.
//!
//! DESIGN
//! ======
//! Every screen used to reimplement verify-then-branch by hand; the guard
//! centralizes it. A screen owns one `AuthGuard` per mount, configured
//! with a [`GuardPolicy`] and the destination to redirect to when the
//! policy demands navigation. The machine itself is pure: transitions
//! return the store write and navigation decision as data, and the
//! hydrate-only `run` helper wires them to signals, the network client,
//! and the router.
//!
//! Generation tokens make cancellation soft: `begin` hands out a token,
//! and a resolution is applied only while its token is current. A screen
//! that unmounts mid-verification retires the guard, so the eventual
//! result produces no store write and no navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::VerifyOutcome;
use crate::state::session::SessionState;

/// Which way a screen gates on the verification outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Protected screens (home, profile): only an authenticated caller may
    /// stay. Network failure redirects too — an unreachable verification
    /// endpoint must never grant access.
    RequireAuthenticated,
    /// Logged-out screens (guest, login, signup): an authenticated caller
    /// is sent to the authenticated area. Network failure stays put; the
    /// guarded screen is already safe to show.
    RequireUnauthenticated,
}

/// Lifecycle of one guarded mount. `Resolved` is terminal; a remounted
/// screen starts over with a fresh guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardState {
    Idle,
    Verifying,
    Resolved(VerifyOutcome),
}

/// What the screen may render right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPhase {
    /// Verification has not completed; show a neutral placeholder.
    Loading,
    /// Navigation has been issued; render nothing.
    Redirecting,
    /// The policy permits staying; render the real content.
    Ready,
}

/// Navigation decision yielded by a resolving transition, exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDecision {
    Stay,
    Redirect(&'static str),
}

/// Everything a completed verification fans out to: an optional session
/// store write and a navigation decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub store: Option<SessionState>,
    pub decision: NavDecision,
}

/// Per-screen session guard. See the module docs for the lifecycle.
#[derive(Clone, Debug)]
pub struct AuthGuard {
    policy: GuardPolicy,
    redirect_to: &'static str,
    state: GuardState,
    generation: u64,
}

impl AuthGuard {
    pub fn new(policy: GuardPolicy, redirect_to: &'static str) -> Self {
        Self {
            policy,
            redirect_to,
            state: GuardState::Idle,
            generation: 0,
        }
    }

    /// Start a verification cycle and return its generation token.
    ///
    /// Any result still in flight from an earlier cycle is implicitly
    /// discarded, since its token is no longer current.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = GuardState::Verifying;
        self.generation
    }

    /// Invalidate any in-flight verification. Called when the owning
    /// screen unmounts; stale results must never retroactively mutate
    /// state for a screen the user has already left.
    pub fn retire(&mut self) {
        self.generation += 1;
    }

    /// Apply a verification result, if `generation` is still current and
    /// the guard is actually waiting for one. Returns what to do with it;
    /// `None` means the result is stale and must be ignored outright.
    pub fn resolve(&mut self, generation: u64, outcome: VerifyOutcome) -> Option<Resolution> {
        if generation != self.generation || self.state != GuardState::Verifying {
            return None;
        }

        let resolution = Self::interpret(self.policy, self.redirect_to, &outcome);
        self.state = GuardState::Resolved(outcome);
        Some(resolution)
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// The render phase implied by the current state and policy.
    pub fn phase(&self) -> RenderPhase {
        match &self.state {
            GuardState::Idle | GuardState::Verifying => RenderPhase::Loading,
            GuardState::Resolved(outcome) => {
                if Self::navigates(self.policy, outcome) {
                    RenderPhase::Redirecting
                } else {
                    RenderPhase::Ready
                }
            }
        }
    }

    fn interpret(
        policy: GuardPolicy,
        redirect_to: &'static str,
        outcome: &VerifyOutcome,
    ) -> Resolution {
        let store = match outcome {
            VerifyOutcome::Authenticated(user) => {
                Some(SessionState::Authenticated(user.clone()))
            }
            VerifyOutcome::Unauthenticated => Some(SessionState::Unauthenticated),
            // An unreachable endpoint says nothing about the session;
            // leave the store as it was.
            VerifyOutcome::NetworkFailure => None,
        };
        let decision = if Self::navigates(policy, outcome) {
            NavDecision::Redirect(redirect_to)
        } else {
            NavDecision::Stay
        };
        Resolution { store, decision }
    }

    fn navigates(policy: GuardPolicy, outcome: &VerifyOutcome) -> bool {
        match policy {
            GuardPolicy::RequireAuthenticated => {
                !matches!(outcome, VerifyOutcome::Authenticated(_))
            }
            GuardPolicy::RequireUnauthenticated => {
                matches!(outcome, VerifyOutcome::Authenticated(_))
            }
        }
    }
}

/// Drive one guard cycle for a mounted screen: call the verification
/// endpoint, apply the result to the guard, fan the store write out to
/// the shared session signal, and navigate if the policy says so.
///
/// The navigation callback runs at most once per cycle, after the guard
/// has entered `Redirecting`.
#[cfg(feature = "hydrate")]
pub fn run(
    guard: leptos::prelude::RwSignal<AuthGuard>,
    session: leptos::prelude::RwSignal<SessionState>,
    navigate: impl Fn(&'static str) + 'static,
) {
    use leptos::prelude::{Set, Update};

    let Some(generation) = guard.try_update(AuthGuard::begin) else {
        return;
    };

    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::verify().await;
        // try_update returns None once the owning screen is disposed, and
        // resolve returns None for a retired generation; either way the
        // stale result is dropped here.
        let Some(resolution) = guard
            .try_update(|g| g.resolve(generation, outcome))
            .flatten()
        else {
            return;
        };

        if let Some(next) = resolution.store {
            session.set(next);
        }
        if let NavDecision::Redirect(to) = resolution.decision {
            navigate(to);
        }
    });
}

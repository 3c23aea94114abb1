//! Sign-out button shared by the authenticated screens.
//!
//! The sequence is fixed: tell the server, then unconditionally clear the
//! local session, then navigate to the guest landing. Logout is
//! best-effort — the absence of a server acknowledgement must never leave
//! the client believing it is still authenticated.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Button that ends the current session and returns to the guest landing.
/// Only reachable from a `Ready` render of an authenticated screen.
#[component]
pub fn SignOutButton() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::net::types::LogoutOutcome;

                let outcome = crate::net::api::logout().await;
                if outcome == LogoutOutcome::NetworkFailure {
                    leptos::logging::warn!("logout request failed; clearing local session anyway");
                }
                session.set(SessionState::after_sign_out(outcome));
                navigate("/guest", leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &navigate);
        }
    };

    view! {
        <button class="btn btn--danger" on:click=on_click>
            "Sign Out"
        </button>
    }
}

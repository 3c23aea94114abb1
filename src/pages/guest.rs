//! Guest landing page for callers without a session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::page_footer::PageFooter;
use crate::state::guard::{AuthGuard, GuardPolicy, RenderPhase};
use crate::state::session::SessionState;

/// Guest landing — a caller who turns out to hold a valid session is sent
/// straight to the home screen; everyone else gets login/signup buttons.
#[component]
pub fn GuestPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let guard = RwSignal::new(AuthGuard::new(GuardPolicy::RequireUnauthenticated, "/"));
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let nav = navigate.clone();
        crate::state::guard::run(guard, session, move |to| nav(to, NavigateOptions::default()));
        on_cleanup(move || {
            guard.try_update(AuthGuard::retire);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    let to_login = {
        let navigate = navigate.clone();
        move |_| navigate("/login", NavigateOptions::default())
    };
    let to_signup = move |_| navigate("/signup", NavigateOptions::default());

    view! {
        <div class="guest-page">
            {move || match guard.get().phase() {
                RenderPhase::Loading => view! { <p class="page-status">"Loading..."</p> }.into_any(),
                RenderPhase::Redirecting => ().into_any(),
                RenderPhase::Ready => view! {
                    <div class="guest-page__content">
                        <h1>"Welcome to SecureDash"</h1>
                        <p class="guest-page__subtitle">
                            "Please log in or sign up to access the secure dashboard"
                        </p>
                        <div class="guest-page__actions">
                            <button class="btn btn--primary" on:click=to_login.clone()>
                                "Login"
                            </button>
                            <button class="btn" on:click=to_signup.clone()>
                                "Sign Up"
                            </button>
                        </div>
                    </div>
                    <PageFooter/>
                }
                .into_any(),
            }}
        </div>
    }
}

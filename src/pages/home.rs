//! Home page: the protected dashboard behind the session guard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::page_footer::PageFooter;
use crate::components::sign_out::SignOutButton;
use crate::state::guard::{AuthGuard, GuardPolicy, RenderPhase};
use crate::state::session::SessionState;

/// Home page — verification must succeed before any protected content
/// renders; everything else is sent to the guest landing.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let guard = RwSignal::new(AuthGuard::new(GuardPolicy::RequireAuthenticated, "/guest"));
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let nav = navigate.clone();
        crate::state::guard::run(guard, session, move |to| nav(to, NavigateOptions::default()));
        on_cleanup(move || {
            guard.try_update(AuthGuard::retire);
        });
    }

    let to_profile = move |_| navigate("/profile", NavigateOptions::default());
    let greeting = move || {
        session
            .get()
            .user()
            .map(|u| format!("Hello, {}!", u.name))
            .unwrap_or_default()
    };

    view! {
        <div class="home-page">
            {move || match guard.get().phase() {
                RenderPhase::Loading => view! { <p class="page-status">"Loading..."</p> }.into_any(),
                RenderPhase::Redirecting => ().into_any(),
                RenderPhase::Ready => view! {
                    <header class="home-page__header">
                        <button class="btn" on:click=to_profile.clone()>
                            "View Profile"
                        </button>
                        <SignOutButton/>
                    </header>
                    <div class="home-page__welcome">
                        <h1>{greeting}</h1>
                        <p class="home-page__subtitle">"Welcome to your secure dashboard"</p>
                    </div>
                    <PageFooter/>
                }
                .into_any(),
            }}
        </div>
    }
}

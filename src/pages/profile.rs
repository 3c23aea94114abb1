//! Profile page: identity details for the authenticated user.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::page_footer::PageFooter;
use crate::components::sign_out::SignOutButton;
use crate::state::guard::{AuthGuard, GuardPolicy, RenderPhase};
use crate::state::session::SessionState;
use crate::util::national_id;

/// Profile page — protected like home; shows the SessionStore principal
/// with the national ID in its grouped display form.
#[component]
pub fn ProfilePage() -> impl IntoView {
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

    let to_home = move |_| navigate("/", NavigateOptions::default());

    view! {
        <div class="profile-page">
            {move || match guard.get().phase() {
                RenderPhase::Loading => {
                    view! { <p class="page-status">"Loading profile..."</p> }.into_any()
                }
                RenderPhase::Redirecting => ().into_any(),
                RenderPhase::Ready => view! {
                    <header class="profile-page__header">
                        <button class="btn" on:click=to_home.clone()>
                            "Back to Home"
                        </button>
                        <SignOutButton/>
                    </header>
                    <div class="profile-card">
                        <h1>"Your Profile"</h1>
                        {move || {
                            session.get().user().map(|user| {
                                view! {
                                    <dl class="profile-card__fields">
                                        <dt>"Name"</dt>
                                        <dd>{user.name.clone()}</dd>
                                        <dt>"Email"</dt>
                                        <dd>{user.email.clone()}</dd>
                                        <dt>"National ID"</dt>
                                        <dd>{national_id::format_display(&user.national_id)}</dd>
                                    </dl>
                                }
                            })
                        }}
                    </div>
                    <PageFooter/>
                }
                .into_any(),
            }}
        </div>
    }
}

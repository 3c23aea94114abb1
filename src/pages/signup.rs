//! Signup page: profile form with live national-ID formatting.
//!
//! Signup deliberately does not establish a session; a created account is
//! sent to the login page to authenticate explicitly.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::page_footer::PageFooter;
use crate::state::forms::SignupForm;
use crate::state::guard::{AuthGuard, GuardPolicy, RenderPhase};
use crate::state::session::SessionState;

/// Signup page — an already-authenticated caller is redirected home.
#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let guard = RwSignal::new(AuthGuard::new(GuardPolicy::RequireUnauthenticated, "/"));
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let nav = navigate.clone();
        crate::state::guard::run(guard, session, move |to| nav(to, leptos_router::NavigateOptions::default()));
        on_cleanup(move || {
            guard.try_update(AuthGuard::retire);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    let form = RwSignal::new(SignupForm::default());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        // Local validation catches malformed input before any round trip;
        // the canonical national ID is what goes on the wire.
        let submission = match form.get_untracked().validate() {
            Ok(s) => s,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::SignupOutcome;

            submitting.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::signup(
                    &submission.name,
                    &submission.email,
                    &submission.national_id,
                    &submission.password,
                )
                .await;
                submitting.set(false);
                match outcome {
                    SignupOutcome::Created => {
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    other => error.set(other.error_message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&submission, &navigate);
    };

    view! {
        <div class="signup-page">
            {move || match guard.get().phase() {
                RenderPhase::Loading => view! { <p class="page-status">"Loading..."</p> }.into_any(),
                RenderPhase::Redirecting => ().into_any(),
                RenderPhase::Ready => view! {
                    <div class="form-card">
                        <h1>"Sign Up"</h1>
                        <form on:submit=on_submit.clone()>
                            <label class="form-card__label">
                                "Name"
                                <input
                                    class="form-card__input"
                                    type="text"
                                    placeholder="Enter your name"
                                    prop:value=move || form.get().name
                                    on:input=move |ev| {
                                        form.update(|f| f.name = event_target_value(&ev));
                                    }
                                />
                            </label>
                            <label class="form-card__label">
                                "Email"
                                <input
                                    class="form-card__input"
                                    type="email"
                                    placeholder="Enter your email"
                                    prop:value=move || form.get().email
                                    on:input=move |ev| {
                                        form.update(|f| f.email = event_target_value(&ev));
                                    }
                                />
                            </label>
                            <label class="form-card__label">
                                "National ID"
                                <input
                                    class="form-card__input"
                                    type="text"
                                    inputmode="numeric"
                                    placeholder="1234 5678 9012"
                                    prop:value=move || form.get().national_id
                                    on:input=move |ev| {
                                        form.update(|f| f.set_national_id(&event_target_value(&ev)));
                                    }
                                />
                            </label>
                            <label class="form-card__label">
                                "Password"
                                <input
                                    class="form-card__input"
                                    type="password"
                                    placeholder="Enter password"
                                    prop:value=move || form.get().password
                                    on:input=move |ev| {
                                        form.update(|f| f.password = event_target_value(&ev));
                                    }
                                />
                            </label>
                            <label class="form-card__label">
                                "Confirm Password"
                                <input
                                    class="form-card__input"
                                    type="password"
                                    placeholder="Re-enter password"
                                    prop:value=move || form.get().confirm_password
                                    on:input=move |ev| {
                                        form.update(|f| f.confirm_password = event_target_value(&ev));
                                    }
                                />
                            </label>
                            <Show when=move || error.get().is_some()>
                                <p class="form-card__error">{move || error.get()}</p>
                            </Show>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                prop:disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Signing up..." } else { "Sign Up" }}
                            </button>
                        </form>
                        <p class="form-card__hint">
                            "Already registered? " <a href="/login">"Login"</a>
                        </p>
                    </div>
                    <PageFooter/>
                }
                .into_any(),
            }}
        </div>
    }
}

//! Login page: email/password form plus the logged-out session guard.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::page_footer::PageFooter;
use crate::state::forms::LoginForm;
use crate::state::guard::{AuthGuard, GuardPolicy, RenderPhase};
use crate::state::session::SessionState;

/// Login page — an already-authenticated caller is redirected home before
/// the form ever renders.
#[component]
pub fn LoginPage() -> impl IntoView {
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

    let form = RwSignal::new(LoginForm::default());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        if let Err(message) = form.get_untracked().validate() {
            error.set(Some(message));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::LoginOutcome;

            submitting.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let LoginForm { email, password } = form.get_untracked();
                let outcome = crate::net::api::login(&email, &password).await;
                submitting.set(false);
                match outcome {
                    LoginOutcome::Authenticated(user) => {
                        // The session cookie is now set server-side; the
                        // principal becomes the shared session state.
                        session.set(SessionState::Authenticated(user));
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    other => error.set(other.error_message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&session, &navigate);
    };

    view! {
        <div class="login-page">
            {move || match guard.get().phase() {
                RenderPhase::Loading => view! { <p class="page-status">"Loading..."</p> }.into_any(),
                RenderPhase::Redirecting => ().into_any(),
                RenderPhase::Ready => view! {
                    <div class="form-card">
                        <h1>"Login"</h1>
                        <form on:submit=on_submit.clone()>
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
                            <Show when=move || error.get().is_some()>
                                <p class="form-card__error">{move || error.get()}</p>
                            </Show>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                prop:disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Logging in..." } else { "Login" }}
                            </button>
                        </form>
                        <p class="form-card__hint">
                            "No account yet? " <a href="/signup">"Sign up"</a>
                        </p>
                    </div>
                    <PageFooter/>
                }
                .into_any(),
            }}
        </div>
    }
}

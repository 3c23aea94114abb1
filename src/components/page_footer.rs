//! Footer shown at the bottom of every page.

use leptos::prelude::*;

#[component]
pub fn PageFooter() -> impl IntoView {
    view! {
        <footer class="page-footer">
            <p class="page-footer__text">"SecureDash"</p>
        </footer>
    }
}

// 404 - catch-all for unknown paths
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <p class="page-description">"Page not found."</p>
            <div class="not-found-actions">
                <a href="/" class="btn btn-outline btn-sm">"Go Home"</a>
            </div>
        </section>
    }
}

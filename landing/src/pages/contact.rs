use crate::config::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let email = SiteConfig::global().support_email.as_str();
    view! {
        <section class="prose-page">
            <div class="container narrow">
                <h1 class="page-title">"Contact"</h1>
                <p class="page-description">"Questions or feedback? We’d love to hear from you."</p>
                <div class="contact-card">
                    <p>{format!("Email: {email}")}</p>
                </div>
            </div>
        </section>
    }
}

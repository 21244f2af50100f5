use crate::config::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    let brand = SiteConfig::global().brand.as_str();
    view! {
        <section id="about" class="prose-page">
            <div class="container narrow">
                <h1 class="page-title">{format!("About {brand}")}</h1>
                <p class="page-description">
                    {format!("{brand} helps students discover verified internships tailored to their skills and goals. ")}
                    "With smart matching, a personalized dashboard, and seamless tracking, we streamline your journey from search to offer."
                </p>
            </div>
        </section>
    }
}

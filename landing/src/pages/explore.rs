// Explore page - banner + this week's picks
use crate::content::EXPLORE_RECOMMENDATIONS_TITLE;
use crate::motion::stagger_delay;
use crate::sections::Recommendations;
use leptos::prelude::*;

#[component]
pub fn ExplorePage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title fade-up" style=stagger_delay(0)>"Explore Internships"</h1>
                <p class="page-description">
                    "Browse curated roles across engineering, data, design, and product."
                </p>
            </div>
        </section>
        <Recommendations title=EXPLORE_RECOMMENDATIONS_TITLE />
    }
}

// Home page - hero, features, recommendations, stories
use crate::sections::{Features, Hero, Recommendations, Testimonials};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Features />
        <Recommendations />
        <Testimonials />
    }
}

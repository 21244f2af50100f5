use leptos::prelude::*;

use crate::content::{FEATURES, FeatureDescriptor};
use crate::motion::stagger_delay;

use super::icons::IconView;

#[component]
pub fn Features(#[prop(optional)] items: Option<&'static [FeatureDescriptor]>) -> impl IntoView {
    let items = items.unwrap_or(&FEATURES);
    view! {
        <section id="features" class="features">
            <div class="container">
                <h2 class="section-title fade-up">"Powerful features to find your fit"</h2>
                <div class="features-grid">
                    {items
                        .iter()
                        .enumerate()
                        .map(|(i, feature)| view! { <FeatureCard feature=*feature index=i /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: FeatureDescriptor, index: usize) -> impl IntoView {
    view! {
        <article class="feature-card fade-up" style=stagger_delay(index)>
            <div class="feature-icon">
                <IconView icon=feature.icon size=22 />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}

use leptos::prelude::*;

use crate::content::{AVATAR_COLORS, IconRef};
use crate::motion::stagger_delay;

use super::icons::IconView;
use super::product_mock::ProductMock;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero-backdrop" aria-hidden="true"></div>
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-title fade-up" style=stagger_delay(0)>
                            "Find the Perfect Internship for Your Skills and Goals"
                        </h1>
                        <p class="hero-description fade-up" style=stagger_delay(1)>
                            "AI-powered internship recommendations tailored for you. Discover verified roles, save favorites, and track your applications in one place."
                        </p>
                        <div class="hero-actions fade-up" style=stagger_delay(2)>
                            <a href="/explore" class="btn btn-primary">
                                "Explore Internships"
                                <IconView icon=IconRef::ArrowRight size=18 />
                            </a>
                            <a href="/about" class="btn btn-secondary">
                                "Learn More"
                            </a>
                        </div>
                        <div class="hero-proof fade-up" style=stagger_delay(3)>
                            <div class="avatar-stack">
                                {AVATAR_COLORS
                                    .iter()
                                    .map(|color| {
                                        view! {
                                            <span class="avatar" style=format!("background-color: {color}")></span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <p class="hero-proof-text">"Trusted by students from 100+ universities"</p>
                        </div>
                    </div>
                    <div class="hero-visual fade-up">
                        <ProductMock />
                    </div>
                </div>
            </div>
        </section>
    }
}

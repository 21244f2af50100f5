use leptos::prelude::*;

use crate::content::{TESTIMONIALS, Testimonial};
use crate::motion::stagger_delay;

#[component]
pub fn Testimonials(#[prop(optional)] items: Option<&'static [Testimonial]>) -> impl IntoView {
    let items = items.unwrap_or(&TESTIMONIALS);
    view! {
        <section class="testimonials">
            <div class="container">
                <h2 class="section-title fade-up">"Student Stories"</h2>
                <div class="testimonial-grid">
                    {items
                        .iter()
                        .enumerate()
                        .map(|(i, t)| {
                            view! {
                                <figure class="testimonial-card fade-up" style=stagger_delay(i)>
                                    <div class="testimonial-author">
                                        <span class=format!("testimonial-avatar {}", t.color.class())></span>
                                        <div>
                                            <p class="testimonial-name">{t.author}</p>
                                            <p class="testimonial-role">"Placed Intern"</p>
                                        </div>
                                    </div>
                                    <blockquote class="testimonial-quote">
                                        {format!("\u{201c}{}\u{201d}", t.quote)}
                                    </blockquote>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

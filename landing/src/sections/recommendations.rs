use leptos::prelude::*;

use crate::content::{DEFAULT_RECOMMENDATIONS_TITLE, IconRef, InternshipListing, LISTINGS};
use crate::motion::stagger_delay;

use super::icons::IconView;

/// Grid of example postings. Both the heading and the list fall back to the
/// built-in literals when not given.
#[component]
pub fn Recommendations(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] listings: Option<&'static [InternshipListing]>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| DEFAULT_RECOMMENDATIONS_TITLE.to_string());
    let listings = listings.unwrap_or(&LISTINGS);

    view! {
        <section class="recommendations">
            <div class="container">
                <h2 class="section-title fade-up">{title}</h2>
                <div class="listing-grid">
                    {listings
                        .iter()
                        .enumerate()
                        .map(|(i, listing)| view! { <ListingCard listing=*listing index=i /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ListingCard(listing: InternshipListing, index: usize) -> impl IntoView {
    view! {
        <article class="listing-card fade-up" style=stagger_delay(index)>
            <div class="listing-head">
                <div>
                    <h3 class="listing-role">{listing.role}</h3>
                    <p class="listing-company">{listing.company}</p>
                </div>
                <span class="listing-badge">"Featured"</span>
            </div>
            <div class="listing-location">
                <IconView icon=IconRef::MapPin size=16 />
                <span>{listing.location}</span>
            </div>
            <div class="listing-actions">
                // Inert placeholder: applications are not tracked.
                <button class="btn btn-outline btn-sm" type="button">
                    "Apply Now"
                    <IconView icon=IconRef::ArrowRight size=16 />
                </button>
            </div>
        </article>
    }
}

//! Product-like dashboard mockup shown beside the hero copy.
//!
//! Pure rendering of literal data: four match cards with progress bars and
//! three KPI tiles. Percentages go through [`percent_label`], so a score of
//! `0.87` always reads `87%` both as text and as the bar width.

use leptos::prelude::*;

use crate::content::{
    HEADLINE_MATCH, KPIS, KpiEntry, MATCH_CARDS, MatchCardEntry, percent_label,
};

#[component]
pub fn ProductMock(
    #[prop(optional)] cards: Option<&'static [MatchCardEntry]>,
    #[prop(optional)] kpis: Option<&'static [KpiEntry]>,
) -> impl IntoView {
    let cards = cards.unwrap_or(&MATCH_CARDS);
    let kpis = kpis.unwrap_or(&KPIS);

    view! {
        <div class="mock">
            <div class="mock-glow" aria-hidden="true"></div>
            <div class="mock-panel">
                <div class="mock-header">
                    <div>
                        <h3 class="mock-title">"Internship Match"</h3>
                        <p class="mock-subtitle">"Based on your skills"</p>
                    </div>
                    <span class="mock-badge">{format!("{} match", percent_label(HEADLINE_MATCH))}</span>
                </div>
                <div class="mock-cards">
                    {cards.iter().map(|card| view! { <MatchCard card=*card /> }).collect_view()}
                </div>
                <div class="mock-kpis">
                    {kpis
                        .iter()
                        .map(|kpi| {
                            view! {
                                <div class="kpi-tile">
                                    <div class=format!("kpi-swatch {}", kpi.color.class())></div>
                                    <p class="kpi-value">{kpi.value.to_string()}</p>
                                    <p class="kpi-label">{kpi.label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn MatchCard(card: MatchCardEntry) -> impl IntoView {
    let label = percent_label(card.match_score);
    let width = format!("width: {label}");

    view! {
        <div class="match-card">
            <div class="match-card-head">
                <div>
                    <p class="match-company">{card.company}</p>
                    <p class="match-role">{card.role}</p>
                </div>
                <span class="match-percent">{label}</span>
            </div>
            <div class="match-track">
                <div class="match-bar" style=width></div>
            </div>
        </div>
    }
}

//! Route → view scenarios, rendered to HTML off the browser.

use internconnect_landing::{Page, page_view};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pretty_assertions::assert_eq;

fn render_path(path: &str) -> String {
    let page = Page::from_path(path);
    Owner::new().with(|| page_view(page).to_html())
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in rendered page"))
}

#[test]
fn home_renders_sections_in_order() {
    let html = render_path("/");

    let hero = position(&html, "Find the Perfect Internship for Your Skills and Goals");
    let features = position(&html, "Powerful features to find your fit");
    let recommendations = position(&html, "Recommended Internships for You");
    let testimonials = position(&html, "Student Stories");
    assert!(hero < features && features < recommendations && recommendations < testimonials);

    assert_eq!(html.matches(r#"<article class="feature-card fade-up""#).count(), 4);
    assert_eq!(html.matches(r#"<article class="listing-card fade-up""#).count(), 6);
    assert_eq!(html.matches(r#"<figure class="testimonial-card fade-up""#).count(), 3);
    assert!(!html.contains("404"));
}

#[test]
fn home_hero_embeds_product_mock() {
    let html = render_path("/");
    assert!(html.contains("87% match"));
    assert!(html.contains(r#"href="/explore""#));
    assert!(html.contains(r#"href="/about""#));
    assert!(html.contains("Trusted by students from 100+ universities"));
}

#[test]
fn explore_uses_weekly_title() {
    let html = render_path("/explore");
    assert!(html.contains("Explore Internships"));
    assert!(html.contains("Top Picks This Week"));
    assert!(!html.contains("Recommended Internships for You"));
    assert_eq!(html.matches(r#"<article class="listing-card fade-up""#).count(), 6);
}

#[test]
fn about_and_contact_prose() {
    let about = render_path("/about");
    assert!(about.contains("About InternConnect"));
    assert!(about.contains("from search to offer"));

    let contact = render_path("/contact");
    assert!(contact.contains("Email: support@internconnect.example"));
}

#[test]
fn unknown_path_renders_only_not_found() {
    let html = render_path("/unknown-page");
    assert!(html.contains("404"));
    assert!(html.contains("Page not found."));
    assert!(html.contains(r#"<a href="/""#));
    assert_eq!(html.matches("<a ").count(), 1);
    assert!(!html.contains("Find the Perfect Internship"));
}

#[test]
fn navigating_home_to_about_switches_view() {
    let from = Page::from_path("/");
    let to = Page::from_path("/about");
    assert_eq!(from, Page::Home);
    assert_eq!(to, Page::About);
    assert_ne!(from.title(), to.title());

    let html = Owner::new().with(|| page_view(to).to_html());
    assert!(html.contains("About InternConnect"));
    assert!(!html.contains("Student Stories"));
}

#[test]
fn every_unrouted_path_is_not_found() {
    for path in ["/login", "/explore/42", "/about-us", "/index.html"] {
        assert_eq!(Page::from_path(path), Page::NotFound, "{path}");
        assert!(render_path(path).contains("Go Home"));
    }
}

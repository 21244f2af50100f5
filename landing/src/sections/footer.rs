use chrono::Datelike;
use leptos::prelude::*;

use crate::config::{ExternalLink, SiteConfig};
use crate::content::IconRef;

use super::icons::IconView;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn copyright_line(year: i32, brand: &str) -> String {
    format!("Copyright {year} {brand}. All rights reserved.")
}

#[component]
pub fn Footer(
    /// Overrides the current calendar year (tests, snapshots).
    #[prop(optional)]
    year: Option<i32>,
) -> impl IntoView {
    let config = SiteConfig::global();
    let year = year.unwrap_or_else(current_year);

    view! {
        <footer id="contact" class="footer">
            <div class="container">
                <div class="footer-top">
                    <div class="footer-brand">
                        <span class="footer-logo"></span>
                        <span class="footer-title">{config.brand.as_str()}</span>
                    </div>
                    <div class="footer-links">
                        <a href="#about" class="footer-link">"About"</a>
                        <a href="#" class="footer-link">"Privacy"</a>
                        <a href="#contact" class="footer-link">"Contact"</a>
                    </div>
                </div>

                <div class="footer-columns">
                    <div>
                        <h3 class="footer-heading">{config.owner.name.as_str()}</h3>
                        <ul class="footer-list">
                            <li>
                                <IconView icon=IconRef::Mail size=16 />
                                <a href=config.owner_mailto() class="footer-link">
                                    {config.owner.email.as_str()}
                                </a>
                            </li>
                            <li>
                                <IconView icon=IconRef::Phone size=16 />
                                <a href=config.owner.phone_href.as_str() class="footer-link">
                                    {config.owner.phone.as_str()}
                                </a>
                            </li>
                        </ul>
                    </div>
                    <LinkColumn heading="Profiles" links=&config.profiles />
                    <LinkColumn heading="Coding" links=&config.coding />
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">{copyright_line(year, &config.brand)}</p>
                    <p class="footer-credit">"Built with love using Rust & Leptos"</p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(heading: &'static str, links: &'static [ExternalLink]) -> impl IntoView {
    view! {
        <div>
            <h3 class="footer-heading">{heading}</h3>
            <ul class="footer-list">
                {links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                {link.icon.map(|icon| view! { <IconView icon=icon size=16 /> })}
                                <a
                                    href=link.href.as_str()
                                    target="_blank"
                                    rel="noreferrer"
                                    class="footer-link"
                                >
                                    {link.label.as_str()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn copyright_includes_year_and_brand() {
        assert_eq!(
            copyright_line(2031, "InternConnect"),
            "Copyright 2031 InternConnect. All rights reserved."
        );
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }

    #[test]
    fn renders_contact_and_profile_links() {
        let html = Owner::new().with(|| view! { <Footer year=2031 /> }.to_html());
        let config = SiteConfig::global();

        assert!(html.contains("Copyright 2031 InternConnect. All rights reserved."));
        assert!(html.contains(&format!(r#"href="mailto:{}""#, config.owner.email)));
        assert!(html.contains(&format!(r#"href="{}""#, config.owner.phone_href)));
        for link in config.profiles.iter().chain(&config.coding) {
            assert!(html.contains(&format!(r#"href="{}""#, link.href)), "{}", link.label);
        }
        assert_eq!(html.matches(r#"target="_blank""#).count(), 5);
    }
}

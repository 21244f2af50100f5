use leptos::ev;
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::{IconRef, NAV_ITEMS};
use crate::dom;
use crate::route::Page;

use super::icons::IconView;

/// Transient nav-bar state. Both flags start `false` and never affect each
/// other or anything outside the nav bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// `scrolled` is true iff `offset` is strictly past `threshold`.
    pub fn observe_scroll(self, offset: f64, threshold: f64) -> Self {
        Self {
            scrolled: offset > threshold,
            ..self
        }
    }

    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    /// Any link or the login button inside the open panel closes it.
    pub fn close_menu(self) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }
}

/// Transparent at the top of the page, frosted with a shadow once scrolled.
pub fn bar_class(scrolled: bool) -> &'static str {
    if scrolled { "nav-bar scrolled" } else { "nav-bar" }
}

#[component]
pub fn Nav(#[prop(into)] current: Signal<Page>) -> impl IntoView {
    let config = SiteConfig::global();
    let threshold = config.scroll_threshold_px;
    let state = RwSignal::new(NavState::default());
    let scrolled = Memo::new(move |_| state.get().scrolled);
    let menu_open = Memo::new(move |_| state.get().menu_open);

    let sync_scroll = move || match dom::scroll_y() {
        Ok(offset) => {
            let next = state.get_untracked().observe_scroll(offset, threshold);
            if next != state.get_untracked() {
                tracing::debug!(offset, scrolled = next.scrolled, "nav scroll state changed");
                state.set(next);
            }
        }
        Err(err) => tracing::warn!(error = %err, "could not read scroll offset"),
    };

    // Runs once on mount; the listener lives as long as the effect does.
    Effect::new(move |_| {
        sync_scroll();
        let listener = window_event_listener(ev::scroll, move |_| sync_scroll());
        on_cleanup(move || listener.remove());
    });

    let close_menu = move |_| state.update(|s| *s = s.close_menu());

    view! {
        <header class=move || bar_class(scrolled.get())>
            <nav class="nav-inner container">
                <a href="/" class="nav-brand">
                    <span class="nav-logo grad-indigo-blue"></span>
                    <span class="nav-title">{config.brand.as_str()}</span>
                </a>
                <div class="nav-links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let page = item.page;
                            view! {
                                <a
                                    href=item.path()
                                    class=move || {
                                        if current.get() == page { "nav-link active" } else { "nav-link" }
                                    }
                                    aria-current=move || (current.get() == page).then_some("page")
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="nav-actions">
                    // Inert placeholder: there is no auth backend.
                    <button class="btn btn-primary btn-sm" type="button">
                        <IconView icon=IconRef::LogIn size=16 />
                        "Login"
                    </button>
                </div>
                <button
                    class="nav-toggle"
                    type="button"
                    aria-label="Toggle Menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| state.update(|s| *s = s.toggle_menu())
                >
                    <IconView icon=IconRef::Menu size=20 />
                </button>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="nav-panel">
                    <div class="container nav-panel-inner">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a href=item.path() class="nav-panel-link" on:click=close_menu>
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <button class="btn btn-primary btn-sm" type="button" on:click=close_menu>
                            <IconView icon=IconRef::LogIn size=16 />
                            "Login"
                        </button>
                    </div>
                </div>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use leptos::tachys::view::RenderHtml;

    const THRESHOLD: f64 = 8.0;

    #[test]
    fn starts_closed_and_unscrolled() {
        let state = NavState::default();
        assert!(!state.scrolled);
        assert!(!state.menu_open);
        assert_eq!(bar_class(state.scrolled), "nav-bar");
    }

    #[test]
    fn scrolled_only_past_threshold() {
        let state = NavState::default();
        for (offset, expected) in [(0.0, false), (8.0, false), (9.0, true), (1000.0, true)] {
            assert_eq!(
                state.observe_scroll(offset, THRESHOLD).scrolled,
                expected,
                "offset {offset}"
            );
        }
    }

    #[test]
    fn scrolling_back_up_clears_flag() {
        let state = NavState::default()
            .observe_scroll(400.0, THRESHOLD)
            .observe_scroll(8.0, THRESHOLD);
        assert!(!state.scrolled);
    }

    #[test]
    fn menu_toggles_and_links_force_close() {
        let open = NavState::default().toggle_menu();
        assert!(open.menu_open);
        assert!(!open.toggle_menu().menu_open);
        assert!(!open.close_menu().menu_open);
        // Already closed stays closed.
        assert!(!NavState::default().close_menu().menu_open);
    }

    #[test]
    fn flags_are_independent() {
        let state = NavState::default()
            .toggle_menu()
            .observe_scroll(50.0, THRESHOLD);
        assert_eq!(
            state,
            NavState {
                scrolled: true,
                menu_open: true
            }
        );
        let closed = state.close_menu();
        assert!(closed.scrolled);
        assert_eq!(bar_class(closed.scrolled), "nav-bar scrolled");
    }

    fn render(current: Page) -> String {
        // Effects are queued but never polled, so no browser API is touched.
        _ = Executor::init_futures_executor();
        Owner::new().with(|| view! { <Nav current=Signal::stored(current) /> }.to_html())
    }

    /// The `<a ...>` tag that carries `aria-current`.
    fn current_link(html: &str) -> &str {
        let at = html
            .find(r#"aria-current="page""#)
            .unwrap_or_else(|| panic!("no current link in {html}"));
        let start = html[..at].rfind("<a ").expect("aria-current outside an anchor");
        let end = at + html[at..].find('>').expect("unterminated tag");
        &html[start..=end]
    }

    #[test]
    fn renders_unscrolled_and_closed() {
        let html = render(Page::Home);
        assert!(html.contains(r#"<header class="nav-bar">"#), "{html}");
        assert!(html.contains(r#"aria-expanded="false""#), "{html}");
        assert!(!html.contains("nav-panel"), "{html}");
        // Home is current, the rest are plain links.
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert_eq!(html.matches(r#"class="nav-link""#).count(), NAV_ITEMS.len() - 1);
    }

    #[test]
    fn marks_only_the_current_link() {
        let html = render(Page::Explore);
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        assert_eq!(html.matches("nav-link active").count(), 1);
        let link = current_link(&html);
        assert!(link.contains(r#"href="/explore""#), "{link}");
        assert!(link.contains("nav-link active"), "{link}");

        let home = render(Page::Home);
        assert!(current_link(&home).contains(r#"href="/""#));
    }

    #[test]
    fn not_found_marks_no_link() {
        let html = render(Page::NotFound);
        assert!(!html.contains("aria-current"), "{html}");
        assert!(!html.contains("nav-link active"));
    }
}

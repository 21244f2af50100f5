//! Application shell: router, path → view dispatch, scroll restoration.

use leptos::either::EitherOf5;
use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::dom;
use crate::pages::{AboutPage, ContactPage, ExplorePage, HomePage, NotFoundPage};
use crate::route::Page;
use crate::sections::{Footer, Nav};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Shell />
        </Router>
    }
}

/// Nav bar + routed view + footer. The router only supplies the location;
/// [`Page::from_path`] decides which view renders.
#[component]
fn Shell() -> impl IntoView {
    let location = use_location();
    let page = Memo::new(move |_| Page::from_path(&location.pathname.get()));

    Effect::new(move |_| {
        let title = page.get().title();
        if let Err(err) = dom::set_document_title(title) {
            tracing::warn!(error = %err, "could not set document title");
        }
    });

    view! {
        <div class="app">
            <Nav current=page />
            <ScrollRestorer />
            <main>{move || page_view(page.get())}</main>
            <Footer />
        </div>
    }
}

/// The page-level view for `page`.
pub fn page_view(page: Page) -> impl IntoView {
    match page {
        Page::Home => EitherOf5::A(view! { <HomePage /> }),
        Page::Explore => EitherOf5::B(view! { <ExplorePage /> }),
        Page::About => EitherOf5::C(view! { <AboutPage /> }),
        Page::Contact => EitherOf5::D(view! { <ContactPage /> }),
        Page::NotFound => EitherOf5::E(view! { <NotFoundPage /> }),
    }
}

/// Smooth-scrolls to the top whenever the pathname changes (and on mount).
#[component]
#[allow(clippy::unused_unit)]
pub fn ScrollRestorer() -> impl IntoView {
    let location = use_location();

    restore_on(location.pathname.into(), || {
        if let Err(err) = dom::scroll_to_top() {
            tracing::warn!(error = %err, "scroll restore failed");
        }
    });

    view! {}
}

/// Calls `scroll` once for the initial path and once per distinct change of
/// `path` after that.
fn restore_on(path: Signal<String>, scroll: impl Fn() + 'static) {
    Effect::new(move |_| {
        let path = path.get();
        tracing::debug!(%path, "route changed, scrolling to top");
        scroll();
    });
}

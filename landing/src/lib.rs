//! # internconnect-landing
//!
//! Marketing site for InternConnect, an internship-matching product.
//! Leptos 0.8, client-side rendered to WebAssembly and served by Trunk.
//!
//! Every view is static: the listings, features, testimonials and "match"
//! figures are literals in [`content`]. There is no backend.
//!
//! ## Layout
//!
//! - [`app`] - router shell, path → view dispatch, scroll restoration
//! - [`route`] - [`route::Page`] and path matching
//! - [`pages`] - one view per route
//! - [`sections`] - nav bar, hero, product mock, grids, footer, icons
//! - [`content`] - literal data model
//! - [`config`] - embedded `site.toml`
//! - [`dom`], [`logging`], [`error`] - browser plumbing
//!
//! Views render off the browser too, which is how the tests check them:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let html = Owner::new().with(|| page_view(Page::Home).to_html());
//! ```

pub mod app;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod logging;
pub mod motion;
pub mod pages;
pub mod route;
pub mod sections;

pub use app::{App, page_view};
pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use route::Page;

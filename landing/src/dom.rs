//! Thin wrappers over the handful of browser APIs the site touches.
//!
//! Only called from effects and event handlers, never while building views,
//! so views still render to HTML off the browser.

use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::error::{Result, SiteError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_y() -> Result<f64> {
    Ok(window()?.scroll_y()?)
}

/// `window.scrollTo({ top: 0, behavior: "smooth" })`
pub fn scroll_to_top() -> Result<()> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn set_document_title(title: &str) -> Result<()> {
    let document = window()?
        .document()
        .ok_or_else(|| SiteError::Dom("window has no document".into()))?;
    document.set_title(title);
    Ok(())
}

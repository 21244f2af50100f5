//! Error type shared by the DOM helpers and config loading.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong outside pure rendering.
#[derive(Debug, Error)]
pub enum SiteError {
    /// No browser `window` (non-browser target or worker context).
    #[error("browser window is not available")]
    NoWindow,

    /// A web-sys call rejected with a JS exception.
    #[error("DOM call failed: {0}")]
    Dom(String),

    /// The embedded `site.toml` did not parse.
    #[error("invalid site config: {0}")]
    Config(#[from] toml::de::Error),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        SiteError::Dom(message)
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_keeps_parser_message() {
        let parse_err = toml::from_str::<toml::Table>("brand = ").unwrap_err();
        let err = SiteError::from(parse_err);
        assert!(err.to_string().starts_with("invalid site config:"));
    }

    #[test]
    fn no_window_message() {
        assert_eq!(
            SiteError::NoWindow.to_string(),
            "browser window is not available"
        );
    }
}

//! Site configuration.
//!
//! Loaded from `site.toml`, which is embedded into the bundle at compile time.
//! Every key is optional; missing keys fall back to the built-in values.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::content::IconRef;
use crate::error::Result;

const EMBEDDED: &str = include_str!("../site.toml");

static GLOBAL: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_toml_str(EMBEDDED) {
    Ok(config) => config,
    Err(err) => {
        tracing::warn!(error = %err, "falling back to default site config");
        SiteConfig::default()
    }
});

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    /// Address shown on the Contact view.
    pub support_email: String,
    /// Scroll offset (px) past which the nav bar switches to its scrolled style.
    pub scroll_threshold_px: f64,
    pub owner: OwnerContact,
    /// Portfolio / code hosting / professional network links.
    pub profiles: Vec<ExternalLink>,
    /// Coding-practice platform links.
    pub coding: Vec<ExternalLink>,
}

/// Person or team listed in the footer's contact column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OwnerContact {
    pub name: String,
    pub email: String,
    /// Display form of the phone number.
    pub phone: String,
    /// `tel:` URI used as the link target.
    pub phone_href: String,
}

/// Outbound link. Opaque: never validated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub icon: Option<IconRef>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "InternConnect".into(),
            support_email: "support@internconnect.example".into(),
            scroll_threshold_px: 8.0,
            owner: OwnerContact::default(),
            profiles: vec![
                ExternalLink::new("Portfolio", "https://internconnect.example/", Some(IconRef::Globe)),
                ExternalLink::new("GitHub", "https://github.com/internconnect", Some(IconRef::Github)),
                ExternalLink::new(
                    "LinkedIn",
                    "https://www.linkedin.com/company/internconnect/",
                    Some(IconRef::Linkedin),
                ),
            ],
            coding: vec![
                ExternalLink::new(
                    "GeeksforGeeks",
                    "https://www.geeksforgeeks.org/user/internconnect/",
                    None,
                ),
                ExternalLink::new("LeetCode", "https://leetcode.com/u/internconnect/", None),
            ],
        }
    }
}

impl Default for OwnerContact {
    fn default() -> Self {
        Self {
            name: "InternConnect Team".into(),
            email: "hello@internconnect.example".into(),
            phone: "+1 555 0100".into(),
            phone_href: "tel:+15550100".into(),
        }
    }
}

impl ExternalLink {
    pub fn new(label: &str, href: &str, icon: Option<IconRef>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            icon,
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document. Keys not present keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: SiteConfig = toml::from_str(content)?;
        if !config.scroll_threshold_px.is_finite() || config.scroll_threshold_px < 0.0 {
            tracing::warn!(
                value = config.scroll_threshold_px,
                "ignoring invalid scroll_threshold_px"
            );
            config.scroll_threshold_px = SiteConfig::default().scroll_threshold_px;
        }
        Ok(config)
    }

    /// The embedded config, parsed once.
    pub fn global() -> &'static SiteConfig {
        &GLOBAL
    }

    /// `mailto:` URI for the owner's email.
    pub fn owner_mailto(&self) -> String {
        format!("mailto:{}", self.owner.email)
    }
}

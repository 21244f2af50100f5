//! Static page content.
//!
//! Every list shown on the site is a `'static` literal here. Nothing is
//! fetched, computed or mutated; the "match" figures are illustrative.

use serde::Deserialize;

use crate::route::Page;

/// Symbolic icon identifier, rendered by [`crate::sections::icons::IconView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconRef {
    BrainCircuit,
    BookmarkCheck,
    ShieldCheck,
    LayoutDashboard,
    MapPin,
    ArrowRight,
    LogIn,
    Menu,
    Mail,
    Phone,
    Globe,
    Github,
    Linkedin,
}

/// Symbolic gradient identifier for swatches and KPI tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    IndigoBlue,
    EmeraldTeal,
    FuchsiaPink,
}

impl Gradient {
    pub fn class(self) -> &'static str {
        match self {
            Gradient::IndigoBlue => "grad-indigo-blue",
            Gradient::EmeraldTeal => "grad-emerald-teal",
            Gradient::FuchsiaPink => "grad-fuchsia-pink",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub page: Page,
}

impl NavItem {
    pub fn path(&self) -> &'static str {
        self.page.path().unwrap_or("/")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InternshipListing {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconRef,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchCardEntry {
    pub role: &'static str,
    pub company: &'static str,
    /// In `[0, 1]`.
    pub match_score: f64,
}

impl MatchCardEntry {
    pub fn percent(&self) -> u8 {
        match_percent(self.match_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpiEntry {
    pub label: &'static str,
    pub value: u32,
    pub color: Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub author: &'static str,
    pub quote: &'static str,
    pub color: Gradient,
}

/// Score in `[0, 1]` → whole percent. Out-of-range scores are clamped,
/// NaN reads as 0, and the result is rounded (not truncated).
pub fn match_percent(score: f64) -> u8 {
    if score.is_nan() {
        return 0;
    }
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Label and CSS width share one format, e.g. `"87%"`.
pub fn percent_label(score: f64) -> String {
    format!("{}%", match_percent(score))
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", page: Page::Home },
    NavItem { label: "Explore", page: Page::Explore },
    NavItem { label: "About", page: Page::About },
    NavItem { label: "Contact", page: Page::Contact },
];

/// Badge in the mock's header.
pub const HEADLINE_MATCH: f64 = 0.87;

pub const MATCH_CARDS: [MatchCardEntry; 4] = [
    MatchCardEntry { role: "Frontend Intern", company: "NovaTech", match_score: 0.92 },
    MatchCardEntry { role: "Data Science Intern", company: "SynthLabs", match_score: 0.85 },
    MatchCardEntry { role: "Product Intern", company: "Skyline", match_score: 0.81 },
    MatchCardEntry { role: "Backend Intern", company: "OptiCore", match_score: 0.78 },
];

pub const KPIS: [KpiEntry; 3] = [
    KpiEntry { label: "Saved", value: 12, color: Gradient::IndigoBlue },
    KpiEntry { label: "Applied", value: 7, color: Gradient::EmeraldTeal },
    KpiEntry { label: "Interviews", value: 3, color: Gradient::FuchsiaPink },
];

/// Avatar swatch colors in the hero's social-proof row.
pub const AVATAR_COLORS: [&str; 4] = ["#fde047", "#a78bfa", "#60a5fa", "#34d399"];

pub const FEATURES: [FeatureDescriptor; 4] = [
    FeatureDescriptor {
        title: "Smart Matching",
        description: "AI maps your skills to roles that fit your goals.",
        icon: IconRef::BrainCircuit,
    },
    FeatureDescriptor {
        title: "Save & Track",
        description: "Bookmark roles, track status, and never miss a deadline.",
        icon: IconRef::BookmarkCheck,
    },
    FeatureDescriptor {
        title: "Verified Listings",
        description: "High-quality, vetted internships from trusted companies.",
        icon: IconRef::ShieldCheck,
    },
    FeatureDescriptor {
        title: "Personalized Dashboard",
        description: "A single view for your matches, saves, and applications.",
        icon: IconRef::LayoutDashboard,
    },
];

pub const DEFAULT_RECOMMENDATIONS_TITLE: &str = "Recommended Internships for You";
pub const EXPLORE_RECOMMENDATIONS_TITLE: &str = "Top Picks This Week";

pub const LISTINGS: [InternshipListing; 6] = [
    InternshipListing { role: "Frontend Developer Intern", company: "PixelForge", location: "Remote" },
    InternshipListing { role: "Machine Learning Intern", company: "DataSphere", location: "Bengaluru, IN" },
    InternshipListing { role: "Product Design Intern", company: "FrameWorks", location: "Remote" },
    InternshipListing { role: "Backend Engineer Intern", company: "CoreStack", location: "Hyderabad, IN" },
    InternshipListing { role: "Data Analyst Intern", company: "InsightIQ", location: "Pune, IN" },
    InternshipListing { role: "Mobile Developer Intern", company: "AppNest", location: "Remote" },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        author: "Aarav Sharma",
        quote: "InternConnect helped me find a remote frontend internship aligned with my React skills in days. The dashboard tracking is a game changer!",
        color: Gradient::IndigoBlue,
    },
    Testimonial {
        author: "Sara Ali",
        quote: "The recommendations felt truly personalized. I landed interviews at two companies I love with clear next steps.",
        color: Gradient::FuchsiaPink,
    },
    Testimonial {
        author: "Rohit Verma",
        quote: "Verified listings gave me confidence. I saved roles, tracked applications, and finally got an offer!",
        color: Gradient::EmeraldTeal,
    },
];

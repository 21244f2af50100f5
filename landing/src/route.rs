//! Path → view selection.

/// The five page-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Explore,
    About,
    Contact,
    NotFound,
}

impl Page {
    /// Every page with a canonical path, in nav order.
    pub const ROUTED: [Page; 4] = [Page::Home, Page::Explore, Page::About, Page::Contact];

    /// Resolve a pathname. One trailing slash is ignored and matching is
    /// ASCII case-insensitive; anything unknown is [`Page::NotFound`].
    pub fn from_path(path: &str) -> Page {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        if trimmed.is_empty() {
            return Page::Home;
        }
        Page::ROUTED
            .into_iter()
            .find(|page| {
                page.path()
                    .is_some_and(|p| p.eq_ignore_ascii_case(trimmed))
            })
            .unwrap_or(Page::NotFound)
    }

    /// Canonical path; `None` for the catch-all.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Page::Home => Some("/"),
            Page::Explore => Some("/explore"),
            Page::About => Some("/about"),
            Page::Contact => Some("/contact"),
            Page::NotFound => None,
        }
    }

    /// Document title shown while the view is active.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "InternConnect | Find the Perfect Internship",
            Page::Explore => "Explore Internships | InternConnect",
            Page::About => "About | InternConnect",
            Page::Contact => "Contact | InternConnect",
            Page::NotFound => "Page not found | InternConnect",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/explore"), Page::Explore);
        assert_eq!(Page::from_path("/about"), Page::About);
        assert_eq!(Page::from_path("/contact"), Page::Contact);
    }

    #[test]
    fn trailing_slash_and_case_are_ignored() {
        assert_eq!(Page::from_path("/about/"), Page::About);
        assert_eq!(Page::from_path("/Explore"), Page::Explore);
        assert_eq!(Page::from_path("/CONTACT/"), Page::Contact);
        assert_eq!(Page::from_path(""), Page::Home);
    }

    #[test]
    fn everything_else_is_not_found() {
        for path in [
            "/unknown-page",
            "/explore/123",
            "/about//",
            "about",
            "/home",
            "/contact-us",
        ] {
            assert_eq!(Page::from_path(path), Page::NotFound, "path {path:?}");
        }
    }

    #[test]
    fn canonical_paths_round_trip() {
        for page in Page::ROUTED {
            let path = page.path().expect("routed page has a path");
            assert_eq!(Page::from_path(path), page);
        }
        assert_eq!(Page::NotFound.path(), None);
    }
}

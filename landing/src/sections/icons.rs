//! Inline stroke icons (24×24, Lucide-style outlines).

use leptos::prelude::*;

use crate::content::IconRef;

/// Renders the icon named by `icon` as an inline SVG.
#[component]
pub fn IconView(
    icon: IconRef,
    /// Icon size in pixels
    #[prop(default = 20)]
    size: u32,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let size = size.to_string();
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {paths(icon).iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

fn paths(icon: IconRef) -> &'static [&'static str] {
    match icon {
        IconRef::BrainCircuit => &[
            "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
            "M9 13a4.5 4.5 0 0 0 3-4",
            "M12 13h4",
            "M12 18h6a2 2 0 0 1 2 2v1",
            "M12 8h8",
            "M16 8V5a2 2 0 0 1 2-2",
        ],
        IconRef::BookmarkCheck => &[
            "m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2Z",
            "m9 10 2 2 4-4",
        ],
        IconRef::ShieldCheck => &[
            "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            "m9 12 2 2 4-4",
        ],
        IconRef::LayoutDashboard => &[
            "M3 3h7v9H3z",
            "M14 3h7v5h-7z",
            "M14 12h7v9h-7z",
            "M3 16h7v5H3z",
        ],
        IconRef::MapPin => &[
            "M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0",
            "M12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6",
        ],
        IconRef::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        IconRef::LogIn => &[
            "M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4",
            "m10 17 5-5-5-5",
            "M15 12H3",
        ],
        IconRef::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        IconRef::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
        ],
        IconRef::Phone => &[
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        ],
        IconRef::Globe => &[
            "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20",
            "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
            "M2 12h20",
        ],
        IconRef::Github => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
            "M9 18c-4.51 2-5-2-7-2",
        ],
        IconRef::Linkedin => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn every_icon_has_geometry() {
        for icon in [
            IconRef::BrainCircuit,
            IconRef::BookmarkCheck,
            IconRef::ShieldCheck,
            IconRef::LayoutDashboard,
            IconRef::MapPin,
            IconRef::ArrowRight,
            IconRef::LogIn,
            IconRef::Menu,
            IconRef::Mail,
            IconRef::Phone,
            IconRef::Globe,
            IconRef::Github,
            IconRef::Linkedin,
        ] {
            assert!(!paths(icon).is_empty(), "{icon:?}");
        }
    }

    #[test]
    fn renders_sized_svg() {
        let html = Owner::new().with(|| view! { <IconView icon=IconRef::Menu size=16 /> }.to_html());
        assert!(html.starts_with("<svg"));
        assert!(html.contains(r#"width="16""#));
        assert_eq!(html.matches("<path").count(), 3);
    }
}

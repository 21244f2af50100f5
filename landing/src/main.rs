// InternConnect Landing Page - Leptos 0.8 Edition

use internconnect_landing::{App, logging};
use leptos::prelude::*;

fn main() {
    logging::init();
    tracing::info!("mounting InternConnect landing page");
    leptos::mount::mount_to_body(|| view! { <App/> });
}

//! Entrance animation helpers. The animation itself is the `fade-up` CSS
//! keyframe in `style/main.css`; this only staggers it per card.

/// Delay step between consecutive cards, in seconds.
pub const STAGGER_STEP_SECS: f64 = 0.08;

/// Inline style that delays the `index`-th card's fade-up.
pub fn stagger_delay(index: usize) -> String {
    let delay = index as f64 * STAGGER_STEP_SECS;
    format!("animation-delay: {delay:.2}s")
}

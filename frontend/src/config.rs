#[cfg(debug_assertions)]
pub fn get_form_action() -> &'static str {
    "http://localhost:3001/contact"  // Local FormSubmit stand-in
}

#[cfg(not(debug_assertions))]
pub fn get_form_action() -> &'static str {
    "https://formsubmit.co/ajax/hello@ozistech.com"
}

/// Pixels scrolled before the navbar switches to its solid background.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

pub const SHOWCASE_INTERVAL_MS: u32 = 3_000;
pub const FORM_BANNER_MS: u32 = 5_000;
pub const RESIZE_DEBOUNCE_MS: u32 = 100;
pub const REVEAL_STAGGER_MS: u32 = 100;

pub const HERO_VISIBILITY_THRESHOLD: f64 = 0.1;
pub const CONTACT_VISIBILITY_THRESHOLD: f64 = 0.3;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Typing effect on the hero headline. Off unless the campaign asks for it.
pub const TYPING_EFFECT_ENABLED: bool = false;
pub const TYPING_START_DELAY_MS: u32 = 2_000;

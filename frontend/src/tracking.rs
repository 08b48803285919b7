use chrono::Utc;
use log::info;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::dom::{self, Listener};

pub const TRACKED_BUTTONS: &str = ".btn-primary, .btn-secondary, .btn-outline";

/// Ad-platform conversion a button click maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Lead,
    Schedule,
}

impl Conversion {
    pub fn for_label(label: &str) -> Option<Self> {
        if label.contains("Quote") || label.contains("Started") {
            Some(Conversion::Lead)
        } else if label.contains("Call") {
            Some(Conversion::Schedule)
        } else {
            None
        }
    }

    pub fn event_name(self) -> &'static str {
        match self {
            Conversion::Lead => "Lead",
            Conversion::Schedule => "Schedule",
        }
    }
}

fn track(button: &Element) {
    let text = button.text_content().unwrap_or_default();
    let text = text.trim();
    let destination = button.get_attribute("href");
    info!(
        "Button clicked: text={:?} destination={:?} timestamp={}",
        text,
        destination,
        Utc::now().to_rfc3339()
    );
    if let Some(conversion) = Conversion::for_label(text) {
        info!("Conversion event: {}", conversion.event_name());
    }
}

/// Logs every click on a call-to-action button along with the conversion
/// it would report to the ad pixel.
#[hook]
pub fn use_click_tracking() {
    use_effect_with_deps(
        |_| {
            let listener = dom::document().and_then(|document| {
                Listener::new(&document, "click", |e| {
                    let button = e
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .and_then(|el| el.closest(TRACKED_BUTTONS).ok().flatten());
                    if let Some(button) = button {
                        track(&button);
                    }
                })
            });
            move || drop(listener)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_and_start_buttons_are_leads() {
        assert_eq!(Conversion::for_label("Get My Free Quote"), Some(Conversion::Lead));
        assert_eq!(Conversion::for_label("Get Started"), Some(Conversion::Lead));
    }

    #[test]
    fn call_buttons_schedule() {
        assert_eq!(Conversion::for_label("Call Now"), Some(Conversion::Schedule));
        assert_eq!(Conversion::Schedule.event_name(), "Schedule");
    }

    #[test]
    fn other_buttons_are_not_conversions() {
        assert_eq!(Conversion::for_label("See Our Work"), None);
        // Matching is case sensitive, like the pixel rules.
        assert_eq!(Conversion::for_label("call us"), None);
    }
}

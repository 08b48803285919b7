use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::dom::{self, Listener};

/// In-page selector for an anchor's `href`, or `None` for a bare `#`.
pub fn anchor_selector(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

/// Document offset to scroll to so `target` ends up just below the navbar.
pub fn scroll_target(target_top: f64, scroll_y: f64, navbar_height: f64) -> f64 {
    target_top + scroll_y - navbar_height
}

fn navbar_height(document: &Document) -> f64 {
    document
        .get_element_by_id("navbar")
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| f64::from(nav.offset_height()))
        .unwrap_or(0.0)
}

fn scroll_to(document: &Document, href: &str) {
    let Some(selector) = anchor_selector(href) else {
        return;
    };
    // An href like "#1-offer" is not a valid selector, query_selector errors.
    let Some(target) = document.query_selector(selector).ok().flatten() else {
        debug!("No scroll target for {}", href);
        return;
    };
    let Some(window) = dom::window() else {
        return;
    };

    let top = scroll_target(
        target.get_bounding_client_rect().top(),
        dom::scroll_y(),
        navbar_height(document),
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Takes over every `a[href^="#"]` click on the page and animates the
/// scroll instead of jumping.
#[hook]
pub fn use_smooth_scroll() {
    use_effect_with_deps(
        |_| {
            let listener = dom::document().and_then(|document| {
                let doc = document.clone();
                Listener::new(&document, "click", move |e| {
                    let anchor = e
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .and_then(|el| el.closest("a[href^='#']").ok().flatten());
                    let Some(anchor) = anchor else {
                        return;
                    };
                    e.prevent_default();
                    let href = anchor.get_attribute("href").unwrap_or_default();
                    scroll_to(&doc, &href);
                })
            });
            move || drop(listener)
        },
        (),
    );
}

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_STAGGER_MS, REVEAL_THRESHOLD};
use crate::dom::{self, VisibilityObserver};

pub const REVEAL_SELECTOR: &str =
    ".service-card, .portfolio-card, .why-item, .pricing-card, .testimonial-card, .process-step";

/// Delay for each entry of one observer batch: `Some(k * stagger)` for the
/// k-th entry that is intersecting, `None` for entries that aren't.
pub fn stagger_delays(intersecting: &[bool], stagger_ms: u32) -> Vec<Option<u32>> {
    let mut k = 0;
    intersecting
        .iter()
        .map(|&hit| {
            hit.then(|| {
                let delay = k * stagger_ms;
                k += 1;
                delay
            })
        })
        .collect()
}

/// Hides every card matching [`REVEAL_SELECTOR`] and fades each one in the
/// first time it scrolls into view. Cards are never hidden again.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        |_| {
            let observer = VisibilityObserver::new(
                REVEAL_THRESHOLD,
                Some(REVEAL_ROOT_MARGIN),
                |entries, observer| {
                    let hits: Vec<bool> = entries.iter().map(|e| e.is_intersecting()).collect();
                    for (entry, delay) in entries.iter().zip(stagger_delays(&hits, REVEAL_STAGGER_MS)) {
                        let Some(delay) = delay else { continue };
                        let target = entry.target();
                        observer.unobserve(&target);
                        Timeout::new(delay, move || {
                            let _ = target.class_list().add_1("animate-in");
                            dom::clear_style(&target, "opacity");
                            dom::clear_style(&target, "transform");
                        })
                        .forget();
                    }
                },
            );

            if let (Some(observer), Some(document)) = (observer.as_ref(), dom::document()) {
                if let Ok(cards) = document.query_selector_all(REVEAL_SELECTOR) {
                    debug!("Tracking {} cards for reveal", cards.length());
                    for i in 0..cards.length() {
                        let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<Element>().ok())
                        else {
                            continue;
                        };
                        dom::set_style(&card, "opacity", "0");
                        dom::set_style(&card, "transform", "translateY(20px)");
                        observer.observe(&card);
                    }
                }
            }
            move || drop(observer)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_visible_entries_are_staggered() {
        assert_eq!(
            stagger_delays(&[true, false, true, true], 100),
            vec![Some(0), None, Some(100), Some(200)]
        );
    }

    #[test]
    fn empty_or_all_hidden_batch() {
        assert!(stagger_delays(&[], 100).is_empty());
        assert_eq!(stagger_delays(&[false, false], 100), vec![None, None]);
    }

    #[test]
    fn each_batch_restarts_at_zero() {
        let first = stagger_delays(&[true, true], 100);
        let second = stagger_delays(&[true], 100);
        assert_eq!(first, vec![Some(0), Some(100)]);
        assert_eq!(second, vec![Some(0)]);
    }
}

use std::rc::Rc;

use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{CONTACT_VISIBILITY_THRESHOLD, HERO_VISIBILITY_THRESHOLD, RESIZE_DEBOUNCE_MS};
use crate::dom::VisibilityObserver;
use crate::responsive::use_debounced_resize;

/// Visibility of the floating call-to-action bar.
///
/// Hero and contact are watched by two separate observers and whichever
/// reports last decides. If the hero leaves and the contact section enters
/// in the same frame the outcome depends on delivery order; that is how the
/// page has always behaved and is kept as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CtaVisibility {
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CtaEvent {
    Hero { intersecting: bool },
    Contact { intersecting: bool },
    /// Debounced resize with the hero's bounding-box bottom edge.
    Resized { hero_bottom: f64 },
}

impl CtaVisibility {
    pub fn next(self, event: CtaEvent) -> Self {
        let visible = match event {
            CtaEvent::Hero { intersecting } => !intersecting,
            CtaEvent::Contact { intersecting: true } => false,
            CtaEvent::Contact { intersecting: false } => self.visible,
            CtaEvent::Resized { hero_bottom } if hero_bottom < 0.0 => true,
            CtaEvent::Resized { .. } => self.visible,
        };
        CtaVisibility { visible }
    }
}

impl Reducible for CtaVisibility {
    type Action = CtaEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StickyCtaProps {
    pub hero: NodeRef,
    #[prop_or_default]
    pub contact: NodeRef,
}

#[function_component(StickyCta)]
pub fn sticky_cta(props: &StickyCtaProps) -> Html {
    let state = use_reducer(CtaVisibility::default);

    {
        let dispatcher = state.dispatcher();
        let hero = props.hero.clone();
        let contact = props.contact.clone();
        use_effect_with_deps(
            move |_| {
                let mut observers = Vec::new();
                if let Some(hero) = hero.cast::<Element>() {
                    let on_hero = dispatcher.clone();
                    if let Some(observer) =
                        VisibilityObserver::new(HERO_VISIBILITY_THRESHOLD, None, move |entries, _| {
                            for entry in entries {
                                on_hero.dispatch(CtaEvent::Hero {
                                    intersecting: entry.is_intersecting(),
                                });
                            }
                        })
                    {
                        observer.observe(&hero);
                        observers.push(observer);
                    }

                    if let Some(contact) = contact.cast::<Element>() {
                        let on_contact = dispatcher.clone();
                        if let Some(observer) = VisibilityObserver::new(
                            CONTACT_VISIBILITY_THRESHOLD,
                            None,
                            move |entries, _| {
                                for entry in entries {
                                    on_contact.dispatch(CtaEvent::Contact {
                                        intersecting: entry.is_intersecting(),
                                    });
                                }
                            },
                        ) {
                            observer.observe(&contact);
                            observers.push(observer);
                        }
                    }
                } else {
                    debug!("No hero section, sticky CTA stays hidden");
                }
                move || drop(observers)
            },
            (),
        );
    }

    {
        let dispatcher = state.dispatcher();
        let hero = props.hero.clone();
        use_debounced_resize(RESIZE_DEBOUNCE_MS, move || {
            if let Some(hero) = hero.cast::<Element>() {
                dispatcher.dispatch(CtaEvent::Resized {
                    hero_bottom: hero.get_bounding_client_rect().bottom(),
                });
            }
        });
    }

    html! {
        <div id="sticky-cta" class={classes!("sticky-cta", state.visible.then(|| "visible"))}>
            <a href="#contact" class="btn btn-primary">{"Get My Free Quote"}</a>
            <a href="tel:+61400000000" class="btn btn-outline">{"Call Now"}</a>
        </div>
    }
}

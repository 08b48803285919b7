use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, Node};
use yew::prelude::*;

use crate::config::NAVBAR_SCROLL_THRESHOLD;
use crate::dom::{self, Listener};
use crate::responsive::{use_frame_coalesced_scroll, use_orientation_change};

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MobileMenu {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(MobileMenu { open })
        }
    }
}

const NAV_LINKS: [(&str, &str); 5] = [
    ("#services", "Services"),
    ("#portfolio", "Work"),
    ("#pricing", "Pricing"),
    ("#process", "Process"),
    ("#faq", "FAQ"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let is_scrolled = use_state_eq(|| navbar_scrolled(dom::scroll_y()));
    let menu = use_reducer(MobileMenu::default);
    let button_ref = use_node_ref();
    let links_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        use_frame_coalesced_scroll(move |scroll_y| is_scrolled.set(navbar_scrolled(scroll_y)));
    }

    {
        let menu = menu.dispatcher();
        use_orientation_change(move || menu.dispatch(MenuAction::Close));
    }

    // Any click that lands outside both the burger and the panel closes it.
    {
        let menu = menu.dispatcher();
        let button_ref = button_ref.clone();
        let links_ref = links_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = dom::document().and_then(|document| {
                    Listener::new(&document, "click", move |e| {
                        let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                        let (Some(button), Some(links)) =
                            (button_ref.get(), links_ref.get())
                        else {
                            return;
                        };
                        if !button.contains(target.as_ref()) && !links.contains(target.as_ref()) {
                            menu.dispatch(MenuAction::Close);
                        }
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| {
            debug!("Mobile menu toggled");
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_on_link = {
        let menu = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            let on_link = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("a").ok().flatten())
                .is_some();
            if on_link {
                menu.dispatch(MenuAction::Close);
            }
        })
    };

    html! {
        <nav id="navbar" class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-container">
                <a href="#hero" class="nav-logo">
                    {"Ozis"}<span class="logo-accent">{"Tech"}</span>
                </a>
                <div
                    id="nav-links"
                    ref={links_ref}
                    class={classes!("nav-links", menu.open.then(|| "open"))}
                    onclick={close_on_link}
                >
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }) }
                    <a href="#contact" class="btn btn-primary nav-cta">{"Get a Free Quote"}</a>
                </div>
                <button
                    id="mobile-menu-btn"
                    ref={button_ref}
                    class={classes!("mobile-menu-btn", menu.open.then(|| "active"))}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(menu: MobileMenu, action: MenuAction) -> MobileMenu {
        *Rc::new(menu).reduce(action)
    }

    #[test]
    fn navbar_turns_solid_past_fifty_pixels() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.5));
        assert!(navbar_scrolled(1200.0));
    }

    #[test]
    fn toggle_flips_and_close_always_closes() {
        let closed = MobileMenu::default();
        let open = apply(closed, MenuAction::Toggle);
        assert!(open.open);
        assert!(!apply(open, MenuAction::Toggle).open);
        assert!(!apply(open, MenuAction::Close).open);
        assert!(!apply(closed, MenuAction::Close).open);
    }

    #[test]
    fn closing_a_closed_menu_keeps_the_same_state() {
        let state = Rc::new(MobileMenu::default());
        let next = state.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&state, &next));
    }
}

use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config::SHOWCASE_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showcase {
    len: usize,
    index: usize,
}

impl Showcase {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn active(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn advance(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { len: self.len, index: (self.index + 1) % self.len }
    }
}

pub struct Advance;

impl Reducible for Showcase {
    type Action = Advance;

    fn reduce(self: Rc<Self>, _: Advance) -> Rc<Self> {
        Rc::new(self.advance())
    }
}

const SHOWCASE_IMAGES: [(&str, &str); 4] = [
    ("/assets/showcase/plumber.webp", "Plumbing business landing page"),
    ("/assets/showcase/cafe.webp", "Cafe website"),
    ("/assets/showcase/fitness.webp", "Personal trainer booking page"),
    ("/assets/showcase/builder.webp", "Builder portfolio site"),
];

#[function_component(HeroShowcase)]
pub fn hero_showcase() -> Html {
    let showcase = use_reducer(|| Showcase::new(SHOWCASE_IMAGES.len()));

    {
        let showcase = showcase.dispatcher();
        use_interval(move || showcase.dispatch(Advance), SHOWCASE_INTERVAL_MS);
    }

    html! {
        <div class="hero-showcase">
            { for SHOWCASE_IMAGES.iter().enumerate().map(|(i, (src, alt))| html! {
                <img
                    class={classes!("showcase-img", (showcase.active() == Some(i)).then(|| "active"))}
                    src={*src}
                    alt={*alt}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around() {
        let mut showcase = Showcase::new(3);
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(showcase.active().unwrap());
            showcase = showcase.advance();
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn no_images_is_a_no_op() {
        let showcase = Showcase::new(0);
        assert_eq!(showcase.active(), None);
        assert_eq!(showcase.advance(), showcase);
    }

    #[test]
    fn single_image_stays_active() {
        let showcase = Showcase::new(1).advance().advance();
        assert_eq!(showcase.active(), Some(0));
    }
}

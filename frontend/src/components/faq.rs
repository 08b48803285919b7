use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

/// Single-open accordion. Opening an item closes whichever one was open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    pub open: Option<usize>,
}

impl Accordion {
    pub fn toggle(self, index: usize) -> Self {
        if self.open == Some(index) {
            Accordion { open: None }
        } else {
            Accordion { open: Some(index) }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

impl Reducible for Accordion {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        Rc::new(self.toggle(index))
    }
}

const FAQS: [(&str, &str); 6] = [
    (
        "How long does it take to build my website?",
        "Most landing pages go live within 7 days of receiving your content. Larger multi-page sites usually take two to three weeks.",
    ),
    (
        "Do I need to provide the copy and images?",
        "No. We write conversion-focused copy for you and source images, or use your own photos if you have them.",
    ),
    (
        "Will my site work on phones?",
        "Every page is built mobile-first and tested on real devices before launch.",
    ),
    (
        "Can you help with Facebook and Google ads?",
        "Yes. We set up tracking pixels and build pages specifically designed to turn ad clicks into leads.",
    ),
    (
        "What happens after launch?",
        "You get 30 days of free changes. After that, optional care plans cover hosting, updates and tweaks.",
    ),
    (
        "Are there any hidden fees?",
        "No. The quote you approve is the price you pay. Domain and hosting costs are listed upfront.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let accordion = use_reducer(Accordion::default);
    let on_toggle = {
        let accordion = accordion.dispatcher();
        Callback::from(move |index: usize| accordion.dispatch(index))
    };

    html! {
        <section id="faq" class="faq-section">
            <div class="container">
                <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(index, (question, answer))| html! {
                        <FaqItem
                            index={index}
                            question={*question}
                            answer={*answer}
                            open={accordion.is_open(index)}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

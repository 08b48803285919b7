use yew::prelude::*;
use log::{info, Level};

mod config;
mod dom;
mod error;
mod responsive;
mod tracking;
mod form {
    pub mod flow;
    pub mod validation;
}
mod components {
    pub mod contact_form;
    pub mod faq;
    pub mod navbar;
    pub mod portfolio;
    pub mod reveal;
    pub mod showcase;
    pub mod smooth_scroll;
    pub mod sticky_cta;
    pub mod typing;
}
mod pages {
    pub mod landing;
}

use pages::landing::LandingPage;

#[function_component]
fn App() -> Html {
    html! {
        <LandingPage />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}

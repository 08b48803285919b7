use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PortfolioPreviewProps {
    pub src: AttrValue,
    pub alt: AttrValue,
}

/// Screenshot that stays transparent until it has loaded (or failed to),
/// then fades in.
#[function_component(PortfolioPreview)]
pub fn portfolio_preview(props: &PortfolioPreviewProps) -> Html {
    let settled = use_state_eq(|| false);
    let on_settled = {
        let settled = settled.clone();
        Callback::from(move |_: Event| settled.set(true))
    };

    let style = format!(
        "opacity: {}; transition: opacity 0.3s ease;",
        if *settled { "1" } else { "0" }
    );

    html! {
        <div class="portfolio-preview">
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                loading="lazy"
                {style}
                onload={on_settled.clone()}
                onerror={on_settled}
            />
        </div>
    }
}

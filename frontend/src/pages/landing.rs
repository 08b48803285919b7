use log::info;
use yew::prelude::*;

use crate::components::{
    contact_form::ContactForm, faq::FaqSection, navbar::Navbar, portfolio::PortfolioPreview,
    reveal::use_reveal_on_scroll, showcase::HeroShowcase, smooth_scroll::use_smooth_scroll,
    sticky_cta::StickyCta, typing::TypingHighlight,
};
use crate::responsive::use_touch_optimisations;
use crate::tracking::use_click_tracking;

const SERVICES: [(&str, &str); 3] = [
    ("High-Converting Landing Pages", "Single pages built around one goal: turning your ad traffic into enquiries."),
    ("Business Websites", "Fast, mobile-first sites that make a small business look established."),
    ("Ad Tracking Setup", "Meta Pixel and Google tags wired up so you know which ads actually pay."),
];

const PORTFOLIO: [(&str, &str, &str); 3] = [
    ("Coastal Plumbing", "Lead generation page", "/assets/portfolio/plumbing.webp"),
    ("Bean There Cafe", "Menu and bookings site", "/assets/portfolio/cafe.webp"),
    ("Iron Core Fitness", "Trial signup funnel", "/assets/portfolio/fitness.webp"),
];

const WHY: [(&str, &str); 4] = [
    ("7-day delivery", "Most pages are live within a week."),
    ("Built for ads", "Every section is written to convert paid clicks."),
    ("Local support", "Talk to the person building your site, not a ticket queue."),
    ("No lock-in", "You own the site and the domain from day one."),
];

const PRICING: [(&str, &str, &str); 3] = [
    ("Starter", "$499", "One landing page, contact form, pixel setup"),
    ("Business", "$1,299", "Up to five pages, copywriting, local SEO basics"),
    ("Growth", "$2,499", "Full site, booking integration, 30 days of tweaks"),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    ("We doubled our enquiries in the first month.", "Mark, Coastal Plumbing"),
    ("The page paid for itself in a week of ads.", "Priya, Iron Core Fitness"),
    ("Quick, friendly and no jargon.", "Tom, Bean There Cafe"),
];

const PROCESS: [(&str, &str); 4] = [
    ("Free call", "We learn about your business and goals."),
    ("Design", "You get a draft within three days."),
    ("Refine", "Two rounds of changes included."),
    ("Launch", "We go live and hook up your tracking."),
];

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let hero_ref = use_node_ref();
    let contact_ref = use_node_ref();

    use_smooth_scroll();
    use_reveal_on_scroll();
    use_touch_optimisations();
    use_click_tracking();

    use_effect_with_deps(
        |_| {
            info!("Landing page mounted");
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Navbar />

            <section id="hero" class="hero" ref={hero_ref.clone()}>
                <div class="container hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-headline">
                            {"Turn Your "}<TypingHighlight />{" Into Paying Customers"}
                        </h1>
                        <p class="hero-sub">
                            {"Landing pages and websites for small businesses that run ads. Built in a week, priced upfront."}
                        </p>
                        <div class="hero-actions">
                            <a href="#contact" class="btn btn-primary">{"Get My Free Quote"}</a>
                            <a href="#portfolio" class="btn btn-secondary">{"See Our Work"}</a>
                        </div>
                    </div>
                    <HeroShowcase />
                </div>
            </section>

            <section id="services" class="services">
                <div class="container">
                    <h2 class="section-title">{"What We Build"}</h2>
                    <div class="card-grid">
                        { for SERVICES.iter().map(|(title, text)| html! {
                            <div class="service-card">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="portfolio" class="portfolio">
                <div class="container">
                    <h2 class="section-title">{"Recent Work"}</h2>
                    <div class="card-grid">
                        { for PORTFOLIO.iter().map(|(client, kind, image)| html! {
                            <div class="portfolio-card">
                                <PortfolioPreview src={*image} alt={format!("{} website", client)} />
                                <h3>{*client}</h3>
                                <p>{*kind}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="why" class="why">
                <div class="container">
                    <h2 class="section-title">{"Why OzisTech"}</h2>
                    <div class="why-grid">
                        { for WHY.iter().map(|(title, text)| html! {
                            <div class="why-item">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="pricing" class="pricing">
                <div class="container">
                    <h2 class="section-title">{"Simple Pricing"}</h2>
                    <div class="card-grid">
                        { for PRICING.iter().map(|(plan, price, includes)| html! {
                            <div class="pricing-card">
                                <h3>{*plan}</h3>
                                <div class="price">{*price}</div>
                                <p>{*includes}</p>
                                <a href="#contact" class="btn btn-outline">{"Get Started"}</a>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="testimonials" class="testimonials">
                <div class="container">
                    <h2 class="section-title">{"What Clients Say"}</h2>
                    <div class="card-grid">
                        { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                            <div class="testimonial-card">
                                <blockquote>{*quote}</blockquote>
                                <cite>{*author}</cite>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="process" class="process">
                <div class="container">
                    <h2 class="section-title">{"How It Works"}</h2>
                    <ol class="process-steps">
                        { for PROCESS.iter().enumerate().map(|(i, (title, text))| html! {
                            <li class="process-step">
                                <span class="step-number">{(i + 1).to_string()}</span>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </li>
                        }) }
                    </ol>
                </div>
            </section>

            <FaqSection />

            <section id="contact" class="contact" ref={contact_ref.clone()}>
                <div class="container">
                    <h2 class="section-title">{"Get Your Free Quote"}</h2>
                    <p class="section-sub">{"Tell us a little about your business and we'll reply within 24 hours."}</p>
                    <ContactForm />
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <p>{"© OzisTech. Websites that win customers."}</p>
                    <a href="#hero" class="footer-top">{"Back to top"}</a>
                </div>
            </footer>

            <StickyCta hero={hero_ref} contact={contact_ref} />
        </div>
    }
}

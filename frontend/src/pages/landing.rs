use std::rc::Rc;

use yew::prelude::*;

use crate::chat::responder::ResponderTable;
use crate::chat::widget::ChatWidget;
use crate::components::nav::NavBar;
use crate::components::valuation_form::ValuationForm;
use crate::config::SiteConfig;

struct Step {
    icon: &'static str,
    tint: &'static str,
    title: &'static str,
    body: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        icon: "fas fa-upload",
        tint: "tint-blue",
        title: "1. Upload License",
        body: "Submit your software license details through our secure portal.",
    },
    Step {
        icon: "fas fa-dollar-sign",
        tint: "tint-green",
        title: "2. Get Valuation",
        body: "Receive a competitive market valuation within 24 hours.",
    },
    Step {
        icon: "fas fa-money-check-dollar",
        tint: "tint-purple",
        title: "3. Get Paid",
        body: "Accept our offer and receive payment within 5 business days.",
    },
];

const REASONS: [Step; 4] = [
    Step {
        icon: "fas fa-gauge-high",
        tint: "tint-blue",
        title: "Fast Process",
        body: "From submission to payment in as little as 7 days.",
    },
    Step {
        icon: "fas fa-dollar-sign",
        tint: "tint-green",
        title: "Best Rates",
        body: "We offer up to 70% of original license value, beating competitors.",
    },
    Step {
        icon: "fas fa-shield-halved",
        tint: "tint-red",
        title: "Secure Transfer",
        body: "Fully compliant, legal license transfers with complete documentation.",
    },
    Step {
        icon: "fas fa-globe",
        tint: "tint-purple",
        title: "Global Network",
        body: "Access to thousands of buyers worldwide for any software type.",
    },
];

struct Testimonial {
    initials: &'static str,
    name: &'static str,
    role: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        initials: "AA",
        name: "Anirudhhan Ashok",
        role: "CTO, Acme Solutions",
        quote: "SoftSell helped us recover $50,000 from unused Adobe and Microsoft licenses during our downsize. The process was incredibly smooth, and their valuation was 25% higher than competitors.",
    },
    Testimonial {
        initials: "SM",
        name: "Sarah Miller",
        role: "Finance Director, TechGrow Inc.",
        quote: "After our merger, we had hundreds of duplicate software licenses. SoftSell turned what would have been a complete write-off into a significant recovery. Their expertise in enterprise software licensing was invaluable.",
    },
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: SiteConfig,
    pub dark: bool,
    pub on_toggle_theme: Callback<()>,
    /// `None` when the FAQ table failed to build; the chat launcher is hidden.
    pub table: Option<Rc<ResponderTable>>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let chat_open = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let toggle_chat = {
        let chat_open = chat_open.clone();
        Callback::from(move |_: MouseEvent| chat_open.set(!*chat_open))
    };
    let close_chat = {
        let chat_open = chat_open.clone();
        Callback::from(move |_: ()| chat_open.set(false))
    };

    let brand = props.config.brand_name;

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <NavBar
                brand_name={brand}
                dark={props.dark}
                on_toggle_theme={props.on_toggle_theme.clone()}
            />

            <header class="hero">
                <div class="container">
                    <h1 class="hero-title">
                        {"Turn Unused Software into "}<span class="highlight">{"Cash"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {format!("{} helps businesses sell their unused software licenses quickly and at the best possible price.", brand)}
                    </p>
                    <a href="#contact" class="btn btn-primary hero-cta">{"Sell My Licenses"}</a>
                </div>
            </header>

            <section class="section">
                <div class="container">
                    <h2>{"How It Works"}</h2>
                    <div class="card-grid three">
                        { for STEPS.iter().map(|step| html! {
                            <div class="card card-lift centered">
                                <div class={classes!("step-icon", step.tint)}>
                                    <i class={step.icon}></i>
                                </div>
                                <h3>{step.title}</h3>
                                <p>{step.body}</p>
                            </div>
                        })}
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2>{"Why Choose Us"}</h2>
                    <div class="card-grid four">
                        { for REASONS.iter().map(|reason| html! {
                            <div class="card card-grow">
                                <div class={classes!("reason-icon", reason.tint)}>
                                    <i class={reason.icon}></i>
                                </div>
                                <h3>{reason.title}</h3>
                                <p>{reason.body}</p>
                            </div>
                        })}
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2>{"Customer Testimonials"}</h2>
                    <div class="card-grid two">
                        { for TESTIMONIALS.iter().map(|t| html! {
                            <figure class="testimonial">
                                <div class="testimonial-head">
                                    <div class="avatar">{t.initials}</div>
                                    <div>
                                        <h4>{t.name}</h4>
                                        <p class="muted">{t.role}</p>
                                    </div>
                                </div>
                                <blockquote>{format!("\"{}\"", t.quote)}</blockquote>
                            </figure>
                        })}
                    </div>
                </div>
            </section>

            <section id="contact" class="section contact-section">
                <div class="container narrow contact-card">
                    <h2>{"Get a Free Valuation"}</h2>
                    <ValuationForm ack_display_ms={props.config.ack_display_ms} />
                </div>
            </section>

            <footer class="site-footer">
                <div class="container footer-inner">
                    <div>
                        <div class="brand">
                            <i class="fas fa-key brand-mark"></i>
                            <span>{brand}</span>
                        </div>
                        <p class="muted">{format!("© 2025 {}. All rights reserved.", brand)}</p>
                    </div>
                    <div class="footer-links">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                        <a href="#contact">{"Contact"}</a>
                    </div>
                </div>
            </footer>

            if let Some(table) = props.table.clone() {
                <>
                    <div class="chat-launcher">
                        <button onclick={toggle_chat} aria-label="Chat with us">
                            <i class="fas fa-comment-dots"></i>
                        </button>
                    </div>
                    if *chat_open {
                        <ChatWidget table={table} config={props.config.clone()} on_close={close_chat} />
                    }
                </>
            }
        </div>
    }
}

const LANDING_CSS: &str = r#"
.landing-page {
    min-height: 100vh;
}
.container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 0 1rem;
}
.container.narrow {
    max-width: 760px;
}
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 10;
    background: var(--surface);
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
}
.top-nav-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding-top: 0.75rem;
    padding-bottom: 0.75rem;
}
.brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 1.25rem;
    font-weight: 700;
    color: var(--accent);
    text-decoration: none;
}
.top-nav-actions {
    display: flex;
    align-items: center;
    gap: 1rem;
}
.theme-toggle {
    background: none;
    border: none;
    padding: 0.5rem;
    border-radius: 50%;
    cursor: pointer;
    color: var(--text);
}
.theme-toggle .sun {
    color: #facc15;
}
.btn {
    display: inline-block;
    border: none;
    border-radius: 6px;
    padding: 0.5rem 1rem;
    text-decoration: none;
    cursor: pointer;
    transition: background 0.2s ease;
}
.btn-primary {
    background: var(--accent);
    color: #fff;
}
.btn-primary:hover {
    background: var(--accent-strong);
}
.btn-block {
    width: 100%;
    padding: 0.75rem 1rem;
    font-weight: 500;
}
.hero {
    padding: 6rem 0 4rem;
    text-align: center;
}
.hero-title {
    font-size: 3rem;
    margin-bottom: 1rem;
}
.highlight {
    color: var(--accent);
}
.hero-subtitle {
    font-size: 1.25rem;
    max-width: 40rem;
    margin: 0 auto 2rem;
    color: var(--muted-text);
}
.hero-cta {
    font-size: 1.1rem;
    padding: 0.75rem 2rem;
    border-radius: 8px;
}
.section {
    padding: 4rem 0;
}
.section h2 {
    font-size: 2rem;
    text-align: center;
    margin-bottom: 3rem;
}
.card-grid {
    display: grid;
    gap: 2rem;
}
.card-grid.two { grid-template-columns: repeat(2, 1fr); }
.card-grid.three { grid-template-columns: repeat(3, 1fr); }
.card-grid.four { grid-template-columns: repeat(4, 1fr); gap: 1.5rem; }
.card {
    padding: 1.5rem;
    border-radius: 8px;
    background: var(--muted-surface);
    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.08);
    transition: transform 0.2s ease;
}
.card.centered { text-align: center; }
.card-lift:hover { transform: translateY(-5px); }
.card-grow:hover { transform: scale(1.03); }
.step-icon {
    display: inline-flex;
    padding: 1rem;
    border-radius: 50%;
    font-size: 1.75rem;
    margin-bottom: 1rem;
}
.reason-icon {
    font-size: 2rem;
    margin-bottom: 1rem;
}
.tint-blue { color: #2563eb; }
.tint-green { color: #16a34a; }
.tint-purple { color: #9333ea; }
.tint-red { color: #dc2626; }
.testimonial {
    margin: 0;
    padding: 1.5rem;
    border-radius: 8px;
    background: var(--muted-surface);
}
.testimonial-head {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1rem;
}
.testimonial-head h4 { margin: 0; }
.avatar {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
    background: var(--accent);
    color: #fff;
}
.testimonial blockquote {
    margin: 0;
    font-style: italic;
    color: var(--muted-text);
}
.muted {
    color: var(--muted-text);
    font-size: 0.9rem;
}
.contact-section {
    background: var(--muted-surface);
}
.contact-card {
    background: var(--surface);
    border-radius: 8px;
    padding: 2rem;
}
.form-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1.5rem;
    margin-bottom: 1.5rem;
}
.form-field label {
    display: block;
    font-size: 0.9rem;
    margin-bottom: 0.25rem;
    color: var(--muted-text);
}
.form-field {
    margin-bottom: 1.5rem;
}
.form-grid .form-field {
    margin-bottom: 0;
}
.form-input {
    width: 100%;
    box-sizing: border-box;
    padding: 0.75rem;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: var(--surface);
    color: var(--text);
}
.form-input.has-error {
    border-color: #ef4444;
}
.field-error {
    margin: 0.25rem 0 0;
    font-size: 0.85rem;
    color: #dc2626;
}
.form-thanks {
    text-align: center;
    padding: 2rem 0;
}
.form-thanks-badge {
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    color: #16a34a;
    background: rgba(22, 163, 74, 0.15);
}
.site-footer {
    padding: 2rem 0;
    background: #1f2937;
    color: #fff;
}
.site-footer .brand { color: #fff; }
.site-footer .muted { color: #9ca3af; }
.footer-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    flex-wrap: wrap;
    gap: 1rem;
}
.footer-links {
    display: flex;
    gap: 1rem;
}
.footer-links a {
    color: #9ca3af;
    text-decoration: none;
}
.footer-links a:hover { color: #fff; }
.chat-launcher {
    position: fixed;
    bottom: 1.5rem;
    right: 1.5rem;
    z-index: 20;
}
.chat-launcher button {
    border: none;
    border-radius: 50%;
    padding: 1rem;
    font-size: 1.25rem;
    cursor: pointer;
    color: #fff;
    background: var(--accent);
    box-shadow: 0 6px 16px rgba(0, 0, 0, 0.25);
}
@media (max-width: 768px) {
    .hero-title { font-size: 2.25rem; }
    .card-grid.two, .card-grid.three, .card-grid.four, .form-grid {
        grid-template-columns: 1fr;
    }
    .nav-contact { display: none; }
}
"#;

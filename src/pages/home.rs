use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::backgrounds::CyberGrid;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::project_card::linked;
use crate::components::section::Section;
use crate::data::{METHOD, SERVICES, SHOWCASE, TECH_STACK};
use crate::motion::parallax::HeroParallax;
use crate::Route;

fn apply_parallax(hero: &NodeRef, scroll_y: f64) {
    if let Some(element) = hero.cast::<HtmlElement>() {
        if let Err(e) = element.set_attribute("style", &HeroParallax::at(scroll_y).style()) {
            log::debug!("Hero parallax not applied: {:?}", e);
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let hero = use_node_ref();

    {
        let hero = hero.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                if let Some(window) = &window {
                    apply_parallax(&hero, window.scroll_y().unwrap_or(0.0));
                }
                let listener = window.map(|window| {
                    let on_scroll = Closure::wrap(Box::new(move || {
                        if let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                            apply_parallax(&hero, offset);
                        }
                    }) as Box<dyn FnMut()>);
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                    {
                        warn!("Hero parallax disabled: {:?}", e);
                    }
                    (window, on_scroll)
                });

                move || {
                    if let Some((window, on_scroll)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Two copies so the ticker loops seamlessly.
    let ticker = TECH_STACK
        .iter()
        .chain(TECH_STACK.iter())
        .map(|tech| html! { <span class="ticker-item">{*tech}<span class="ticker-sep">{"✦"}</span></span> });

    html! {
        <div class="home">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        min-height: 640px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        text-align: center;
                        padding: 0 1.5rem;
                        will-change: transform, opacity;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.375rem 1rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        font-size: 0.75rem;
                        font-family: monospace;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: #d4d4d4;
                        animation: fade-up 1s both;
                    }
                    .hero h1 {
                        font-size: clamp(3.5rem, 10vw, 9rem);
                        line-height: 0.9;
                        letter-spacing: -0.02em;
                        color: #fff;
                        margin: 2rem 0;
                        animation: fade-up 1.2s cubic-bezier(0.22, 1, 0.36, 1) both;
                    }
                    .hero h1 .accent {
                        background: linear-gradient(to right, #c084fc, #818cf8);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero p {
                        max-width: 40rem;
                        margin: 0 auto 2.5rem;
                        font-size: 1.25rem;
                        color: #a3a3a3;
                        animation: fade-up 0.8s 0.4s both;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                        animation: fade-up 0.8s 0.6s both;
                    }
                    @keyframes fade-up {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: none; }
                    }
                    .ticker {
                        position: relative;
                        z-index: 1;
                        overflow: hidden;
                        padding: 1.5rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(5, 5, 5, 0.8);
                    }
                    .ticker-track {
                        display: flex;
                        width: max-content;
                        animation: ticker 40s linear infinite;
                    }
                    .ticker-item {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #525252;
                        white-space: nowrap;
                        padding: 0 1.5rem;
                    }
                    .ticker-sep {
                        color: #a855f7;
                        margin-left: 3rem;
                    }
                    @keyframes ticker {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                    .service-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 1.5rem;
                    }
                    .service-tile {
                        padding: 2rem;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(255, 255, 255, 0.02);
                        transition: border-color 0.3s, background 0.3s;
                    }
                    .service-tile:hover {
                        border-color: rgba(168, 85, 247, 0.3);
                        background: rgba(255, 255, 255, 0.04);
                    }
                    .service-tile .icon {
                        font-size: 1.75rem;
                    }
                    .showcase-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }
                    .showcase-grid > :nth-child(even) {
                        margin-top: 6rem;
                    }
                    .showcase-item {
                        display: block;
                        color: #fff;
                        text-decoration: none;
                    }
                    .showcase-item img {
                        width: 100%;
                        aspect-ratio: 4 / 3;
                        object-fit: cover;
                        border-radius: 1.5rem;
                        transition: transform 0.7s cubic-bezier(0.22, 1, 0.36, 1);
                    }
                    .showcase-item:hover img {
                        transform: scale(1.03);
                    }
                    .method-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .method-step .number {
                        font-family: monospace;
                        font-size: 3rem;
                        color: rgba(168, 85, 247, 0.3);
                    }
                    .cta-panel {
                        text-align: center;
                        padding: 6rem 2rem;
                        border-radius: 2rem;
                        background: radial-gradient(circle at 50% 0%, rgba(168, 85, 247, 0.15), transparent 70%);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .cta-panel .btn-row {
                        display: flex;
                        justify-content: center;
                    }
                    @media (max-width: 768px) {
                        .showcase-grid, .method-grid { grid-template-columns: 1fr; }
                        .showcase-grid > :nth-child(even) { margin-top: 0; }
                    }
                "#}
            </style>

            <section class="hero">
                <CyberGrid />
                <div ref={hero} class="hero-content">
                    <div class="hero-badge">
                        <span class="pulse-dot"></span>
                        {"PixelKode Agency • 2026"}
                    </div>
                    <h1>{"PixelKode"}<br /><span class="accent">{"Agency."}</span></h1>
                    <p>
                        {"We engineer digital experiences that turn ambitious brands into "}
                        <strong>{"market dominance"}</strong>{"."}
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Contact}>
                            <Button size={ButtonSize::Lg}>{"Start a Project ↗"}</Button>
                        </Link<Route>>
                        <Link<Route> to={Route::Work}>
                            <Button size={ButtonSize::Lg} variant={ButtonVariant::Outline}>{"View Portfolio"}</Button>
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <div class="ticker">
                <div class="ticker-track">{ for ticker }</div>
            </div>

            <Section>
                <span class="eyebrow">{"Our Expertise"}</span>
                <h2 class="section-title">{"Engineered for Impact"}</h2>
                <div class="service-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="service-tile">
                            <span class="icon">{service.icon}</span>
                            <h3>{service.title}</h3>
                            <p class="muted">{service.description}</p>
                            <div class="project-tags">
                                { for service.capabilities.iter().take(3).map(|c| html! { <span class="tag">{*c}</span> }) }
                            </div>
                        </div>
                    }) }
                </div>
            </Section>

            <Section>
                <span class="eyebrow">{"Selected Works"}</span>
                <h2 class="section-title">{"Built to Perform"}</h2>
                <div class="showcase-grid">
                    { for SHOWCASE.iter().map(|item| linked(&item.link, "showcase-item", html! {
                        <>
                            <img src={item.image} alt={item.title} loading="lazy" />
                            <h3>{item.title}</h3>
                            <span class="muted">{item.label}</span>
                        </>
                    })) }
                </div>
                <div class="center-row">
                    <Link<Route> to={Route::Work}>
                        <Button variant={ButtonVariant::Secondary}>{"View All Projects"}</Button>
                    </Link<Route>>
                </div>
            </Section>

            <Section>
                <span class="eyebrow">{"The Methodology"}</span>
                <h2 class="section-title">{"From Concept to "}<span class="accent-text">{"Market Leader"}</span></h2>
                <p class="muted lead">
                    {"Our proven workflow ensures transparency, velocity, and world-class results for every partnership."}
                </p>
                <div class="method-grid">
                    { for METHOD.iter().map(|step| html! {
                        <div class="method-step">
                            <span class="number">{step.number}</span>
                            <h3>{step.title}</h3>
                            <p class="muted">{step.description}</p>
                        </div>
                    }) }
                </div>
            </Section>

            <Section>
                <div class="cta-panel">
                    <h2 class="section-title">{"Ready to build the future?"}</h2>
                    <p class="muted lead">{"Tell us about your idea. We reply within one business day."}</p>
                    <div class="btn-row">
                        <Link<Route> to={Route::Contact}>
                            <Button size={ButtonSize::Lg}>{"Let's Talk ↗"}</Button>
                        </Link<Route>>
                    </div>
                </div>
            </Section>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{Button, ButtonSize};
use crate::components::holographic_card::HolographicCard;
use crate::components::section::Section;
use crate::data::VALUES;
use crate::Route;

const FOUNDER_PORTRAITS: &[&str] = &["/assets/founder2.jpg", "/assets/founder1.jpg"];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about">
            <style>
                {r#"
                    .about .page-hero h1 .serif {
                        font-style: italic;
                        font-family: serif;
                        color: #94a3b8;
                    }
                    .about .underlined {
                        color: #fff;
                        border-bottom: 1px solid rgba(168, 85, 247, 0.3);
                    }
                    .founders {
                        display: grid;
                        grid-template-columns: 5fr 7fr;
                        gap: 4rem;
                        align-items: start;
                    }
                    .founders-story {
                        position: sticky;
                        top: 8rem;
                    }
                    .founders-story blockquote {
                        color: #fff;
                        font-weight: 500;
                        margin: 0;
                    }
                    .founder-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }
                    .founder-grid img {
                        width: 100%;
                        aspect-ratio: 3 / 4;
                        object-fit: cover;
                        border-radius: 1.5rem;
                        filter: grayscale(1);
                        transition: filter 0.7s;
                    }
                    .founder-grid img:hover {
                        filter: none;
                    }
                    .values-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .value-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(255, 255, 255, 0.02);
                    }
                    .identity {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        align-items: center;
                        gap: 3rem;
                    }
                    @media (max-width: 1024px) {
                        .founders, .identity { grid-template-columns: 1fr; }
                        .founders-story { position: static; }
                        .values-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>

            <Section class="page-hero">
                <span class="eyebrow">{"The Firm"}</span>
                <h1>{"We are artisans of"}<br /><span class="serif">{"digital reality."}</span></h1>
                <p class="lead muted">
                    {"PixelKode was founded on a rebellion against mediocrity. In an era of templates and shortcuts, we stand for "}
                    <span class="underlined">{"bespoke engineering"}</span>
                    {" and "}
                    <span class="underlined">{"intentional design"}</span>
                    {"."}
                </p>
            </Section>

            <Section class="bordered">
                <div class="founders">
                    <div class="founders-story">
                        <span class="chip">{"★ Founded By"}</span>
                        <h2 class="section-title">{"Visionaries,"}<br />{"Engineers,"}<br /><span class="muted">{"Partners."}</span></h2>
                        <p class="muted">
                            {"We met with a singular obsession: to bridge the gap between heavy backend engineering and fluid, cinematic frontend experiences."}
                        </p>
                        <p class="muted">
                            {"We believe that a website is the most powerful asset a brand possesses. We don't just build sites; we craft digital legacies that outperform and outlast the competition."}
                        </p>
                        <blockquote>{"\"Good enough is never enough. We build for the best.\""}</blockquote>
                    </div>
                    <div class="founder-grid">
                        { for FOUNDER_PORTRAITS.iter().map(|src| html! {
                            <img src={*src} alt="Founder" loading="lazy" />
                        }) }
                    </div>
                </div>
            </Section>

            <Section>
                <h2 class="section-title">{"Core Principles"}</h2>
                <div class="values-grid">
                    { for VALUES.iter().map(|value| html! {
                        <div class="value-card">
                            <h3>{value.title}</h3>
                            <p class="muted">{value.description}</p>
                        </div>
                    }) }
                </div>
            </Section>

            <Section>
                <div class="identity">
                    <div>
                        <h2 class="section-title">{"Ready to define"}<br />{"your legacy?"}</h2>
                        <p class="lead muted">{"Let's build something that outlasts the trends."}</p>
                        <Link<Route> to={Route::Contact}>
                            <Button size={ButtonSize::Lg}>{"Start a Conversation ↗"}</Button>
                        </Link<Route>>
                    </div>
                    <HolographicCard />
                </div>
            </Section>
        </div>
    }
}

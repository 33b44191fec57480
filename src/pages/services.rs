use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::section::Section;
use crate::data::{PROCESS, SERVICES, TECH_STACK};
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services">
            <style>
                {r#"
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                        gap: 1.5rem;
                    }
                    .service-card {
                        display: flex;
                        flex-direction: column;
                        padding: 2.5rem;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(255, 255, 255, 0.02);
                        transition: border-color 0.3s, transform 0.3s;
                    }
                    .service-card:hover {
                        border-color: rgba(168, 85, 247, 0.3);
                        transform: translateY(-4px);
                    }
                    .service-card .icon {
                        font-size: 2rem;
                        margin-bottom: 1.5rem;
                    }
                    .service-card ul {
                        list-style: none;
                        padding: 0;
                        margin: auto 0 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .service-card li {
                        padding: 0.75rem 0;
                        font-size: 0.875rem;
                        color: #d4d4d4;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .service-card li::before {
                        content: "→ ";
                        color: #a855f7;
                    }
                    .stack-row {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }
                    .process-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1px;
                        background: rgba(255, 255, 255, 0.05);
                        border-radius: 1rem;
                        overflow: hidden;
                    }
                    .process-step {
                        padding: 2rem;
                        background: #050505;
                    }
                    .process-step .number {
                        font-family: monospace;
                        color: #a855f7;
                    }
                    .services-cta {
                        text-align: center;
                    }
                    .services-cta .btn-row {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    @media (max-width: 768px) {
                        .process-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>

            <Section class="page-hero">
                <span class="eyebrow">{"Our Expertise"}</span>
                <h1>{"Engineering"}<br /><span class="serif muted">{"Excellence."}</span></h1>
                <p class="lead muted">
                    {"We deliver more than just code. We provide technical certainty in an uncertain world. Precision-engineered digital products built to scale."}
                </p>
            </Section>

            <Section>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <article id={service.id} class="service-card">
                            <span class="icon">{service.icon}</span>
                            <h3>{service.title}</h3>
                            <p class="muted">{service.description}</p>
                            <ul>
                                { for service.capabilities.iter().map(|c| html! { <li>{*c}</li> }) }
                            </ul>
                        </article>
                    }) }
                </div>
            </Section>

            <Section>
                <h3>{"The Stack"}</h3>
                <p class="muted">{"Best-in-class technologies we use daily."}</p>
                <div class="stack-row">
                    { for TECH_STACK.iter().map(|tech| html! { <span class="tag">{*tech}</span> }) }
                </div>
            </Section>

            <Section>
                <h2 class="section-title">{"How We Work"}</h2>
                <div class="process-grid">
                    { for PROCESS.iter().map(|step| html! {
                        <div class="process-step">
                            <span class="number">{step.number}</span>
                            <h3>{step.title}</h3>
                            <p class="muted">{step.description}</p>
                        </div>
                    }) }
                </div>
            </Section>

            <Section class="services-cta">
                <h2 class="section-title">{"Have a project in mind?"}</h2>
                <p class="lead muted">{"Let's discuss how we can engineer your next breakthrough."}</p>
                <div class="btn-row">
                    <Link<Route> to={Route::Contact}>
                        <Button size={ButtonSize::Lg}>{"Book a Consultation"}</Button>
                    </Link<Route>>
                    <Link<Route> to={Route::Work}>
                        <Button size={ButtonSize::Lg} variant={ButtonVariant::Outline}>{"See Our Work"}</Button>
                    </Link<Route>>
                </div>
            </Section>
        </div>
    }
}

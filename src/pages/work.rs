use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{Button, ButtonSize};
use crate::components::project_card::ProjectCard;
use crate::components::section::Section;
use crate::data::{filter_projects, Filter};
use crate::Route;

#[function_component(Work)]
pub fn work() -> Html {
    let filter = use_state(Filter::default);
    let projects = filter_projects(*filter);

    let filter_buttons = Filter::OPTIONS.iter().map(|option| {
        let selected = *option == *filter;
        let onclick = {
            let filter = filter.clone();
            let option = *option;
            Callback::from(move |_: MouseEvent| {
                debug!("Work filter set to {}", option.label());
                filter.set(option);
            })
        };
        html! {
            <button class={classes!("filter-button", selected.then_some("selected"))} {onclick}>
                {option.label()}
            </button>
        }
    });

    let listing = if projects.is_empty() {
        html! {
            <div class="work-empty">
                <p class="muted">{"No projects found in this category."}</p>
            </div>
        }
    } else {
        html! {
            <div class="work-grid">
                { for projects.into_iter().map(|project| html! {
                    <ProjectCard key={project.id} {project} />
                }) }
            </div>
        }
    };

    html! {
        <div class="work">
            <style>
                {r#"
                    .work-toolbar {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: flex-end;
                        justify-content: space-between;
                        gap: 1.5rem;
                    }
                    .work-filters {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .filter-button {
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: transparent;
                        color: #a3a3a3;
                        font-size: 0.875rem;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .filter-button:hover {
                        color: #fff;
                        border-color: rgba(255, 255, 255, 0.3);
                    }
                    .filter-button.selected {
                        background: #fff;
                        color: #000;
                        border-color: #fff;
                    }
                    .work-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(340px, 1fr));
                        gap: 2rem;
                    }
                    .work-empty {
                        padding: 5rem 0;
                        text-align: center;
                    }
                    .work-cta {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 3rem;
                        padding: 6rem 4rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        background: radial-gradient(circle at 100% 0%, rgba(168, 85, 247, 0.1), transparent 60%);
                    }
                "#}
            </style>

            <Section class="page-hero">
                <span class="eyebrow">{"Case Studies"}</span>
                <h1>{"Selected "}<span class="serif muted">{"Creations."}</span></h1>
                <div class="work-toolbar">
                    <p class="lead muted">
                        {"A curation of digital products that define our standard of quality. We build systems that scale and designs that resonate."}
                    </p>
                    <div class="work-filters">{ for filter_buttons }</div>
                </div>
            </Section>

            <Section>{listing}</Section>

            <Section>
                <div class="work-cta">
                    <div>
                        <h2 class="section-title">{"Have a vision?"}</h2>
                        <p class="muted">
                            {"We are currently accepting new partnerships for the upcoming quarter. Let's build something iconic."}
                        </p>
                    </div>
                    <Link<Route> to={Route::Contact}>
                        <Button size={ButtonSize::Lg}>{"Start a Project →"}</Button>
                    </Link<Route>>
                </div>
            </Section>
        </div>
    }
}

use yew::prelude::*;
use yew_hooks::use_interval;
use yew_router::prelude::*;

use crate::config;
use crate::data::{LinkTarget, Project};
use crate::Route;

/// Wraps `content` in whatever `target` points at. External links open in a
/// new tab; `LinkTarget::None` renders the content bare.
pub fn linked(target: &LinkTarget, class: &'static str, content: Html) -> Html {
    match target {
        LinkTarget::Internal(route) => html! {
            <Link<Route> to={route.clone()} classes={class}>{content}</Link<Route>>
        },
        LinkTarget::External(url) => html! {
            <a href={*url} class={class} target="_blank" rel="noopener noreferrer">{content}</a>
        },
        LinkTarget::None => html! {
            <div class={class}>{content}</div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let images = project.images;
    let index = use_state(|| 0usize);

    {
        let index = index.clone();
        let period = if images.is_slideshow() {
            config::SLIDESHOW_INTERVAL_MS
        } else {
            0
        };
        use_interval(move || index.set(images.next_index(*index)), period);
    }

    let frame_class = classes!(
        "project-frame",
        if project.portrait { "portrait" } else { "landscape" }
    );

    let dots = if images.is_slideshow() {
        html! {
            <div class="project-dots">
                { for (0..images.len()).map(|i| html! {
                    <span class={classes!("project-dot", (i == *index).then_some("current"))}></span>
                }) }
            </div>
        }
    } else {
        Html::default()
    };

    let body = html! {
        <>
            <div class={frame_class}>
                <img
                    key={*index}
                    class="project-image"
                    src={images.get(*index)}
                    alt={project.title}
                    loading="lazy"
                />
                {dots}
                if !matches!(project.link, LinkTarget::None) {
                    <span class="project-open">{"↗"}</span>
                }
            </div>
            <div class="project-meta">
                <div class="project-heading">
                    <h3>{project.title}</h3>
                    <span class="project-year">{project.year}</span>
                </div>
                <span class="project-category">{project.category.label()}</span>
                <p>{project.description}</p>
                <div class="project-tags">
                    { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                </div>
            </div>
        </>
    };

    linked(&project.link, "project-card", body)
}

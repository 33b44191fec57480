use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub children: Children,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Skip the centred max-width container for full-bleed content.
    #[prop_or(true)]
    pub contained: bool,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let inner = if props.contained {
        html! { <div class="container">{ for props.children.iter() }</div> }
    } else {
        html! { <>{ for props.children.iter() }</> }
    };

    html! {
        <section id={props.id.clone()} class={classes!("section", props.class.clone())}>
            {inner}
        </section>
    }
}

use yew::prelude::*;

use super::magnetic::Magnetic;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or(true)]
    pub magnetic: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!(
        "btn",
        props.variant.class(),
        props.size.class(),
        props.class.clone()
    );

    let button = html! {
        <button
            type={props.button_type.clone()}
            {class}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            if props.variant != ButtonVariant::Ghost {
                <span class="btn-fill-track"><span class="btn-fill"></span></span>
            }
            <span class="btn-label">{ for props.children.iter() }</span>
        </button>
    };

    if props.magnetic && !props.disabled {
        html! { <Magnetic>{button}</Magnetic> }
    } else {
        button
    }
}

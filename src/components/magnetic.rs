use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::motion::hooks::use_spring_motion;
use crate::motion::magnetic::magnetic_target;
use crate::motion::pointer::track;

#[derive(Properties, PartialEq)]
pub struct MagneticProps {
    pub children: Children,
    /// Fraction of the pointer offset the child follows, clamped to `[0, 1]`.
    #[prop_or(config::MAGNETIC_STRENGTH)]
    pub strength: f64,
}

/// Pulls its child towards the pointer while hovered and springs back on leave.
/// The offset is a transform on the wrapper, so the child keeps its own
/// handlers and layout slot.
#[function_component(Magnetic)]
pub fn magnetic(props: &MagneticProps) -> Html {
    let node = use_node_ref();
    let motion = use_spring_motion(node.clone(), config::MAGNETIC_SPRING, render_offset);

    let onmousemove = {
        let node = node.clone();
        let motion = motion.clone();
        let strength = props.strength;
        Callback::from(move |e: MouseEvent| {
            if let Some((_, sample)) = track(&node, &e) {
                motion.retarget(magnetic_target(sample, strength));
            }
        })
    };

    let onmouseleave = Callback::from(move |_: MouseEvent| {
        motion.retarget((0.0, 0.0));
    });

    html! {
        <div ref={node} class="magnetic" {onmousemove} {onmouseleave}>
            { for props.children.iter() }
        </div>
    }
}

fn render_offset(element: &HtmlElement, (x, y): (f64, f64)) {
    let transform = format!("translate3d({:.2}px, {:.2}px, 0)", x, y);
    if let Err(e) = element.style().set_property("transform", &transform) {
        log::debug!("Magnetic transform not applied: {:?}", e);
    }
}

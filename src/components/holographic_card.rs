use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::motion::hooks::use_spring_motion;
use crate::motion::pointer::track;
use crate::motion::tilt::{spotlight_gradient, tilt_transform};

/// Studio identity card that tilts towards the pointer and carries a
/// highlight under it.
#[function_component(HolographicCard)]
pub fn holographic_card() -> Html {
    let card = use_node_ref();
    let spotlight = use_node_ref();
    let hovered = use_state(|| false);
    let tilt = use_spring_motion(card.clone(), config::TILT_SPRING, render_tilt);

    let onmousemove = {
        let card = card.clone();
        let spotlight = spotlight.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            let Some((bounds, sample)) = track(&card, &e) else {
                return;
            };
            tilt.retarget(config::TILT.angles(sample));

            // The highlight follows the raw pointer, not the smoothed angles.
            if let Some(layer) = spotlight.cast::<HtmlElement>() {
                let (x, y) = bounds.local(sample);
                if let Err(e) = layer.style().set_property("background", &spotlight_gradient(x, y)) {
                    log::debug!("Spotlight not applied: {:?}", e);
                }
            }
        })
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| {
            tilt.retarget((0.0, 0.0));
            hovered.set(false);
        })
    };

    let card_class = classes!("holo-card", (*hovered).then_some("hovered"));

    html! {
        <div class="holo-stage">
            <style>
                {r#"
                    .holo-stage {
                        perspective: 1000px;
                        width: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 5rem 0;
                    }
                    .holo-card {
                        position: relative;
                        width: 340px;
                        height: 480px;
                        border-radius: 30px;
                        background: #050505;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.6);
                        transform-style: preserve-3d;
                        cursor: pointer;
                        user-select: none;
                    }
                    .holo-spotlight {
                        position: absolute;
                        inset: 0;
                        border-radius: 30px;
                        opacity: 0;
                        transition: opacity 0.5s;
                        pointer-events: none;
                        mix-blend-mode: overlay;
                        z-index: 2;
                    }
                    .holo-card.hovered .holo-spotlight {
                        opacity: 1;
                    }
                    .holo-layer {
                        position: absolute;
                        inset: 20px;
                        border-radius: 16px;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(10, 10, 10, 0.8);
                        backdrop-filter: blur(24px);
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        padding: 2rem 0;
                        transform: translateZ(50px);
                        z-index: 1;
                    }
                    .holo-status {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 0 1.5rem;
                        font-family: monospace;
                        font-size: 9px;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: #fff;
                    }
                    .holo-pulse {
                        display: inline-block;
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        background: #10b981;
                        margin-right: 0.5rem;
                        animation: holo-ping 1.5s infinite;
                    }
                    @keyframes holo-ping {
                        0%, 100% { box-shadow: 0 0 0 0 rgba(16, 185, 129, 0.6); }
                        50% { box-shadow: 0 0 0 4px rgba(16, 185, 129, 0); }
                    }
                    .holo-brand {
                        text-align: center;
                    }
                    .holo-brand img {
                        width: 56px;
                        height: 56px;
                        object-fit: contain;
                        filter: grayscale(1);
                        transition: filter 0.5s;
                    }
                    .holo-card.hovered .holo-brand img {
                        filter: none;
                    }
                    .holo-brand h3 {
                        font-size: 1.875rem;
                        color: #fff;
                        margin: 1.5rem 0 0.25rem;
                    }
                    .holo-brand p {
                        font-family: monospace;
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: #737373;
                    }
                    .holo-metrics {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        padding: 1.5rem 1.5rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        font-family: monospace;
                        font-size: 0.75rem;
                        color: #d4d4d4;
                    }
                    .holo-metrics span {
                        display: block;
                        font-size: 10px;
                        color: #525252;
                        text-transform: uppercase;
                    }
                    .holo-metrics div:last-child {
                        text-align: right;
                    }
                "#}
            </style>
            <div ref={card} class={card_class} {onmousemove} {onmouseenter} {onmouseleave}>
                <div ref={spotlight} class="holo-spotlight"></div>
                <div class="holo-layer">
                    <div class="holo-status">
                        <span>{"◉"}</span>
                        <span><span class="holo-pulse"></span>{"System Active"}</span>
                    </div>
                    <div class="holo-brand">
                        <img src="/assets/logo.png" alt="PixelKode" />
                        <h3>{"PixelKode"}</h3>
                        <p>{"Creative Intelligence"}</p>
                    </div>
                    <div class="holo-metrics">
                        <div><span>{"Version"}</span>{"v.4.2.0"}</div>
                        <div><span>{"Latency"}</span>{"12ms"}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn render_tilt(element: &HtmlElement, (pitch, yaw): (f64, f64)) {
    if let Err(e) = element.style().set_property("transform", &tilt_transform(pitch, yaw)) {
        log::debug!("Tilt transform not applied: {:?}", e);
    }
}

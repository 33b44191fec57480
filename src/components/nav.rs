use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::data::{EMAIL, EMAIL_COMPOSE_URL, NAV_LINKS, PHONE_DISPLAY, PHONE_URL, SOCIALS, WHATSAPP_URL};
use crate::motion::scroll::{set_document_scroll_locked, HeaderMode, NavState, NavVisualState};
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let route = use_route::<Route>();
    let state = use_mut_ref(|| NavState::new(config::NAV_THRESHOLDS));
    let visual = use_state_eq(NavVisualState::default);

    {
        let state = state.clone();
        let visual = visual.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let on_scroll = Closure::wrap(Box::new(move || {
                        let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
                            return;
                        };
                        let mut state = state.borrow_mut();
                        if state.observe_scroll(offset) {
                            visual.set(state.visual());
                        }
                    }) as Box<dyn FnMut()>);

                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                    {
                        warn!("Could not watch scrolling: {:?}", e);
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

    // Any navigation closes the mobile menu.
    {
        let state = state.clone();
        let visual = visual.clone();
        use_effect_with_deps(
            move |_| {
                let mut state = state.borrow_mut();
                state.route_changed();
                visual.set(state.visual());
                || ()
            },
            route.clone(),
        );
    }

    use_effect_with_deps(
        |locked: &bool| {
            set_document_scroll_locked(*locked);
            || set_document_scroll_locked(false)
        },
        visual.scroll_locked(),
    );

    let toggle_menu = {
        let state = state.clone();
        let visual = visual.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut state = state.borrow_mut();
            state.toggle_menu();
            visual.set(state.visual());
        })
    };

    let close_menu = {
        let visual = visual.clone();
        Callback::from(move |_: MouseEvent| {
            let mut state = state.borrow_mut();
            state.close_menu();
            visual.set(state.visual());
        })
    };

    let header_class = classes!(
        "site-header",
        match visual.header_mode() {
            HeaderMode::RevealedTransparent => "transparent",
            HeaderMode::RevealedOpaque => "opaque",
            HeaderMode::Hidden => "opaque concealed",
        },
        visual.scrolled.then_some("scrolled")
    );

    let desktop_links = NAV_LINKS.iter().map(|(title, target)| {
        let active = route.as_ref() == Some(target);
        html! {
            <Link<Route> to={target.clone()} classes={classes!("nav-link", active.then_some("active"))}>
                {*title}
                if active {
                    <span class="nav-underline"></span>
                }
            </Link<Route>>
        }
    });

    let mobile_links = NAV_LINKS.iter().map(|(title, target)| {
        html! {
            <div class="mobile-link" onclick={close_menu.clone()}>
                <Link<Route> to={target.clone()}>
                    <span>{*title}</span>
                    <span class="mobile-arrow">{"↗"}</span>
                </Link<Route>>
            </div>
        }
    });

    html! {
        <>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem 0;
                        transition: transform 0.8s cubic-bezier(0.22, 1, 0.36, 1), opacity 0.8s, background 0.3s, padding 0.3s;
                    }
                    .site-header.opaque {
                        padding: 1rem 0;
                        background: rgba(5, 5, 5, 0.8);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .site-header.concealed {
                        transform: translateY(-100px);
                        opacity: 0;
                    }
                    .header-inner {
                        max-width: 1400px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        position: relative;
                        z-index: 50;
                        color: #fff;
                        font-size: 1.25rem;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    .brand img {
                        width: 24px;
                        height: 24px;
                        padding: 8px;
                        border-radius: 8px;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .brand .dot {
                        color: #a855f7;
                    }
                    .desktop-nav {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-pill {
                        display: flex;
                        gap: 1.5rem;
                        padding: 0.625rem 1.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .nav-link {
                        position: relative;
                        font-size: 0.875rem;
                        color: #a3a3a3;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .nav-link:hover, .nav-link.active {
                        color: #fff;
                    }
                    .nav-underline {
                        position: absolute;
                        bottom: -1rem;
                        left: 0;
                        right: 0;
                        height: 2px;
                        background: #a855f7;
                        box-shadow: 0 0 10px rgba(168, 85, 247, 0.5);
                    }
                    .menu-toggle {
                        display: none;
                        position: relative;
                        z-index: 50;
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        cursor: pointer;
                    }
                    .menu-toggle span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px auto;
                        background: #fff;
                        transition: transform 0.3s, opacity 0.3s;
                    }
                    .menu-toggle.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                    .menu-toggle.open span:nth-child(2) { opacity: 0; }
                    .menu-toggle.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                        background: #050505;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 5rem 1.5rem 0;
                        animation: menu-drop 0.6s cubic-bezier(0.76, 0, 0.24, 1) both;
                    }
                    @keyframes menu-drop {
                        from { transform: translateY(-100%); }
                        to { transform: translateY(0); }
                    }
                    .mobile-label {
                        font-family: monospace;
                        font-size: 0.75rem;
                        color: #c084fc;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        margin-bottom: 1rem;
                    }
                    .mobile-link a {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        font-size: 3rem;
                        font-weight: 700;
                        color: #737373;
                        text-decoration: none;
                    }
                    .mobile-link a:hover {
                        color: #fff;
                    }
                    .mobile-arrow {
                        color: #a855f7;
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .mobile-link a:hover .mobile-arrow {
                        opacity: 1;
                    }
                    .mobile-info {
                        margin-top: 3rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }
                    .mobile-info h4 {
                        font-size: 0.875rem;
                        color: #a3a3a3;
                    }
                    .mobile-info a {
                        display: block;
                        color: #fff;
                        text-decoration: none;
                        word-break: break-all;
                    }
                    @media (max-width: 768px) {
                        .desktop-nav { display: none; }
                        .menu-toggle { display: block; }
                    }
                "#}
            </style>
            <header class={header_class}>
                <div class="header-inner">
                    <Link<Route> to={Route::Home} classes="brand">
                        <img src="/assets/logo.png" alt="PixelKode" />
                        <span>{"PixelKode"}<span class="dot">{"."}</span></span>
                    </Link<Route>>

                    <nav class="desktop-nav">
                        <div class="nav-pill">
                            { for desktop_links }
                        </div>
                        <Link<Route> to={Route::Contact}>
                            <span class="btn btn-primary btn-sm">
                                <span class="btn-label">{"Let's Talk ↗"}</span>
                            </span>
                        </Link<Route>>
                    </nav>

                    <button
                        class={classes!("menu-toggle", visual.menu_open.then_some("open"))}
                        aria-label="Toggle menu"
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>

            if visual.menu_open {
                <div class="mobile-menu">
                    <span class="mobile-label">{"Navigation"}</span>
                    { for mobile_links }
                    <div class="mobile-info">
                        <div>
                            <h4>{"Socials"}</h4>
                            { for SOCIALS.iter().map(|(name, url)| html! {
                                <a href={*url} target="_blank" rel="noopener noreferrer">{*name}</a>
                            }) }
                        </div>
                        <div>
                            <h4>{"Contact"}</h4>
                            <a href={EMAIL_COMPOSE_URL} target="_blank" rel="noopener noreferrer">{EMAIL}</a>
                            <a href={PHONE_URL}>{PHONE_DISPLAY}</a>
                            <a href={WHATSAPP_URL} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::data::{EMAIL, EMAIL_COMPOSE_URL, LEGAL, LOCATION, SITEMAP, SOCIALS};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = web_sys::js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        z-index: 1;
                        width: 100%;
                        background: #050505;
                        padding: 6rem 0 2.5rem;
                        overflow: hidden;
                    }
                    .site-footer::before {
                        content: "";
                        position: absolute;
                        top: 0;
                        left: 10%;
                        width: 80%;
                        height: 1px;
                        background: linear-gradient(to right, transparent, rgba(168, 85, 247, 0.4), transparent);
                    }
                    .footer-top {
                        display: grid;
                        grid-template-columns: 5fr 2fr 5fr;
                        gap: 3rem;
                        padding-bottom: 4rem;
                        margin-bottom: 2.5rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .footer-brand a.brand-mark {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        color: #fff;
                        text-decoration: none;
                    }
                    .footer-brand img {
                        width: 32px;
                        height: 32px;
                        padding: 8px;
                        border-radius: 12px;
                        background: rgba(255, 255, 255, 0.05);
                    }
                    .footer-brand strong {
                        display: block;
                        font-size: 1.5rem;
                    }
                    .footer-brand small {
                        font-size: 0.75rem;
                        color: #737373;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                    }
                    .footer-brand p {
                        color: #a3a3a3;
                        font-size: 1.125rem;
                        line-height: 1.7;
                        max-width: 28rem;
                    }
                    .footer-mail {
                        display: inline-block;
                        padding: 0.625rem 1.25rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #fff;
                        text-decoration: none;
                        font-size: 0.875rem;
                    }
                    .footer-links {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        grid-column: 3;
                    }
                    .footer-links h4 {
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.4);
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                    }
                    .footer-links a {
                        display: block;
                        width: fit-content;
                        margin-bottom: 0.75rem;
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.2s, transform 0.2s;
                    }
                    .footer-links a:hover {
                        color: #c084fc;
                        transform: translateX(6px);
                    }
                    .footer-bottom {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        font-size: 0.875rem;
                        color: #737373;
                    }
                    .footer-bottom a {
                        color: #737373;
                        margin-left: 1.5rem;
                        text-decoration: none;
                    }
                    .footer-bottom a:hover {
                        color: #fff;
                    }
                    @media (max-width: 1024px) {
                        .footer-top { grid-template-columns: 1fr; }
                        .footer-links { grid-column: auto; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-top">
                    <div class="footer-brand">
                        <Link<Route> to={Route::Home} classes="brand-mark">
                            <img src="/assets/logo.png" alt="PixelKode Logo" />
                            <div>
                                <strong>{"PixelKode."}</strong>
                                <small>{"Digital Creative Agency"}</small>
                            </div>
                        </Link<Route>>
                        <p>
                            {"We craft high-performance digital experiences. Merging strategy, design, and technology to help brands lead the future."}
                        </p>
                        <a class="footer-mail" href={EMAIL_COMPOSE_URL} target="_blank" rel="noopener noreferrer">
                            {"✉ "}{EMAIL}
                        </a>
                    </div>
                    <div class="footer-links">
                        <div>
                            <h4>{"Explore"}</h4>
                            { for SITEMAP.iter().map(|(name, target)| html! {
                                <Link<Route> to={target.clone()}>{*name}</Link<Route>>
                            }) }
                        </div>
                        <div>
                            <h4>{"Connect"}</h4>
                            { for SOCIALS.iter().map(|(name, url)| html! {
                                <a href={*url} target="_blank" rel="noopener noreferrer">{format!("{} ↗", name)}</a>
                            }) }
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <span>{format!("© {} PixelKode. Made with ♥ in {}.", year, LOCATION)}</span>
                    <span>
                        { for LEGAL.iter().map(|(name, target)| html! {
                            <Link<Route> to={target.clone()}>{*name}</Link<Route>>
                        }) }
                    </span>
                </div>
            </div>
        </footer>
    }
}

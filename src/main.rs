use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod contact;
mod data;
mod motion {
    pub mod frame;
    pub mod hooks;
    pub mod magnetic;
    pub mod parallax;
    pub mod pointer;
    pub mod scroll;
    pub mod spring;
    pub mod tilt;
    pub mod transition;
}
mod components {
    pub mod backgrounds;
    pub mod button;
    pub mod footer;
    pub mod holographic_card;
    pub mod magnetic;
    pub mod nav;
    pub mod page_transition;
    pub mod project_card;
    pub mod section;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod services;
    pub mod termsprivacy;
    pub mod work;
}

use components::{
    backgrounds::NeuralBackground,
    footer::Footer,
    nav::Nav,
    page_transition::PageTransition,
};
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    services::Services,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
    work::Work,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/work")]
    Work,
    #[at("/contact")]
    Contact,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Work => {
            info!("Rendering Work page");
            html! { <Work /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <NeuralBackground />
            <Nav />
            <PageTransition />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting PixelKode");
    yew::Renderer::<App>::new().render();
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_path_is_recognised() {
        let pages = [
            ("/", Route::Home),
            ("/about", Route::About),
            ("/services", Route::Services),
            ("/work", Route::Work),
            ("/contact", Route::Contact),
            ("/privacy", Route::Privacy),
            ("/terms", Route::Terms),
        ];
        for (path, route) in pages {
            assert_eq!(Route::recognize(path), Some(route.clone()), "{}", path);
            assert_eq!(route.to_path(), path);
        }
    }

    #[test]
    fn unknown_paths_match_nothing() {
        assert_eq!(Route::recognize("/blog"), None);
        assert_eq!(Route::recognize("/work/kasi-cafe"), None);
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::history::Location;
use yew_router::prelude::*;

use crate::config;
use crate::motion::transition::{Cue, Phase, RouteTransition};
use crate::{switch, Route};

#[derive(Clone, PartialEq)]
struct View {
    path: String,
    phase: Phase,
}

/// Drives the phase timers for one mounted `PageTransition`. Bumping `epoch`
/// orphans any timer still pending.
#[derive(Clone)]
struct Driver {
    transition: Rc<RefCell<RouteTransition<String>>>,
    epoch: Rc<RefCell<u32>>,
    view: UseStateHandle<View>,
}

impl Driver {
    fn publish(&self) {
        let transition = self.transition.borrow();
        self.view.set(View {
            path: transition.displayed().clone(),
            phase: transition.phase(),
        });
    }

    fn play(&self, cue: Option<Cue>) {
        self.publish();
        let Some(cue) = cue else {
            return;
        };

        let duration = match cue {
            Cue::Exit => config::PAGE_EXIT_MS,
            Cue::Enter => {
                scroll_to_top();
                config::PAGE_ENTER_MS
            }
        };
        debug!("Page transition {:?} for {}", cue, self.view.path);

        let epoch = *self.epoch.borrow();
        let driver = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            if *driver.epoch.borrow() != epoch {
                return;
            }
            let next = {
                let mut transition = driver.transition.borrow_mut();
                match cue {
                    Cue::Exit => transition.exit_finished(),
                    Cue::Enter => transition.enter_finished(),
                }
            };
            driver.play(next);
        });
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn current_path(location: Option<Location>) -> String {
    location
        .map(|l| l.path().to_string())
        .unwrap_or_else(|| "/".to_string())
}

/// Renders the routed page with an exit animation for the outgoing path
/// followed by an enter animation for the incoming one.
#[function_component(PageTransition)]
pub fn page_transition() -> Html {
    let path = current_path(use_location());

    let transition = {
        let path = path.clone();
        use_mut_ref(move || RouteTransition::new(path))
    };
    let epoch = use_mut_ref(|| 0u32);
    let view = {
        let transition = transition.borrow();
        let initial = View {
            path: transition.displayed().clone(),
            phase: transition.phase(),
        };
        use_state_eq(move || initial)
    };

    let driver = Driver {
        transition: transition.clone(),
        epoch: epoch.clone(),
        view: view.clone(),
    };

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |_| {
                driver.play(Some(Cue::Enter));
                move || {
                    *epoch.borrow_mut() += 1;
                }
            },
            (),
        );
    }

    use_effect_with_deps(
        move |path: &String| {
            let cue = transition.borrow_mut().navigate(path.clone());
            driver.play(cue);
            || ()
        },
        path,
    );

    let class = classes!(
        "page",
        match view.phase {
            Phase::Entering => Some("page-enter"),
            Phase::Exiting => Some("page-exit"),
            Phase::Idle => None,
        },
        (view.path != "/").then_some("page-offset")
    );

    let content = Route::recognize(&view.path).map(switch).unwrap_or_default();

    html! {
        <main key={view.path.clone()} {class}>
            <style>
                {r#"
                    .page {
                        position: relative;
                        width: 100%;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                    }
                    .page-offset {
                        padding-top: 6rem;
                    }
                    .page-enter {
                        animation: page-enter 0.8s cubic-bezier(0.22, 1, 0.36, 1) both;
                    }
                    .page-exit {
                        animation: page-exit 0.6s cubic-bezier(0.22, 1, 0.36, 1) both;
                    }
                    @keyframes page-enter {
                        from { opacity: 0; transform: translateY(20px) scale(0.98); filter: blur(12px); }
                        to { opacity: 1; transform: none; filter: blur(0); }
                    }
                    @keyframes page-exit {
                        from { opacity: 1; transform: none; filter: blur(0); }
                        to { opacity: 0; transform: translateY(-20px) scale(0.98); filter: blur(12px); }
                    }
                "#}
            </style>
            {content}
        </main>
    }
}

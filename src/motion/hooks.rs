use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use super::frame::FrameLoop;
use super::spring::{SpringConfig, SpringPair};

/// Handle to a pair of springs animating one element.
#[derive(Clone)]
pub struct SpringMotion {
    springs: Rc<RefCell<SpringPair>>,
    frame: Rc<RefCell<Option<FrameLoop>>>,
}

impl SpringMotion {
    pub fn retarget(&self, target: (f64, f64)) {
        self.springs.borrow_mut().set_target(target);
        if let Some(frame) = self.frame.borrow().as_ref() {
            frame.wake();
        }
    }
}

/// Springs whose output is written straight to the element behind `node` by
/// `render` on every frame, without re-rendering the component. The frame
/// loop lives as long as the component and is cancelled on unmount.
#[hook]
pub fn use_spring_motion(
    node: NodeRef,
    config: SpringConfig,
    render: fn(&HtmlElement, (f64, f64)),
) -> SpringMotion {
    let springs = use_mut_ref(|| SpringPair::new(config));
    let frame = use_mut_ref(|| None::<FrameLoop>);

    {
        let springs = springs.clone();
        let frame = frame.clone();
        use_effect_with_deps(
            move |_| {
                let step = move |dt: f64| {
                    let mut springs = springs.borrow_mut();
                    let moving = springs.step(dt);
                    if let Some(element) = node.cast::<HtmlElement>() {
                        render(&element, springs.current());
                    }
                    moving
                };
                *frame.borrow_mut() = Some(FrameLoop::new(step));

                move || {
                    if let Some(frame) = frame.borrow_mut().take() {
                        frame.cancel();
                    }
                }
            },
            (),
        );
    }

    SpringMotion { springs, frame }
}

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config;

const FIRST_FRAME_DELTA: f64 = 1.0 / 60.0;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct LoopState {
    handle: Option<i32>,
    last_timestamp: Option<f64>,
    step: Box<dyn FnMut(f64) -> bool>,
}

/// A `requestAnimationFrame` subscription.
///
/// `step` receives the frame delta in seconds and returns whether it wants
/// another frame. A loop that went idle is restarted with [`FrameLoop::wake`].
/// Dropping or cancelling the handle stops it; browsers do not deliver frames
/// to hidden tabs, and the delta is clamped when they resume.
pub struct FrameLoop {
    state: Rc<RefCell<LoopState>>,
    tick: Tick,
}

impl FrameLoop {
    pub fn new(step: impl FnMut(f64) -> bool + 'static) -> Self {
        let state = Rc::new(RefCell::new(LoopState {
            handle: None,
            last_timestamp: None,
            step: Box::new(step),
        }));
        let tick: Tick = Rc::new(RefCell::new(None));

        let weak_state = Rc::downgrade(&state);
        let weak_tick = Rc::downgrade(&tick);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            let (Some(state), Some(tick)) = (weak_state.upgrade(), weak_tick.upgrade()) else {
                return;
            };
            let keep_going = {
                let mut state = state.borrow_mut();
                state.handle = None;
                let dt = frame_delta(state.last_timestamp, timestamp);
                state.last_timestamp = Some(timestamp);
                (state.step)(dt)
            };
            if keep_going {
                request_frame(&state, &tick);
            } else {
                state.borrow_mut().last_timestamp = None;
            }
        }) as Box<dyn FnMut(f64)>));

        Self { state, tick }
    }

    pub fn wake(&self) {
        if self.state.borrow().handle.is_none() {
            request_frame(&self.state, &self.tick);
        }
    }

    pub fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        state.last_timestamp = None;
        if let Some(handle) = state.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(state: &Rc<RefCell<LoopState>>, tick: &Tick) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let tick = tick.borrow();
    let Some(closure) = tick.as_ref() else {
        return;
    };
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(handle) => state.borrow_mut().handle = Some(handle),
        Err(e) => warn!("requestAnimationFrame failed: {:?}", e),
    }
}

/// Seconds between two frame timestamps (milliseconds), clamped so a long
/// pause does not turn into one huge step.
pub fn frame_delta(previous: Option<f64>, now: f64) -> f64 {
    match previous {
        Some(previous) if now.is_finite() && previous.is_finite() => {
            ((now - previous) / 1000.0).clamp(0.0, config::MAX_FRAME_DELTA)
        }
        _ => FIRST_FRAME_DELTA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_assumes_sixty_hertz() {
        assert_eq!(frame_delta(None, 1234.0), 1.0 / 60.0);
    }

    #[test]
    fn regular_frames_use_real_time() {
        let dt = frame_delta(Some(1000.0), 1016.0);
        assert!((dt - 0.016).abs() < 1e-12);
    }

    #[test]
    fn resumed_tab_is_clamped() {
        assert_eq!(frame_delta(Some(1000.0), 61_000.0), config::MAX_FRAME_DELTA);
    }

    #[test]
    fn clock_going_backwards_is_zero() {
        assert_eq!(frame_delta(Some(2000.0), 1990.0), 0.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::FrameLoop;

    fn counting_loop() -> (FrameLoop, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let frames = FrameLoop::new(move |_| {
            counter.set(counter.get() + 1);
            true
        });
        (frames, calls)
    }

    #[wasm_bindgen_test]
    async fn cancelled_loop_gets_no_more_frames() {
        let (frames, calls) = counting_loop();
        frames.wake();
        TimeoutFuture::new(100).await;
        assert!(calls.get() > 0);

        frames.cancel();
        let after_cancel = calls.get();
        TimeoutFuture::new(100).await;
        assert_eq!(calls.get(), after_cancel);
    }

    #[wasm_bindgen_test]
    async fn dropped_loop_gets_no_more_frames() {
        let (frames, calls) = counting_loop();
        frames.wake();
        TimeoutFuture::new(100).await;

        drop(frames);
        let after_drop = calls.get();
        TimeoutFuture::new(100).await;
        assert_eq!(calls.get(), after_drop);
    }

    #[wasm_bindgen_test]
    async fn idle_loop_waits_for_wake() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let frames = FrameLoop::new(move |_| {
            counter.set(counter.get() + 1);
            false
        });
        frames.wake();
        TimeoutFuture::new(100).await;
        assert_eq!(calls.get(), 1);

        frames.wake();
        TimeoutFuture::new(100).await;
        assert_eq!(calls.get(), 2);
    }
}

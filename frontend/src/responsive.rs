use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use yew::prelude::*;

use crate::dom::{self, Listener};

pub fn is_touch_device() -> bool {
    let Some(window) = dom::window() else {
        return false;
    };
    let has_touch_events =
        js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    has_touch_events || window.navigator().max_touch_points() > 0
}

/// Tags `<body>` with `touch-device` and installs a passive `touchstart`
/// listener so mobile browsers drop their tap delay. Runs once on mount.
#[hook]
pub fn use_touch_optimisations() {
    use_effect_with_deps(
        |_| {
            let document = dom::document();
            if is_touch_device() {
                if let Some(body) = document.as_ref().and_then(|d| d.body()) {
                    let _ = body.class_list().add_1("touch-device");
                    info!("Touch device detected");
                }
            }
            let touch = document
                .as_ref()
                .and_then(|d| Listener::passive(d, "touchstart", |_| {}));
            move || drop(touch)
        },
        (),
    );
}

/// One-flag guard that lets at most one animation frame be requested at a
/// time. Clones share the flag.
#[derive(Clone, Default)]
pub struct FrameGuard(Rc<Cell<bool>>);

impl FrameGuard {
    /// Claims the next frame. False means one is already pending.
    pub fn try_begin(&self) -> bool {
        if self.0.get() {
            false
        } else {
            self.0.set(true);
            true
        }
    }

    pub fn finish(&self) {
        self.0.set(false);
    }
}

/// Runs `on_frame` with the current scroll offset at most once per
/// animation frame, however many scroll events arrive in between.
#[hook]
pub fn use_frame_coalesced_scroll<F>(on_frame: F)
where
    F: Fn(f64) + 'static,
{
    let on_frame = Rc::new(on_frame);
    use_effect_with_deps(
        move |_| {
            let guard = FrameGuard::default();
            let listener = dom::window().and_then(|window| {
                let frame_window = window.clone();
                Listener::passive(&window, "scroll", move |_| {
                    if !guard.try_begin() {
                        return;
                    }
                    let frame_guard = guard.clone();
                    let on_frame = on_frame.clone();
                    let frame = Closure::once_into_js(move || {
                        frame_guard.finish();
                        on_frame(dom::scroll_y());
                    });
                    if frame_window.request_animation_frame(frame.unchecked_ref()).is_err() {
                        guard.finish();
                    }
                })
            });
            move || drop(listener)
        },
        (),
    );
}

/// Restartable quiet-period timer. Each `schedule` call cancels the one
/// before it, so the callback only runs once events stop for `millis`.
///
/// Generic over the pending handle; cancellation is whatever the handle
/// does on drop, which for `gloo_timers` is `clearTimeout`.
pub struct Debouncer<H = Timeout> {
    pending: Rc<RefCell<Option<H>>>,
}

impl<H> Clone for Debouncer<H> {
    fn clone(&self) -> Self {
        Self { pending: self.pending.clone() }
    }
}

impl<H> Default for Debouncer<H> {
    fn default() -> Self {
        Self { pending: Rc::new(RefCell::new(None)) }
    }
}

impl<H> Debouncer<H> {
    /// Installs `handle` as the only pending one, dropping the previous.
    pub fn arm(&self, handle: H) {
        let previous = self.pending.borrow_mut().replace(handle);
        drop(previous);
    }

    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }
}

impl Debouncer<Timeout> {
    pub fn schedule<F>(&self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.arm(Timeout::new(millis, callback));
    }
}

#[hook]
pub fn use_debounced_resize<F>(millis: u32, on_settle: F)
where
    F: Fn() + 'static,
{
    let on_settle = Rc::new(on_settle);
    use_effect_with_deps(
        move |_| {
            let debouncer = Debouncer::<Timeout>::default();
            let cancel = debouncer.clone();
            let listener = dom::window().and_then(|window| {
                Listener::new(&window, "resize", move |_| {
                    let on_settle = on_settle.clone();
                    debouncer.schedule(millis, move || on_settle());
                })
            });
            move || {
                drop(listener);
                cancel.cancel();
            }
        },
        (),
    );
}

#[hook]
pub fn use_orientation_change<F>(on_change: F)
where
    F: Fn() + 'static,
{
    let on_change = Rc::new(on_change);
    use_effect_with_deps(
        move |_| {
            let listener = dom::window()
                .and_then(|window| Listener::new(&window, "orientationchange", move |_| on_change()));
            move || drop(listener)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_guard_coalesces_until_finished() {
        let guard = FrameGuard::default();
        assert!(guard.try_begin());
        assert!(!guard.try_begin());
        assert!(!guard.try_begin());
        assert!(guard.0.get());

        guard.finish();
        assert!(!guard.0.get());
        assert!(guard.try_begin());
    }

    #[test]
    fn frame_guard_clones_share_the_flag() {
        let guard = FrameGuard::default();
        let handle = guard.clone();
        assert!(guard.try_begin());
        assert!(!handle.try_begin());
        handle.finish();
        assert!(guard.try_begin());
    }

    struct Pending {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl Drop for Pending {
        fn drop(&mut self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn each_schedule_cancels_the_previous_timer() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let debouncer: Debouncer<Pending> = Debouncer::default();
        let handle = debouncer.clone();

        for id in 1..=3 {
            debouncer.arm(Pending { id, cancelled: cancelled.clone() });
        }
        // Resize burst: only the last timer survives.
        assert_eq!(*cancelled.borrow(), vec![1, 2]);

        handle.cancel();
        assert_eq!(*cancelled.borrow(), vec![1, 2, 3]);
        handle.cancel();
        assert_eq!(cancelled.borrow().len(), 3);
    }
}

//! Cooperative scheduling used to stage visual transitions.
//!
//! Nothing here affects data correctness: deferrals only give the browser a
//! chance to paint between transition stages. Tests drive the same trait with
//! a manual queue instead of real timers.

use std::time::Duration;

/// Default delay before transition flags are cleared.
pub const SETTLE_DURATION: Duration = Duration::from_millis(300);

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run `task` on the next macro-task turn.
    fn defer_once(&self, task: Task);
    /// Run `task` aligned to the next frame boundary.
    fn on_next_paint(&self, task: Task);
    /// Run `task` once `delay` has elapsed.
    fn after(&self, delay: Duration, task: Task);
}

/// Browser scheduler backed by `setTimeout` and `requestAnimationFrame`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    fn defer_once(&self, task: Task) {
        gloo_timers::callback::Timeout::new(0, move || task()).forget();
    }

    fn on_next_paint(&self, task: Task) {
        use std::cell::Cell;
        use std::rc::Rc;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        // requestAnimationFrame can be refused (e.g. no window in a worker);
        // fall back to roughly one frame of delay.
        let slot = Rc::new(Cell::new(Some(task)));
        let frame_slot = Rc::clone(&slot);
        let callback = Closure::once_into_js(move || {
            if let Some(task) = frame_slot.take() {
                task();
            }
        });
        let scheduled = web_sys::window()
            .map(|w| w.request_animation_frame(callback.unchecked_ref()).is_ok())
            .unwrap_or(false);
        if !scheduled {
            if let Some(task) = slot.take() {
                gloo_timers::callback::Timeout::new(16, move || task()).forget();
            }
        }
    }

    fn after(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || task()).forget();
    }
}

/// Runs everything immediately. Used where there is no event loop to defer to
/// (native builds without a document).
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineScheduler;

impl Scheduler for InlineScheduler {
    fn defer_once(&self, task: Task) {
        task();
    }

    fn on_next_paint(&self, task: Task) {
        task();
    }

    fn after(&self, _delay: Duration, task: Task) {
        task();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn inline_scheduler_runs_nested_tasks_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let scheduler = Rc::new(InlineScheduler);

        let outer_log = Rc::clone(&log);
        let inner = Rc::clone(&scheduler);
        scheduler.defer_once(Box::new(move || {
            outer_log.borrow_mut().push("defer");
            let paint_log = Rc::clone(&outer_log);
            inner.on_next_paint(Box::new(move || paint_log.borrow_mut().push("paint")));
            let timer_log = Rc::clone(&outer_log);
            inner.after(SETTLE_DURATION, Box::new(move || timer_log.borrow_mut().push("settle")));
        }));

        assert_eq!(*log.borrow(), vec!["defer", "paint", "settle"]);
    }
}

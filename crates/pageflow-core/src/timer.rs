//! Deadline timers driven by the frame-callback queue.
//!
//! A timer re-arms itself on every frame until the drained frame time
//! reaches its deadline, then fires exactly once. Deadlines are measured
//! from the most recent drain, so a test that drains at virtual time `t`
//! and schedules a `d`-millisecond timer sees it fire at the first drain
//! at or after `t + d`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
use crate::runtime::RuntimeHandle;

struct TimerState {
    deadline_nanos: u64,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
    registration: Option<FrameCallbackRegistration>,
}

fn arm(state: Rc<RefCell<Option<TimerState>>>, clock: FrameClock) {
    let state_for_frame = Rc::clone(&state);
    let clock_for_frame = clock.clone();
    let registration = clock.with_frame_nanos(move |frame_time_nanos| {
        let due = {
            let guard = state_for_frame.borrow();
            let Some(timer) = guard.as_ref() else {
                return;
            };
            frame_time_nanos >= timer.deadline_nanos
        };

        if due {
            let callback = state_for_frame
                .borrow_mut()
                .take()
                .and_then(|mut timer| timer.callback.take());
            if let Some(callback) = callback {
                callback(frame_time_nanos);
            }
        } else {
            arm(Rc::clone(&state_for_frame), clock_for_frame.clone());
        }
    });

    if let Some(timer) = state.borrow_mut().as_mut() {
        timer.registration = Some(registration);
    }
}

/// Schedules millisecond-deadline callbacks on a runtime's frame clock.
#[derive(Clone)]
pub struct TimerQueue {
    runtime: RuntimeHandle,
}

impl TimerQueue {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    /// Fires `callback` at the first frame whose time is at least
    /// `delay_millis` past the most recent drain.
    pub fn schedule_millis(
        &self,
        delay_millis: u64,
        callback: impl FnOnce(u64) + 'static,
    ) -> TimerRegistration {
        let deadline_nanos = self.runtime.last_frame_time_nanos() + delay_millis * 1_000_000;
        let state = Rc::new(RefCell::new(Some(TimerState {
            deadline_nanos,
            callback: Some(Box::new(callback)),
            registration: None,
        })));
        arm(Rc::clone(&state), self.runtime.frame_clock());
        TimerRegistration { state }
    }
}

/// Handle to a scheduled timer. Dropping it does NOT cancel the timer;
/// call [`TimerRegistration::cancel`] to stop it from firing.
pub struct TimerRegistration {
    state: Rc<RefCell<Option<TimerState>>>,
}

impl TimerRegistration {
    pub fn cancel(&self) {
        if let Some(timer) = self.state.borrow_mut().take() {
            drop(timer.registration);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{DefaultScheduler, Runtime};
    use std::cell::Cell;
    use std::sync::Arc;

    fn queue() -> (Runtime, TimerQueue) {
        let runtime = Runtime::new(Arc::new(DefaultScheduler));
        let queue = TimerQueue::new(runtime.handle());
        (runtime, queue)
    }

    #[test]
    fn fires_at_deadline_not_before() {
        let (runtime, queue) = queue();
        let handle = runtime.handle();
        let fired = Rc::new(Cell::new(false));

        let fired_cb = Rc::clone(&fired);
        let timer = queue.schedule_millis(250, move |_| fired_cb.set(true));

        handle.drain_frame_callbacks(100_000_000);
        assert!(!fired.get());
        assert!(timer.is_pending());

        handle.drain_frame_callbacks(249_000_000);
        assert!(!fired.get());

        handle.drain_frame_callbacks(250_000_000);
        assert!(fired.get());
        assert!(!timer.is_pending());
    }

    #[test]
    fn deadline_is_relative_to_last_drain() {
        let (runtime, queue) = queue();
        let handle = runtime.handle();
        handle.drain_frame_callbacks(1_000_000_000);

        let fired = Rc::new(Cell::new(false));
        let fired_cb = Rc::clone(&fired);
        queue.schedule_millis(100, move |_| fired_cb.set(true));

        handle.drain_frame_callbacks(1_050_000_000);
        assert!(!fired.get());
        handle.drain_frame_callbacks(1_100_000_000);
        assert!(fired.get());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let (runtime, queue) = queue();
        let handle = runtime.handle();
        let fired = Rc::new(Cell::new(false));

        let fired_cb = Rc::clone(&fired);
        let timer = queue.schedule_millis(10, move |_| fired_cb.set(true));
        timer.cancel();

        handle.drain_frame_callbacks(1_000_000_000);
        assert!(!fired.get());
    }

    #[test]
    fn fires_exactly_once() {
        let (runtime, queue) = queue();
        let handle = runtime.handle();
        let count = Rc::new(Cell::new(0u32));

        let count_cb = Rc::clone(&count);
        queue.schedule_millis(16, move |_| count_cb.set(count_cb.get() + 1));

        handle.drain_frame_callbacks(16_000_000);
        handle.drain_frame_callbacks(32_000_000);
        handle.drain_frame_callbacks(48_000_000);
        assert_eq!(count.get(), 1);
    }
}

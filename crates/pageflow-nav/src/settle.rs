//! Snap-back settle animation for under-threshold releases.
//!
//! Drives the visual offset back to zero using the runtime's frame callback
//! system, so tests advance it with a virtual clock.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pageflow_animation::Easing;
use pageflow_core::{FrameCallbackRegistration, FrameClock, MutableState};

/// Duration of the snap-back tween. Matches the duration model's minimum so
/// an uncommitted release never outlasts the shortest committed transition.
pub const SNAP_BACK_MS: u64 = 150;

struct SettleState {
    from_offset: f32,
    start_frame_time_nanos: Cell<Option<u64>>,
    registration: Option<FrameCallbackRegistration>,
    is_running: Cell<bool>,
}

fn schedule_next_frame(
    state: Rc<RefCell<Option<SettleState>>>,
    frame_clock: FrameClock,
    offset: MutableState<f32>,
) {
    let state_for_closure = Rc::clone(&state);
    let frame_clock_for_closure = frame_clock.clone();
    let offset_for_closure = offset.clone();

    let registration = frame_clock.with_frame_nanos(move |frame_time_nanos| {
        let should_continue = {
            let state_guard = state_for_closure.borrow();
            let Some(settle) = state_guard.as_ref() else {
                return;
            };
            if !settle.is_running.get() {
                return;
            }

            let start_time = match settle.start_frame_time_nanos.get() {
                Some(value) => value,
                None => {
                    settle.start_frame_time_nanos.set(Some(frame_time_nanos));
                    frame_time_nanos
                }
            };

            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let duration_nanos = SNAP_BACK_MS * 1_000_000;
            let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);
            let eased = Easing::EaseOut.transform(linear_progress);

            offset_for_closure.set(settle.from_offset * (1.0 - eased));

            let is_finished = elapsed_nanos >= duration_nanos;
            if is_finished {
                settle.is_running.set(false);
                offset_for_closure.set(0.0);
            }
            !is_finished
        };

        if should_continue {
            schedule_next_frame(
                Rc::clone(&state_for_closure),
                frame_clock_for_closure.clone(),
                offset_for_closure.clone(),
            );
        } else {
            state_for_closure.borrow_mut().take();
        }
    });

    if let Some(settle) = state.borrow_mut().as_mut() {
        settle.registration = Some(registration);
    }
}

/// Animates the shared visual offset back to zero.
pub(crate) struct SettleAnimation {
    state: Rc<RefCell<Option<SettleState>>>,
    frame_clock: FrameClock,
    offset: MutableState<f32>,
}

impl SettleAnimation {
    pub(crate) fn new(frame_clock: FrameClock, offset: MutableState<f32>) -> Self {
        Self {
            state: Rc::new(RefCell::new(None)),
            frame_clock,
            offset,
        }
    }

    /// Starts easing the offset from its current value back to zero. A
    /// zero offset settles immediately without scheduling frames.
    pub(crate) fn start(&self) {
        self.cancel();

        let from_offset = self.offset.get();
        if from_offset == 0.0 {
            return;
        }

        *self.state.borrow_mut() = Some(SettleState {
            from_offset,
            start_frame_time_nanos: Cell::new(None),
            registration: None,
            is_running: Cell::new(true),
        });

        schedule_next_frame(
            Rc::clone(&self.state),
            self.frame_clock.clone(),
            self.offset.clone(),
        );
    }

    pub(crate) fn cancel(&self) {
        if let Some(settle) = self.state.borrow_mut().take() {
            settle.is_running.set(false);
            drop(settle.registration);
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.state
            .borrow()
            .as_ref()
            .is_some_and(|settle| settle.is_running.get())
    }
}

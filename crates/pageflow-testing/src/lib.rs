//! Test harness for driving the navigation engine on a virtual clock.
//!
//! [`TestRuntime`] advances a fake timestamp and drains the runtime's frame
//! callbacks at it; no test ever sleeps. [`GestureScript`] builds pointer
//! event sequences the way a host would deliver them.

use std::cell::Cell;
use std::sync::Arc;

use pageflow_core::{DefaultScheduler, Runtime, RuntimeHandle};
use pageflow_foundation::{Point, PointerEvent, PointerEventKind};
use pageflow_nav::Pager;

/// Runtime on a virtual clock.
pub struct TestRuntime {
    runtime: Runtime,
    now_nanos: Cell<u64>,
}

impl Default for TestRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRuntime {
    pub fn new() -> Self {
        Self {
            runtime: Runtime::new(Arc::new(DefaultScheduler)),
            now_nanos: Cell::new(0),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn now_millis(&self) -> u64 {
        self.now_nanos.get() / 1_000_000
    }

    /// Drains frame callbacks at the current virtual time without moving it.
    pub fn pump(&self) {
        self.runtime.handle().drain_frame_callbacks(self.now_nanos.get());
    }

    /// Advances the virtual clock by `millis` in one jump and drains.
    pub fn advance_millis(&self, millis: u64) {
        self.now_nanos
            .set(self.now_nanos.get() + millis * 1_000_000);
        self.pump();
    }

    /// Advances frame by frame (16ms each), draining at every step, the way
    /// a 60fps host would.
    pub fn advance_frames(&self, frames: u32) {
        for _ in 0..frames {
            self.advance_millis(16);
        }
    }
}

/// Builder for pointer event sequences.
#[derive(Default)]
pub struct GestureScript {
    events: Vec<PointerEvent>,
}

impl GestureScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn down(mut self, x: f32) -> Self {
        self.events
            .push(PointerEvent::new(PointerEventKind::Down, Point::new(x, 0.0)));
        self
    }

    pub fn move_to(mut self, x: f32) -> Self {
        self.events
            .push(PointerEvent::new(PointerEventKind::Move, Point::new(x, 0.0)));
        self
    }

    pub fn up(mut self, x: f32) -> Self {
        self.events
            .push(PointerEvent::new(PointerEventKind::Up, Point::new(x, 0.0)));
        self
    }

    pub fn cancel(mut self) -> Self {
        self.events.push(PointerEvent::new(
            PointerEventKind::Cancel,
            Point::ZERO,
        ));
        self
    }

    /// A complete drag from `from_x` to `to_x` with evenly spaced moves.
    pub fn swipe(from_x: f32, to_x: f32, steps: u32) -> Self {
        let mut script = Self::new().down(from_x);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            script = script.move_to(from_x + (to_x - from_x) * fraction);
        }
        script.up(to_x)
    }

    pub fn events(&self) -> &[PointerEvent] {
        &self.events
    }

    /// Feeds every event into the pager in order.
    pub fn drive(self, pager: &mut Pager) {
        for event in &self.events {
            pager.on_pointer_event(event);
        }
    }
}

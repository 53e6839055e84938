//! Core runtime for the pageflow navigation engine.
//!
//! Everything here is single-threaded and cooperative: work is either
//! synchronous or deferred through frame callbacks that the host drains with
//! an explicit timestamp. Tests drive the same drain with a virtual clock,
//! so no timing-sensitive code ever waits on a wall clock.

pub mod frame_clock;
pub mod platform;
pub mod runtime;
pub mod state;
pub mod timer;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};
pub use state::{MutableState, State, WatcherSubscription};
pub use timer::{TimerQueue, TimerRegistration};

/// Identifier for a registered frame callback.
pub type FrameCallbackId = u64;

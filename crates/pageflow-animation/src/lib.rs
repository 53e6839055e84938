//! Transition timing for the pageflow navigation engine.
//!
//! Provides the distance-scaled duration model and the easing curves the
//! presentation layer applies to committed transitions and snap-backs.

pub mod duration;
pub mod easing;
pub mod spec;

pub use duration::{
    transition_duration, BASE_DURATION_MS, MAX_DURATION_MS, MIN_DURATION_MS, PER_HOP_MS,
};
pub use easing::Easing;
pub use spec::TransitionSpec;

//! Route navigation driven by swipe gestures and link clicks.
//!
//! The [`Pager`] is the single entry point: pointer events, header-link
//! clicks, and logo clicks all funnel into the same resolver and the same
//! guarded [`TransitionOrchestrator::commit`], which is the only place that
//! mutates navigation state.

pub mod pager;
pub mod route_table;
pub mod settle;
pub mod transition;

pub use pager::Pager;
pub use route_table::RouteTable;
pub use settle::SNAP_BACK_MS;
pub use transition::{Navigator, TransitionOrchestrator};

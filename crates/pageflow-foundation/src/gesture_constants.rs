//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Every entry point (touch, mouse, link clicks) reads this one set of
//! values; there are no per-surface overrides.
//!
//! # DPI Considerations
//!
//! Pixel values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor. Current implementation uses
//! fixed values that work well for typical desktop/mobile displays.

/// Drag slop in logical pixels.
///
/// If the pointer moves more than this distance from the initial press
/// position, the drag is considered visually begun: hosts switch to a
/// grabbing cursor and move events start being consumed so child click
/// handlers don't also fire on release.
///
/// Value of 8.0 matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const DRAG_SLOP: f32 = 8.0;

/// Minimum drag distance to commit a navigation, as a fraction of viewport
/// width. A release at or under the threshold snaps back instead.
pub const COMMIT_THRESHOLD_FRACTION: f32 = 0.15;

/// Maximum live drag offset, as a fraction of viewport width. Raw deltas
/// beyond this are clamped for visual feedback away from the boundaries.
pub const MAX_DRAG_FRACTION: f32 = 0.3;

/// Damping multiplier applied to the delta when dragging past the first or
/// last route, producing the rubber-band feel where no neighbor exists.
pub const BOUNDARY_RESISTANCE: f32 = 0.3;

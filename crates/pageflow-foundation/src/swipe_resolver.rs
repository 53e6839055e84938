//! Release-time swipe resolution.

use crate::gesture_constants::COMMIT_THRESHOLD_FRACTION;

/// Semantic swipe direction.
///
/// Dragging the content rightward (positive delta) reveals the previous
/// route, which is the `Right` direction; dragging leftward navigates to the
/// next route, direction `Left`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Decides whether a committed delta crosses the navigation threshold.
///
/// Returns the semantic direction when `|committed_delta|` exceeds
/// [`COMMIT_THRESHOLD_FRACTION`] of the viewport width, `None` for a
/// no-op release.
pub fn resolve_swipe(committed_delta: f32, viewport_width: f32) -> Option<SwipeDirection> {
    let threshold = viewport_width * COMMIT_THRESHOLD_FRACTION;
    if committed_delta.abs() <= threshold {
        return None;
    }
    if committed_delta > 0.0 {
        Some(SwipeDirection::Right)
    } else {
        Some(SwipeDirection::Left)
    }
}

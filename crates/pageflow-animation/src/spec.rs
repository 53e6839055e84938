use crate::duration::transition_duration;
use crate::easing::Easing;

/// Timing parameters applied to the transition-bearing element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl TransitionSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Spec for a committed navigation spanning `distance` route hops.
    pub fn for_distance(distance: u32) -> Self {
        Self::tween(transition_duration(distance), Easing::FastOutSlowIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_distance_uses_the_duration_model() {
        let spec = TransitionSpec::for_distance(1);
        assert_eq!(spec.duration_millis, 250);
        assert_eq!(spec.easing, Easing::FastOutSlowIn);
    }
}

//! Category-level transition progress.

use crate::constants::{MAX_FRAME_DELTA, PROGRESS_EPSILON};
use crate::state::LogicalState;

/// Scalar in [0, 1] that exponentially approaches its target.
///
/// The step is proportional to the remaining distance, which gives the
/// transition a natural ease-out; the value snaps to the target once within
/// `PROGRESS_EPSILON`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressTracker {
    current: f32,
    target: f32,
    rate: f32,
}

impl ProgressTracker {
    pub fn new(rate: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            rate,
        }
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn retarget(&mut self, state: LogicalState) {
        self.target = state.target_progress();
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Advance by `delta` seconds toward the target of `state`.
    pub fn step(&mut self, state: LogicalState, delta: f32) -> f32 {
        self.retarget(state);
        let delta = delta.clamp(0.0, MAX_FRAME_DELTA);
        let diff = self.target - self.current;
        if diff.abs() > PROGRESS_EPSILON {
            // rate * delta < 1 keeps this from overshooting
            let factor = (delta * self.rate).min(1.0);
            self.current += diff * factor;
        } else {
            self.current = self.target;
        }
        self.current = self.current.clamp(0.0, 1.0);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_delta_never_overshoots() {
        let mut p = ProgressTracker::new(50.0);
        let v = p.step(LogicalState::Assembled, 5.0);
        assert!(v <= 1.0);
        assert!(v > 0.0);
    }

    #[test]
    fn settles_exactly_on_target() {
        let mut p = ProgressTracker::new(1.2);
        for _ in 0..2000 {
            p.step(LogicalState::Assembled, 1.0 / 30.0);
        }
        assert!(p.is_settled());
        assert_eq!(p.current(), 1.0);
    }

    #[test]
    fn zero_delta_holds_value() {
        let mut p = ProgressTracker::new(1.2);
        p.step(LogicalState::Assembled, 0.5);
        let before = p.current();
        p.step(LogicalState::Assembled, 0.0);
        assert_eq!(p.current(), before);
    }
}

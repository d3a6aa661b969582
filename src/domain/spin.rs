//! Spin animation state machine.
//!
//! The animator moves between [`SpinPhase::Idle`] and [`SpinPhase::Spinning`].
//! It never schedules itself: the owner calls [`SpinAnimator::tick`] once per
//! frame and progress is read from the injected clock, so dropped frames do
//! not slow the wheel down.

use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use super::ports::ClockPort;
use super::wheel::{
    BASE_SPIN, SPIN_DURATION, SPIN_JITTER, ease_out_cubic, normalize_angle, selected_index,
};

/// Current phase of the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinPhase {
    /// Wheel at rest.
    Idle,
    /// Wheel in motion.
    Spinning {
        /// Resting angle captured when the spin began.
        start_angle: f64,
        /// Total rotation applied over the spin.
        spin_angle: f64,
        /// Instant the spin began.
        started_at: Instant,
    },
}

/// Wheel rotation, phase and last result.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelState {
    angle: f64,
    phase: SpinPhase,
    result: Option<String>,
}

impl WheelState {
    /// Rotation angle in `[0, TAU)`.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub const fn phase(&self) -> SpinPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning { .. })
    }

    /// Label selected by the last completed spin.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }
}

impl Default for WheelState {
    fn default() -> Self {
        Self {
            angle: 0.0,
            phase: SpinPhase::Idle,
            result: None,
        }
    }
}

/// Outcome of a single animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinTick {
    /// Nothing to animate.
    Idle,
    /// Wheel moved to `angle`.
    Frame {
        /// Normalized rotation after this frame.
        angle: f64,
    },
    /// Spin completed at `angle`.
    Finished {
        /// Normalized final rotation.
        angle: f64,
        /// Slice under the pointer, if any options remain.
        index: Option<usize>,
    },
}

/// Drives a [`WheelState`] through spins.
pub struct SpinAnimator {
    clock: Arc<dyn ClockPort>,
    state: WheelState,
}

impl SpinAnimator {
    #[must_use]
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            clock,
            state: WheelState::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &WheelState {
        &self.state
    }

    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.state.angle
    }

    #[must_use]
    pub const fn is_spinning(&self) -> bool {
        self.state.is_spinning()
    }

    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.state.result()
    }

    /// Starts a spin with a random rotation.
    ///
    /// Ignored while spinning or when there are no options. Returns whether a
    /// spin started.
    pub fn request_spin(&mut self, option_count: usize) -> bool {
        self.request_spin_with_rng(option_count, &mut rand::thread_rng())
    }

    /// Starts a spin with rotation sampled from `rng`.
    pub fn request_spin_with_rng<R: Rng>(
        &mut self,
        option_count: usize,
        rng: &mut R,
    ) -> bool {
        if !self.can_spin(option_count) {
            return false;
        }
        let spin_angle = rng.gen_range(0.0..1.0) * SPIN_JITTER + BASE_SPIN;
        self.start_spin(option_count, spin_angle)
    }

    /// Starts a spin that rotates the wheel by exactly `spin_angle`.
    pub fn start_spin(&mut self, option_count: usize, spin_angle: f64) -> bool {
        if !self.can_spin(option_count) {
            debug!(
                option_count,
                spinning = self.is_spinning(),
                "Ignoring spin request"
            );
            return false;
        }

        let start_angle = self.state.angle;
        self.state.result = None;
        self.state.phase = SpinPhase::Spinning {
            start_angle,
            spin_angle,
            started_at: self.clock.now(),
        };

        info!(option_count, start_angle, spin_angle, "Spin started");
        true
    }

    /// Advances the animation to the clock's current time.
    ///
    /// `options` must be the list the wheel is drawn from; on completion the
    /// result is taken from it.
    pub fn tick(&mut self, options: &[String]) -> SpinTick {
        let SpinPhase::Spinning {
            start_angle,
            spin_angle,
            started_at,
        } = self.state.phase
        else {
            return SpinTick::Idle;
        };

        let elapsed = self.clock.now().saturating_duration_since(started_at);
        let progress = (elapsed.as_secs_f64() / SPIN_DURATION.as_secs_f64()).min(1.0);
        let current = start_angle + spin_angle * ease_out_cubic(progress);
        self.state.angle = normalize_angle(current);

        if progress < 1.0 {
            return SpinTick::Frame {
                angle: self.state.angle,
            };
        }

        self.state.phase = SpinPhase::Idle;
        let index = selected_index(self.state.angle, options.len());
        self.state.result = index.and_then(|i| options.get(i)).cloned();

        info!(
            angle = self.state.angle,
            index = ?index,
            result = ?self.state.result,
            "Spin finished"
        );

        SpinTick::Finished {
            angle: self.state.angle,
            index,
        }
    }

    fn can_spin(&self, option_count: usize) -> bool {
        option_count > 0 && !self.is_spinning()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::ManualClock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::{PI, TAU};
    use std::time::Duration;

    const EPS: f64 = 1e-9;

    fn animator() -> (Arc<ManualClock>, SpinAnimator) {
        let clock = Arc::new(ManualClock::new());
        let animator = SpinAnimator::new(clock.clone());
        (clock, animator)
    }

    fn options(labels: &[&str]) -> Vec<String> {
        labels.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_initial_state() {
        let (_, animator) = animator();
        assert!(!animator.is_spinning());
        assert!(animator.angle().abs() < EPS);
        assert_eq!(animator.result(), None);
        assert_eq!(animator.state().phase(), SpinPhase::Idle);
    }

    #[test]
    fn test_spin_without_options_is_ignored() {
        let (clock, mut animator) = animator();
        assert!(!animator.request_spin(0));
        assert!(!animator.is_spinning());

        clock.advance(SPIN_DURATION);
        assert_eq!(animator.tick(&[]), SpinTick::Idle);
        assert_eq!(animator.result(), None);
    }

    #[test]
    fn test_spin_while_spinning_is_ignored() {
        let (clock, mut animator) = animator();
        assert!(animator.start_spin(2, BASE_SPIN));
        let phase = animator.state().phase();

        clock.advance(Duration::from_millis(1000));
        animator.tick(&options(&["A", "B"]));

        assert!(!animator.start_spin(2, BASE_SPIN + 1.0));
        assert!(!animator.request_spin(2));
        assert_eq!(animator.state().phase(), phase);
    }

    #[test]
    fn test_sampled_spin_angle_in_range() {
        let (_, mut animator) = animator();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(animator.request_spin_with_rng(3, &mut rng));

        let SpinPhase::Spinning { spin_angle, .. } = animator.state().phase() else {
            panic!("expected spinning phase");
        };
        assert!(spin_angle >= 10.0 * PI);
        assert!(spin_angle < 12.0 * PI);
    }

    #[test]
    fn test_frames_follow_ease_out() {
        let (clock, mut animator) = animator();
        let opts = options(&["A", "B"]);
        animator.start_spin(2, 10.5 * PI);

        clock.advance(SPIN_DURATION / 2);
        let SpinTick::Frame { angle } = animator.tick(&opts) else {
            panic!("expected frame");
        };
        let expected = normalize_angle(10.5 * PI * ease_out_cubic(0.5));
        assert!((angle - expected).abs() < 1e-6);
        assert!(animator.is_spinning());
        assert!(angle >= 0.0 && angle < TAU);
    }

    #[test]
    fn test_spin_clears_previous_result() {
        let (clock, mut animator) = animator();
        let opts = options(&["A", "B"]);
        animator.start_spin(2, 10.5 * PI);
        clock.advance(SPIN_DURATION);
        animator.tick(&opts);
        assert!(animator.result().is_some());

        animator.start_spin(2, 10.5 * PI);
        assert_eq!(animator.result(), None);
    }

    #[test]
    fn test_finishes_on_second_option() {
        let (clock, mut animator) = animator();
        let opts = options(&["A", "B"]);
        animator.start_spin(2, 10.5 * PI);

        clock.advance(SPIN_DURATION);
        let tick = animator.tick(&opts);

        let SpinTick::Finished { angle, index } = tick else {
            panic!("expected finish, got {tick:?}");
        };
        assert!((angle - 0.5 * PI).abs() < 1e-6);
        assert_eq!(index, Some(1));
        assert_eq!(animator.result(), Some("B"));
        assert!(!animator.is_spinning());
    }

    #[test]
    fn test_finishes_on_first_option() {
        let (clock, mut animator) = animator();
        let opts = options(&["A", "B"]);
        animator.start_spin(2, 11.5 * PI);

        clock.advance(SPIN_DURATION + Duration::from_millis(250));
        animator.tick(&opts);

        assert_eq!(animator.result(), Some("A"));
        assert_eq!(animator.tick(&opts), SpinTick::Idle);
    }

    #[test]
    fn test_next_spin_starts_from_resting_angle() {
        let (clock, mut animator) = animator();
        let opts = options(&["A", "B", "C"]);
        animator.start_spin(3, 10.5 * PI);
        clock.advance(SPIN_DURATION);
        animator.tick(&opts);
        let rest = animator.angle();

        animator.start_spin(3, 10.0 * PI);
        let SpinPhase::Spinning { start_angle, .. } = animator.state().phase() else {
            panic!("expected spinning phase");
        };
        assert!((start_angle - rest).abs() < EPS);
    }

    #[test]
    fn test_finish_with_no_options_left_has_no_result() {
        let (clock, mut animator) = animator();
        animator.start_spin(1, 10.5 * PI);
        clock.advance(SPIN_DURATION);

        let tick = animator.tick(&[]);
        assert!(matches!(tick, SpinTick::Finished { index: None, .. }));
        assert_eq!(animator.result(), None);
    }
}

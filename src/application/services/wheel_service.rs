//! Wheel session service.
//!
//! Owns the option list and the spin animator and exposes the three inputs
//! the view layer forwards: add, remove and spin.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::ClockPort;
use crate::domain::{OptionStore, SpinAnimator, SpinTick, WheelState};

/// Options plus wheel state for one session.
pub struct WheelService {
    options: OptionStore,
    animator: SpinAnimator,
}

impl WheelService {
    /// Creates an empty wheel.
    #[must_use]
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            options: OptionStore::new(),
            animator: SpinAnimator::new(clock),
        }
    }

    #[must_use]
    pub const fn options(&self) -> &OptionStore {
        &self.options
    }

    #[must_use]
    pub const fn wheel(&self) -> &WheelState {
        self.animator.state()
    }

    #[must_use]
    pub const fn is_spinning(&self) -> bool {
        self.animator.is_spinning()
    }

    #[must_use]
    pub fn can_spin(&self) -> bool {
        !self.options.is_empty() && !self.animator.is_spinning()
    }

    /// Adds an option. Ignored while spinning.
    pub fn add_option(&mut self, label: &str) -> bool {
        if self.animator.is_spinning() {
            debug!("Ignoring add while spinning");
            return false;
        }
        self.options.add(label)
    }

    /// Removes an option. Ignored while spinning.
    pub fn remove_option(&mut self, index: usize) -> Option<String> {
        if self.animator.is_spinning() {
            debug!(index, "Ignoring removal while spinning");
            return None;
        }
        self.options.remove(index)
    }

    /// Requests a random spin.
    pub fn spin(&mut self) -> bool {
        self.animator.request_spin(self.options.len())
    }

    /// Requests a spin of exactly `spin_angle` radians.
    pub fn spin_by(&mut self, spin_angle: f64) -> bool {
        self.animator.start_spin(self.options.len(), spin_angle)
    }

    /// Advances the animation; call once per frame.
    pub fn tick(&mut self) -> SpinTick {
        self.animator.tick(self.options.as_slice())
    }
}

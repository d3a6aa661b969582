//! Frame scheduling for the spin animation.

use std::future::{Future, pending};
use std::time::Duration;

use futures_util::future::Either;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval};
use tracing::debug;

/// Interval timer that only fires while armed.
///
/// Disarmed, [`FrameTicker::next_frame`] never resolves, so it can sit in a
/// `select!` alongside other event sources at no cost.
pub struct FrameTicker {
    period: Duration,
    interval: Option<Interval>,
}

impl FrameTicker {
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Starts firing. No-op if already armed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm(&mut self) {
        if self.interval.is_some() {
            return;
        }
        let mut ticks = interval(self.period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.interval = Some(ticks);
        debug!(period_ms = self.period.as_millis(), "Frame ticker armed");
    }

    /// Stops firing.
    pub fn disarm(&mut self) {
        if self.interval.take().is_some() {
            debug!("Frame ticker disarmed");
        }
    }

    /// Resolves on the next frame while armed.
    pub fn next_frame(&mut self) -> impl Future<Output = Instant> + '_ {
        match &mut self.interval {
            Some(ticks) => Either::Left(ticks.tick()),
            None => Either::Right(pending()),
        }
    }
}

//! Clock port definition.

use std::time::Instant;

/// Port for a monotonic time source.
pub trait ClockPort: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

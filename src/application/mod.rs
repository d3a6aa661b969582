//! Application layer with the wheel session and frame scheduling.

/// Application services.
pub mod services;

pub use services::{FrameTicker, WheelService};

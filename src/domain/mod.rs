//! Domain layer with the wheel model and port definitions.

/// Keybinding definitions.
pub mod keybinding;
/// Option storage.
pub mod option_store;
/// Port definitions.
pub mod ports;
/// Spin state machine.
pub mod spin;
/// Wheel geometry.
pub mod wheel;

pub use option_store::OptionStore;
pub use ports::ClockPort;
pub use spin::{SpinAnimator, SpinPhase, SpinTick, WheelState};

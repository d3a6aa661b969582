//! UI screens.

mod app;
mod wheel_screen;

pub use app::App;
pub use wheel_screen::{WheelKeyResult, WheelScreen, WheelScreenState};

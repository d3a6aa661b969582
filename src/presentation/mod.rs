//! Presentation layer with UI components and the event loop.

/// Colors and styles.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;

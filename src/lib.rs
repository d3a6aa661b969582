//! Wheelspin - A spinning wheel randomizer for the terminal.
//!
//! Options are entered as text, drawn as equal colored slices of a wheel, and
//! one of them is picked by an eased spin animation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the wheel session and frame scheduling.
pub mod application;
/// Domain layer containing the wheel model and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and system adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and the event loop.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "wheelspin";

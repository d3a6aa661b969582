//! Color theme.

pub mod adapter;
mod service;

pub use adapter::ColorConverter;
pub use service::Theme;

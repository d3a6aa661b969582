pub mod frame_ticker;
pub mod wheel_service;

pub use frame_ticker::FrameTicker;
pub use wheel_service::WheelService;

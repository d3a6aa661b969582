mod clock_port;

pub use clock_port::ClockPort;

//! Driver modules for the MC33926 carrier.
//!
//! - `bridge`: per-motor channel control and the dual-channel carrier wrapper
//! - `math`: pure duty-cycle arithmetic (command clamping and rescaling)

pub mod bridge;
pub mod math;

pub use bridge::carrier::DualCarrier;
pub use bridge::channel::{BridgeError, Drive, MotorChannel};

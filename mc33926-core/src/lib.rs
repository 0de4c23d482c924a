//! Driver for the MC33926-class dual H-bridge motor controller on no-std embedded platforms.
//!
//! One [`driver::MotorChannel`] wraps the two PWM inputs of a half of the chip;
//! [`driver::DualCarrier`] pairs two channels the way the dual carrier board wires them.
//!
//! All operations are synchronous and complete in a handful of pin writes. Nothing
//! here is safe for concurrent use from multiple contexts; callers that share a
//! channel across threads or interrupt handlers must serialize access themselves.
#![no_std]

pub mod driver;

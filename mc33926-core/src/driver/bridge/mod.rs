//! H-bridge control for the MC33926.
//!
//! `channel` drives one motor over the chip's IN1/IN2 pair; `carrier` groups
//! the two channels of a dual carrier board.

pub mod carrier;
pub mod channel;

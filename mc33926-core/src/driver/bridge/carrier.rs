//! Dual-channel carrier wrapper.
//!
//! The MC33926 carrier board exposes two independent half-bridge pairs;
//! [`DualCarrier`] owns one [`MotorChannel`] per pair and offers the usual
//! both-motors conveniences. Per-channel state (counts, drive) is reached
//! through the public `m1`/`m2` fields.

use embedded_hal::pwm::SetDutyCycle;

use crate::driver::bridge::channel::{BridgeError, MotorChannel};

/// Both channels of the carrier board.
pub struct DualCarrier<F1, R1, F2, R2> {
    pub m1: MotorChannel<F1, R1>,
    pub m2: MotorChannel<F2, R2>,
}

impl<F1, R1, F2, R2, E> DualCarrier<F1, R1, F2, R2>
where
    F1: SetDutyCycle<Error = E>,
    R1: SetDutyCycle<Error = E>,
    F2: SetDutyCycle<Error = E>,
    R2: SetDutyCycle<Error = E>,
    E: core::fmt::Debug,
{
    /// Construct both channels; both motors end up stopped.
    pub fn new(
        m1_forward: F1,
        m1_reverse: R1,
        m2_forward: F2,
        m2_reverse: R2,
    ) -> Result<Self, BridgeError<E>> {
        Ok(DualCarrier {
            m1: MotorChannel::new(m1_forward, m1_reverse)?,
            m2: MotorChannel::new(m2_forward, m2_reverse)?,
        })
    }

    /// Apply signed speed commands to both channels.
    pub fn set_speeds(
        &mut self,
        m1: i16,
        m2: i16,
    ) -> Result<(), BridgeError<E>> {
        self.m1.set(m1)?;
        self.m2.set(m2)
    }

    /// Stop both motors.
    pub fn stop(&mut self) -> Result<(), BridgeError<E>> {
        self.set_speeds(0, 0)
    }
}

//! Single-motor channel control for the MC33926.
//!
//! A [`MotorChannel`] owns the two PWM-capable input pins of one half-bridge
//! pair and maps a signed command value onto direction and duty cycle. It also
//! carries a signed pulse accumulator for callers that feed it encoder or
//! current-sense pulses.

use embedded_hal::pwm::SetDutyCycle;

use crate::driver::math::duty;

/// Errors that can occur when writing to the half-bridge input pins.
///
/// The variant names the faulting input so a caller can tell which side of the
/// bridge rejected the write.
#[derive(Debug)]
pub enum BridgeError<E: core::fmt::Debug> {
    Forward(E),
    Reverse(E),
}

/// Explicit drive state of one channel.
///
/// Magnitudes are on the 0-255 command scale, not the pin's native duty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Drive {
    /// Both pins low; coast vs. brake is the hardware's business.
    Stop,
    Forward(u8),
    Reverse(u8),
}

impl Drive {
    /// Map a signed command value to a drive state.
    ///
    /// The value is saturated to [-255, 255] first; out-of-range commands are
    /// never rejected, only clamped. This is the one place the sign and clamp
    /// policy lives.
    pub fn from_signed(value: i16) -> Self {
        let clamped = duty::clamp_command(value);
        match clamped {
            0 => Drive::Stop,
            v if v > 0 => Drive::Forward(v as u8),
            v => Drive::Reverse(v.unsigned_abs() as u8),
        }
    }

    /// Command-scale magnitude of the state (0 for `Stop`).
    pub fn magnitude(&self) -> u8 {
        match self {
            Drive::Stop => 0,
            Drive::Forward(m) | Drive::Reverse(m) => *m,
        }
    }
}

/// One motor's control channel over two PWM pins.
///
/// Pin assignment is fixed for the value's lifetime; both pins are moved in at
/// construction and driven fully off before the constructor returns. At most
/// one pin carries a nonzero duty at any time, including during a direction
/// change, so the bridge never sees both inputs active.
pub struct MotorChannel<F, R> {
    forward: F,
    reverse: R,
    forward_max: u16,
    reverse_max: u16,
    drive: Drive,
    count: i32,
}

impl<F, R, E> MotorChannel<F, R>
where
    F: SetDutyCycle<Error = E>,
    R: SetDutyCycle<Error = E>,
    E: core::fmt::Debug,
{
    /// Take ownership of the two input pins and stop the motor.
    ///
    /// Captures each pin's native maximum duty once, then drives both pins
    /// fully off, so the channel is in the stopped state regardless of what
    /// the pins carried before.
    pub fn new(
        mut forward: F,
        mut reverse: R,
    ) -> Result<Self, BridgeError<E>> {
        let forward_max = forward.max_duty_cycle();
        let reverse_max = reverse.max_duty_cycle();

        forward
            .set_duty_cycle_fully_off()
            .map_err(BridgeError::Forward)?;
        reverse
            .set_duty_cycle_fully_off()
            .map_err(BridgeError::Reverse)?;

        Ok(MotorChannel {
            forward,
            reverse,
            forward_max,
            reverse_max,
            drive: Drive::Stop,
            count: 0,
        })
    }

    /// Apply a signed speed command.
    ///
    /// The value is clamped to [-255, 255]: positive drives the forward pin,
    /// negative the reverse pin, zero stops both. The outgoing pin is released
    /// before the incoming pin is raised, so a direction change never has both
    /// inputs active at once. The magnitude is rescaled from the 0-255 command
    /// scale onto the pin's native duty range; the new duty takes effect on
    /// the next PWM cycle.
    pub fn set(
        &mut self,
        value: i16,
    ) -> Result<(), BridgeError<E>> {
        let drive = Drive::from_signed(value);
        match drive {
            Drive::Stop => {
                self.forward
                    .set_duty_cycle_fully_off()
                    .map_err(BridgeError::Forward)?;
                self.reverse
                    .set_duty_cycle_fully_off()
                    .map_err(BridgeError::Reverse)?;
            }
            Drive::Forward(mag) => {
                self.reverse
                    .set_duty_cycle_fully_off()
                    .map_err(BridgeError::Reverse)?;
                self.forward
                    .set_duty_cycle(duty::rescale(mag, self.forward_max))
                    .map_err(BridgeError::Forward)?;
            }
            Drive::Reverse(mag) => {
                self.forward
                    .set_duty_cycle_fully_off()
                    .map_err(BridgeError::Forward)?;
                self.reverse
                    .set_duty_cycle(duty::rescale(mag, self.reverse_max))
                    .map_err(BridgeError::Reverse)?;
            }
        }
        tracing::debug!("drive applied: {:?}", drive);
        self.drive = drive;
        Ok(())
    }

    /// Add a signed amount to the pulse accumulator.
    ///
    /// The counter is an `i32` and wraps on overflow.
    pub fn add_to_count(
        &mut self,
        amount: i32,
    ) {
        self.count = self.count.wrapping_add(amount);
    }

    /// Current pulse count. Pure read.
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Last applied drive state (`Stop` until the first `set`).
    pub fn drive(&self) -> Drive {
        self.drive
    }
}

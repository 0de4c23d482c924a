//! Pure command math: clamping and duty rescaling.
//!
//! Speed commands use the Arduino-era 0-255 scale. The pins underneath may
//! carry any native duty resolution, so magnitudes are rescaled
//! proportionally onto `[0, max_duty]` before they hit the hardware.

/// Lowest accepted speed command.
pub const COMMAND_MIN: i16 = -255;
/// Highest accepted speed command.
pub const COMMAND_MAX: i16 = 255;

/// Saturate a signed command to [-255, 255].
pub fn clamp_command(value: i16) -> i16 {
    value.clamp(COMMAND_MIN, COMMAND_MAX)
}

/// Map a 0-255 magnitude onto a pin's native `[0, max_duty]` range.
///
/// Rounds to nearest; 255 always maps to `max_duty`, and the mapping is the
/// identity when `max_duty` is 255.
pub fn rescale(
    magnitude: u8,
    max_duty: u16,
) -> u16 {
    ((magnitude as u32 * max_duty as u32 + 127) / 255) as u16
}

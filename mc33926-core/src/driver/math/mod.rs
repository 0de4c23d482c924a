//! Duty-cycle arithmetic for the MC33926 driver.

pub mod duty;

//! Accelerometer-only tilt estimation
//!
//! Pitch and roll are derived from the direction of the measured gravity
//! vector:
//!
//! ```text
//! pitch = atan(x / sqrt(y² + z²))
//! roll  = atan(y / sqrt(x² + z²))
//! ```
//!
//! This is a geometric estimate, not an attitude filter. It assumes the only
//! acceleration acting on the sensor is gravity, so any linear acceleration or
//! vibration shows up directly as tilt error. There is no gyroscope fusion and
//! no yaw. Use it for quasi-static orientation only.

use core::f32::consts::PI;

use crate::sensors::AccelDataG;

/// Pitch and roll in whole degrees, truncated toward zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PitchRoll {
    /// Rotation about the Y axis (X axis tilting up is positive)
    pub pitch: i16,
    /// Rotation about the X axis (Y axis tilting up is positive)
    pub roll: i16,
}

impl PitchRoll {
    /// Estimate tilt from an accelerometer sample
    ///
    /// Returns `None` when either angle is undefined, which happens when the
    /// two axes forming a denominator are both zero (e.g. pitch for a sample
    /// pointing purely along X).
    #[must_use]
    pub fn from_accel(accel: &AccelDataG) -> Option<Self> {
        let pitch = tilt_degrees(accel.x, accel.y, accel.z)?;
        let roll = tilt_degrees(accel.y, accel.x, accel.z)?;
        Some(Self { pitch, roll })
    }
}

/// Angle between `axis` and the plane spanned by the other two axes
// atan is bounded to ±90°, so the truncating cast cannot overflow
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn tilt_degrees(axis: f32, other_a: f32, other_b: f32) -> Option<i16> {
    let denominator = libm::sqrtf(other_a * other_a + other_b * other_b);
    if denominator == 0.0 {
        return None;
    }

    let degrees = libm::atanf(axis / denominator) * (180.0 / PI);
    Some(degrees as i16)
}

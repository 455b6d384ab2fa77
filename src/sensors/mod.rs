//! Sensor data types for the MPU-6050
//!
//! - Accelerometer: full-scale range, raw and physical samples, two's
//!   complement decoding
//! - Orientation: accelerometer-only pitch/roll estimate
//!
//! All bus operations are performed through methods on `Mpu6050Driver`.

pub mod accelerometer;
pub mod orientation;

// Re-export main types
pub use accelerometer::{
    AccelData, AccelDataG, AccelFullScale, SCALE_TABLE, decode_twos_complement,
    encode_twos_complement,
};
pub use orientation::PitchRoll;

//! Accelerometer sensor types and configuration
//!
//! Provides the full-scale range selection, raw sample decoding and
//! conversion to physical units for the MPU-6050's 3-axis accelerometer.

use crate::InvalidMode;

/// Sensitivity in LSB/g for each full-scale range, indexed by `AFS_SEL`
///
/// Index 0 = ±2g, 1 = ±4g, 2 = ±8g, 3 = ±16g (datasheet section 4.17).
pub const SCALE_TABLE: [f32; 4] = [16384.0, 8192.0, 4096.0, 2048.0];

/// Accelerometer full-scale range (`AFS_SEL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFullScale {
    /// ±2g range (most sensitive, least range; power-on default)
    #[default]
    G2 = 0,
    /// ±4g range
    G4 = 1,
    /// ±8g range
    G8 = 2,
    /// ±16g range (least sensitive, most range)
    G16 = 3,
}

impl AccelFullScale {
    /// Get the sensitivity in LSB/g (Least Significant Bit per g)
    ///
    /// This is used to convert raw sensor values to physical units.
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        SCALE_TABLE[self as usize]
    }

    /// Get the maximum value in g
    #[must_use]
    pub const fn max_g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }
}

impl TryFrom<u8> for AccelFullScale {
    type Error = InvalidMode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::G2),
            1 => Ok(Self::G4),
            2 => Ok(Self::G8),
            3 => Ok(Self::G16),
            _ => Err(InvalidMode(value)),
        }
    }
}

/// Decode a 16-bit two's complement pattern
///
/// Values with the sign bit (bit 15) set have 2^16 subtracted.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn decode_twos_complement(value: u16) -> i16 {
    let value = value as i32;
    if value & 0x8000 != 0 {
        (value - 0x1_0000) as i16
    } else {
        value as i16
    }
}

/// Encode a signed value as its 16-bit two's complement pattern
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn encode_twos_complement(value: i16) -> u16 {
    value as u16
}

/// Accelerometer data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (raw)
    pub x: i16,
    /// Y-axis acceleration (raw)
    pub y: i16,
    /// Z-axis acceleration (raw)
    pub z: i16,
}

impl AccelData {
    /// Decode the six output bytes starting at `ACCEL_XOUT_H`
    ///
    /// Each axis is a big-endian pair: high byte first, then low byte.
    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; 6]) -> Self {
        Self {
            x: decode_twos_complement(((bytes[0] as u16) << 8) | bytes[1] as u16),
            y: decode_twos_complement(((bytes[2] as u16) << 8) | bytes[3] as u16),
            z: decode_twos_complement(((bytes[4] as u16) << 8) | bytes[5] as u16),
        }
    }
}

/// Accelerometer data in physical units (g-force)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelDataG {
    /// X-axis acceleration in g
    pub x: f32,
    /// Y-axis acceleration in g
    pub y: f32,
    /// Z-axis acceleration in g
    pub z: f32,
}

impl AccelDataG {
    /// Create from a raw sample
    ///
    /// # Arguments
    ///
    /// * `raw` - Raw sample as read from the output registers
    /// * `sensitivity` - Sensitivity in LSB/g (from `AccelFullScale::sensitivity()`)
    #[must_use]
    pub fn from_raw(raw: AccelData, sensitivity: f32) -> Self {
        Self {
            x: f32::from(raw.x) / sensitivity,
            y: f32::from(raw.y) / sensitivity,
            z: f32::from(raw.z) / sensitivity,
        }
    }

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

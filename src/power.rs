//! Power management and low-power modes
//!
//! The MPU-6050 power state lives in two registers:
//! - **`PWR_MGMT_1`**: device reset, sleep, cycle, temperature sensor disable
//!   and clock source
//! - **`PWR_MGMT_2`**: low-power wake-up frequency and per-axis standby
//!
//! # Accelerometer-only low-power mode
//!
//! With `CYCLE = 1` and `SLEEP = 0` the device alternates between sleep and
//! waking to take a single accelerometer sample at the rate set by
//! `LP_WAKE_CTRL`. Gyroscopes and the temperature sensor should be put in
//! standby first, otherwise they keep drawing current.
//!
//! # Example
//!
//! ```ignore
//! # use mpu6050::{Mpu6050Driver, WakeFrequency};
//! # let mut imu: Mpu6050Driver<_> = todo!();
//! imu.enable_low_power_accel_only(WakeFrequency::Hz5)?;
//! // ... sample at leisure ...
//! imu.disable_low_power_accel_only()?;
//! # Ok::<(), mpu6050::Error<()>>(())
//! ```

use crate::InvalidMode;

/// Clock source selection (`CLKSEL`)
///
/// The datasheet recommends one of the gyroscope PLL references over the
/// internal oscillator for stability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// Internal 8 MHz oscillator (power-on default)
    #[default]
    Internal8MHz = 0,
    /// PLL with X axis gyroscope reference
    PllGyroX = 1,
    /// PLL with Y axis gyroscope reference
    PllGyroY = 2,
    /// PLL with Z axis gyroscope reference
    PllGyroZ = 3,
    /// PLL with external 32.768 kHz reference
    PllExternal32kHz = 4,
    /// PLL with external 19.2 MHz reference
    PllExternal19MHz = 5,
    /// Reserved
    Reserved = 6,
    /// Stops the clock and keeps the timing generator in reset
    Stop = 7,
}

impl ClockSource {
    /// Decode a 3-bit `CLKSEL` value; upper bits are ignored
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Self::Internal8MHz,
            1 => Self::PllGyroX,
            2 => Self::PllGyroY,
            3 => Self::PllGyroZ,
            4 => Self::PllExternal32kHz,
            5 => Self::PllExternal19MHz,
            6 => Self::Reserved,
            _ => Self::Stop,
        }
    }
}

impl TryFrom<u8> for ClockSource {
    type Error = InvalidMode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 7 {
            return Err(InvalidMode(value));
        }
        Ok(Self::from_bits(value))
    }
}

/// Wake-up frequency in accelerometer-only low-power mode (`LP_WAKE_CTRL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeFrequency {
    /// 1.25 Hz (800 ms period) - lowest power
    Hz1_25 = 0,
    /// 5 Hz (200 ms period)
    Hz5 = 1,
    /// 20 Hz (50 ms period)
    Hz20 = 2,
    /// 40 Hz (25 ms period)
    #[default]
    Hz40 = 3,
}

impl WakeFrequency {
    /// Get the wake-up rate in Hz
    #[must_use]
    pub const fn rate_hz(self) -> f32 {
        match self {
            Self::Hz1_25 => 1.25,
            Self::Hz5 => 5.0,
            Self::Hz20 => 20.0,
            Self::Hz40 => 40.0,
        }
    }

    /// Get the wake-up period in milliseconds
    #[must_use]
    pub const fn period_ms(self) -> f32 {
        1000.0 / self.rate_hz()
    }

    /// Decode a 2-bit `LP_WAKE_CTRL` value; upper bits are ignored
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::Hz1_25,
            1 => Self::Hz5,
            2 => Self::Hz20,
            _ => Self::Hz40,
        }
    }
}

impl TryFrom<u8> for WakeFrequency {
    type Error = InvalidMode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 3 {
            return Err(InvalidMode(value));
        }
        Ok(Self::from_bits(value))
    }
}

/// Gyroscope axes placed in standby (`STBY_XG`, `STBY_YG`, `STBY_ZG`)
///
/// Encoded as a 3-bit mask: X = bit 2, Y = bit 1, Z = bit 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroStandby {
    /// X axis in standby
    pub x: bool,
    /// Y axis in standby
    pub y: bool,
    /// Z axis in standby
    pub z: bool,
}

impl GyroStandby {
    /// All gyroscope axes active
    pub const NONE: Self = Self::from_axes(false, false, false);

    /// All gyroscope axes in standby
    pub const ALL: Self = Self::from_axes(true, true, true);

    /// Build from per-axis flags
    #[must_use]
    pub const fn from_axes(x: bool, y: bool, z: bool) -> Self {
        Self { x, y, z }
    }

    /// Decode a 3-bit mask; upper bits are ignored
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            x: bits & 0b100 != 0,
            y: bits & 0b010 != 0,
            z: bits & 0b001 != 0,
        }
    }

    /// Encode as the 3-bit register mask
    #[must_use]
    pub const fn bits(self) -> u8 {
        ((self.x as u8) << 2) | ((self.y as u8) << 1) | (self.z as u8)
    }
}

impl TryFrom<u8> for GyroStandby {
    type Error = InvalidMode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 0b111 {
            return Err(InvalidMode(value));
        }
        Ok(Self::from_bits(value))
    }
}

/// Power management status, decoded from `PWR_MGMT_1` and `PWR_MGMT_2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct PowerStatus {
    /// Sleep enabled
    pub sleep: bool,
    /// Cycle mode enabled
    pub cycle: bool,
    /// Temperature sensor disabled
    pub temp_disabled: bool,
    /// Active clock source
    pub clock_source: ClockSource,
    /// Gyroscope axes in standby
    pub gyro_standby: GyroStandby,
    /// Low-power wake-up frequency
    pub wake_frequency: WakeFrequency,
}

impl PowerStatus {
    /// Whether the device is in accelerometer-only low-power mode
    ///
    /// True when cycling is on, sleep is off and every gyro axis is in standby.
    #[must_use]
    pub fn is_low_power_accel_only(&self) -> bool {
        self.cycle && !self.sleep && self.gyro_standby == GyroStandby::ALL
    }
}

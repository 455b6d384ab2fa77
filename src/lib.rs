#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

#[macro_use]
mod fmt;

pub mod config;
pub mod device;
pub mod interface;
pub mod power;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use config::{DlpfMode, ExternalSync};
pub use device::{Mpu6050Driver, RESET_SETTLE_MS};
pub use interface::I2cInterface;
pub use power::{ClockSource, GyroStandby, PowerStatus, WakeFrequency};
pub use registers::{Field, Register};
pub use sensors::{
    AccelData, AccelDataG, AccelFullScale, PitchRoll, SCALE_TABLE, decode_twos_complement,
    encode_twos_complement,
};

/// MPU-6050 I2C address when AD0 pin is low (default: 0x68)
///
/// Use [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS_AD0_LOW: u8 = 0x68;

/// MPU-6050 I2C address when AD0 pin is high (alternative: 0x69)
///
/// Use [`I2cInterface::alternative()`] for this configuration.
pub const I2C_ADDRESS_AD0_HIGH: u8 = 0x69;

/// Recommended I2C bus clock (fast mode, 400 kHz)
///
/// The bus clock is owned by the HAL peripheral handed to [`I2cInterface`];
/// configure it to this rate when constructing the bus.
pub const I2C_CLOCK_HZ: u32 = 400_000;

/// Expected value of the `WHO_AM_I` register on a genuine MPU-6050
pub const WHO_AM_I_VALUE: u8 = 0x68;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device (NACK, bus fault, timeout)
    Bus(E),
    /// A field value outside its documented domain, or an unsupported
    /// device address. Detected before any bus transaction.
    InvalidArgument,
    /// Pitch/roll is undefined for the sample (zero denominator)
    Domain,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}

/// A raw mode value outside the domain of the mode type it was converted to
///
/// Returned by the `TryFrom<u8>` conversions on the configuration enums.
///
/// This is the host-side counterpart of [`Error::InvalidArgument`]: a raw
/// value is rejected here before it can reach a setter, and
/// [`Mpu6050Driver::write_field`] rejects the same out-of-domain values with
/// `Error::InvalidArgument`. Use [`InvalidMode::into_error`] to report both
/// through one error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidMode(pub u8);

impl InvalidMode {
    /// Convert into the driver error type as [`Error::InvalidArgument`]
    ///
    /// ```ignore
    /// let source = ClockSource::try_from(raw).map_err(InvalidMode::into_error)?;
    /// imu.set_clock_source(source)?;
    /// ```
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn into_error<E>(self) -> Error<E> {
        Error::InvalidArgument
    }
}

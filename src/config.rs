//! Signal-path configuration (CONFIG register)
//!
//! The CONFIG register holds two independent fields: the digital low-pass
//! filter applied to both accelerometer and gyroscope outputs, and the FSYNC
//! pin sampling location used for host-side timestamp alignment.

use crate::InvalidMode;

/// Digital low-pass filter (DLPF) setting
///
/// | Mode | Accel BW (Hz) | Accel delay (ms) | Gyro BW (Hz) | Gyro Fs (kHz) |
/// |------|---------------|------------------|--------------|---------------|
/// | 0    | 260           | 0.0              | 256          | 8             |
/// | 1    | 184           | 2.0              | 188          | 1             |
/// | 2    | 94            | 3.0              | 98           | 1             |
/// | 3    | 44            | 4.9              | 42           | 1             |
/// | 4    | 21            | 8.5              | 20           | 1             |
/// | 5    | 10            | 13.8             | 10           | 1             |
/// | 6    | 5             | 19.0             | 5            | 1             |
/// | 7    | reserved      | reserved         | reserved     | 8             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DlpfMode {
    /// 260 Hz accelerometer bandwidth (filter effectively off)
    #[default]
    Hz260 = 0,
    /// 184 Hz
    Hz184 = 1,
    /// 94 Hz
    Hz94 = 2,
    /// 44 Hz
    Hz44 = 3,
    /// 21 Hz
    Hz21 = 4,
    /// 10 Hz
    Hz10 = 5,
    /// 5 Hz
    Hz5 = 6,
    /// Reserved setting
    Reserved = 7,
}

impl DlpfMode {
    /// Accelerometer 3dB bandwidth in Hz, `None` for the reserved setting
    #[must_use]
    pub const fn accel_bandwidth_hz(self) -> Option<u16> {
        match self {
            Self::Hz260 => Some(260),
            Self::Hz184 => Some(184),
            Self::Hz94 => Some(94),
            Self::Hz44 => Some(44),
            Self::Hz21 => Some(21),
            Self::Hz10 => Some(10),
            Self::Hz5 => Some(5),
            Self::Reserved => None,
        }
    }

    /// Accelerometer filter delay in milliseconds, `None` for the reserved setting
    #[must_use]
    pub const fn accel_delay_ms(self) -> Option<f32> {
        match self {
            Self::Hz260 => Some(0.0),
            Self::Hz184 => Some(2.0),
            Self::Hz94 => Some(3.0),
            Self::Hz44 => Some(4.9),
            Self::Hz21 => Some(8.5),
            Self::Hz10 => Some(13.8),
            Self::Hz5 => Some(19.0),
            Self::Reserved => None,
        }
    }

    /// Gyroscope output rate in kHz
    #[must_use]
    pub const fn gyro_output_rate_khz(self) -> u8 {
        match self {
            Self::Hz260 | Self::Reserved => 8,
            _ => 1,
        }
    }
}

impl TryFrom<u8> for DlpfMode {
    type Error = InvalidMode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Hz260),
            1 => Ok(Self::Hz184),
            2 => Ok(Self::Hz94),
            3 => Ok(Self::Hz44),
            4 => Ok(Self::Hz21),
            5 => Ok(Self::Hz10),
            6 => Ok(Self::Hz5),
            7 => Ok(Self::Reserved),
            _ => Err(InvalidMode(value)),
        }
    }
}

/// FSYNC pin sampling location (`EXT_SYNC_SET`)
///
/// Selects which output register's least significant bit latches the FSYNC
/// pin state. Boards without an FSYNC connection should leave this disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExternalSync {
    /// FSYNC input disabled
    #[default]
    Disabled = 0,
    /// `TEMP_OUT_L[0]`
    TempOutL = 1,
    /// `GYRO_XOUT_L[0]`
    GyroXoutL = 2,
    /// `GYRO_YOUT_L[0]`
    GyroYoutL = 3,
    /// `GYRO_ZOUT_L[0]`
    GyroZoutL = 4,
    /// `ACCEL_XOUT_L[0]`
    AccelXoutL = 5,
    /// `ACCEL_YOUT_L[0]`
    AccelYoutL = 6,
    /// `ACCEL_ZOUT_L[0]`
    AccelZoutL = 7,
}

impl TryFrom<u8> for ExternalSync {
    type Error = InvalidMode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::TempOutL),
            2 => Ok(Self::GyroXoutL),
            3 => Ok(Self::GyroYoutL),
            4 => Ok(Self::GyroZoutL),
            5 => Ok(Self::AccelXoutL),
            6 => Ok(Self::AccelYoutL),
            7 => Ok(Self::AccelZoutL),
            _ => Err(InvalidMode(value)),
        }
    }
}

//! Register definitions for the MPU-6050
//!
//! Two views of the same register map live here:
//!
//! - The `device-driver` DSL below, which generates typed accessors used to
//!   decode register contents (see [`Mpu6050Driver::read_power_status`]).
//! - [`Register`] and the [`fields`] table, which describe each configurable
//!   bit-field as `(register, mask, start bit)` for the driver's
//!   read-modify-write primitive.
//!
//! Addresses must match the datasheet exactly; the device has no bank
//! switching, so every register lives in a single flat address space.
//!
//! [`Mpu6050Driver::read_power_status`]: crate::Mpu6050Driver::read_power_status

device_driver::create_device!(
    device_name: Mpu6050,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        /// CONFIG - Configuration (0x1A)
        register Config {
            const ADDRESS = 0x1A;
            const SIZE_BITS = 8;

            /// Digital low-pass filter setting
            dlpf_cfg: uint = 0..3,
            /// FSYNC pin sampling location
            ext_sync_set: uint = 3..6,
            reserved_7_6: uint = 6..8,
        },

        /// ACCEL_CONFIG - Accelerometer Configuration (0x1C)
        register AccelConfig {
            const ADDRESS = 0x1C;
            const SIZE_BITS = 8;

            reserved_2_0: uint = 0..3,
            /// Full-scale range select (0=±2g, 1=±4g, 2=±8g, 3=±16g)
            afs_sel: uint = 3..5,
            /// Z-axis self-test
            za_st: bool = 5,
            /// Y-axis self-test
            ya_st: bool = 6,
            /// X-axis self-test
            xa_st: bool = 7,
        },

        /// SIGNAL_PATH_RESET - Signal Path Reset (0x68)
        register SignalPathReset {
            const ADDRESS = 0x68;
            const SIZE_BITS = 8;

            /// Reset temperature sensor signal path
            temp_reset: bool = 0,
            /// Reset accelerometer signal path
            accel_reset: bool = 1,
            /// Reset gyroscope signal path
            gyro_reset: bool = 2,
            reserved_7_3: uint = 3..8,
        },

        /// PWR_MGMT_1 - Power Management 1 (0x6B)
        register PwrMgmt1 {
            const ADDRESS = 0x6B;
            const SIZE_BITS = 8;

            /// Clock source select
            clksel: uint = 0..3,
            /// Temperature sensor disable
            temp_dis: bool = 3,
            reserved_4: uint = 4..5,
            /// Cycle between sleep and single accelerometer samples
            cycle: bool = 5,
            /// Sleep mode enable
            sleep: bool = 6,
            /// Device reset (self-clearing)
            device_reset: bool = 7,
        },

        /// PWR_MGMT_2 - Power Management 2 (0x6C)
        register PwrMgmt2 {
            const ADDRESS = 0x6C;
            const SIZE_BITS = 8;

            /// Gyroscope Z-axis standby
            stby_zg: bool = 0,
            /// Gyroscope Y-axis standby
            stby_yg: bool = 1,
            /// Gyroscope X-axis standby
            stby_xg: bool = 2,
            /// Accelerometer Z-axis standby
            stby_za: bool = 3,
            /// Accelerometer Y-axis standby
            stby_ya: bool = 4,
            /// Accelerometer X-axis standby
            stby_xa: bool = 5,
            /// Wake-up frequency in accelerometer-only low-power mode
            lp_wake_ctrl: uint = 6..8,
        },

        /// WHO_AM_I - Device ID Register (0x75)
        /// Expected value: 0x68
        register WhoAmI {
            const ADDRESS = 0x75;
            const SIZE_BITS = 8;

            /// Device ID (upper 6 bits of the 7-bit I2C address)
            who_am_i: uint = 0..8,
        },
    }
);

/// Register addresses accessed by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// CONFIG: DLPF and FSYNC configuration
    Config = 0x1A,
    /// `ACCEL_CONFIG`: full-scale range and self-test
    AccelConfig = 0x1C,
    /// `ACCEL_XOUT_H`: first of six accelerometer output bytes
    AccelXoutH = 0x3B,
    /// `SIGNAL_PATH_RESET`: analog/digital signal path reset
    SignalPathReset = 0x68,
    /// `PWR_MGMT_1`: reset, sleep, cycle, temperature disable, clock
    PwrMgmt1 = 0x6B,
    /// `PWR_MGMT_2`: wake frequency and per-axis standby
    PwrMgmt2 = 0x6C,
    /// `WHO_AM_I`: device identity
    WhoAmI = 0x75,
}

impl Register {
    /// Bus address of the register
    #[must_use]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// A contiguous bit-field within a single 8-bit register
///
/// `mask` covers the field's bits in register position, so a field occupying
/// bits 3–4 has `mask = 0b0001_1000` and `start_bit = 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    /// Register holding the field
    pub register: Register,
    /// Bits covered by the field, in register position
    pub mask: u8,
    /// Position of the field's least significant bit
    pub start_bit: u8,
}

impl Field {
    /// Describe a field
    ///
    /// `mask` must be a single run of set bits whose lowest bit is
    /// `start_bit`. Checked in debug builds.
    #[must_use]
    pub const fn new(register: Register, mask: u8, start_bit: u8) -> Self {
        debug_assert!(
            is_contiguous_from(mask, start_bit),
            "field mask must be one run of bits starting at start_bit"
        );
        Self {
            register,
            mask,
            start_bit,
        }
    }

    /// Largest value the field can hold
    #[must_use]
    pub const fn max_value(self) -> u8 {
        self.mask >> self.start_bit
    }

    /// Check whether `value` fits in the field without truncation
    #[must_use]
    pub const fn accepts(self, value: u8) -> bool {
        value <= self.max_value()
    }

    /// Insert `value` into `prior`, keeping every bit outside the field
    #[must_use]
    pub const fn merge(self, prior: u8, value: u8) -> u8 {
        (prior & !self.mask) | ((value << self.start_bit) & self.mask)
    }

    /// Extract the field's value from a full register byte
    #[must_use]
    pub const fn extract(self, byte: u8) -> u8 {
        (byte & self.mask) >> self.start_bit
    }
}

/// True if `mask` is one non-empty run of set bits beginning at `start_bit`
const fn is_contiguous_from(mask: u8, start_bit: u8) -> bool {
    if start_bit >= 8 {
        return false;
    }
    let run = mask >> start_bit;
    run != 0 && run & run.wrapping_add(1) == 0 && run << start_bit == mask
}

/// Bit-field table for every setting the driver writes
pub mod fields {
    use super::{Field, Register};

    /// CONFIG.DLPF_CFG (bits 0–2)
    pub const DLPF_CFG: Field = Field::new(Register::Config, 0b0000_0111, 0);
    /// CONFIG.EXT_SYNC_SET (bits 3–5)
    pub const EXT_SYNC_SET: Field = Field::new(Register::Config, 0b0011_1000, 3);
    /// ACCEL_CONFIG.AFS_SEL (bits 3–4)
    pub const AFS_SEL: Field = Field::new(Register::AccelConfig, 0b0001_1000, 3);
    /// SIGNAL_PATH_RESET gyro/accel/temp reset bits (bits 0–2)
    pub const SIGNAL_PATH_RESET: Field = Field::new(Register::SignalPathReset, 0b0000_0111, 0);
    /// PWR_MGMT_1.CLKSEL (bits 0–2)
    pub const CLKSEL: Field = Field::new(Register::PwrMgmt1, 0b0000_0111, 0);
    /// PWR_MGMT_1.TEMP_DIS (bit 3)
    pub const TEMP_DIS: Field = Field::new(Register::PwrMgmt1, 0b0000_1000, 3);
    /// PWR_MGMT_1.CYCLE (bit 5)
    pub const CYCLE: Field = Field::new(Register::PwrMgmt1, 0b0010_0000, 5);
    /// PWR_MGMT_1.SLEEP (bit 6)
    pub const SLEEP: Field = Field::new(Register::PwrMgmt1, 0b0100_0000, 6);
    /// PWR_MGMT_1.DEVICE_RESET (bit 7)
    pub const DEVICE_RESET: Field = Field::new(Register::PwrMgmt1, 0b1000_0000, 7);
    /// PWR_MGMT_2.STBY_XG/YG/ZG (bits 0–2)
    pub const STBY_GYRO: Field = Field::new(Register::PwrMgmt2, 0b0000_0111, 0);
    /// PWR_MGMT_2.LP_WAKE_CTRL (bits 6–7)
    pub const LP_WAKE_CTRL: Field = Field::new(Register::PwrMgmt2, 0b1100_0000, 6);
}

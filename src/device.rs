//! High-level driver API for the MPU-6050
//!
//! This module provides a user-friendly interface to the MPU-6050 sensor,
//! handling field-level register updates, power sequencing and data reading.
//!
//! Every setter is a single read-modify-write of one register: the current
//! byte is read back from the device, the target field is replaced and the
//! result written. Bits outside the field keep whatever value the hardware
//! last reported.
//!
//! The driver is blocking and holds no locks. Each handle has one owner;
//! share it across threads only behind an external mutex.

use crate::power::{ClockSource, GyroStandby, PowerStatus, WakeFrequency};
use crate::registers::{Field, Mpu6050 as RegisterDevice, Register, fields};
use crate::sensors::{AccelData, AccelDataG, AccelFullScale, PitchRoll};
use crate::{DlpfMode, Error, ExternalSync};

use device_driver::RegisterInterface;

/// Settle time after each phase of the reset sequence, in milliseconds
///
/// Both the full register reset and the signal path reset need this long
/// before the device accepts further configuration.
pub const RESET_SETTLE_MS: u32 = 100;

/// Main driver for the MPU-6050
pub struct Mpu6050Driver<I> {
    device: RegisterDevice<I>,
    // Mirror of ACCEL_CONFIG.AFS_SEL, only updated after a confirmed write
    accel_full_scale: AccelFullScale,
}

impl<I> Mpu6050Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a new MPU-6050 driver instance and apply the default configuration
    ///
    /// Defaults, written in this order:
    /// - clock source: PLL with X axis gyroscope reference
    /// - accelerometer range: ±4g
    /// - external sync: disabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut imu = Mpu6050Driver::new(interface)?;
    /// let tilt = imu.read_pitch_and_roll()?;
    /// ```
    pub fn new(interface: I) -> Result<Self, Error<I::Error>> {
        let mut driver = Self {
            device: RegisterDevice::new(interface),
            accel_full_scale: AccelFullScale::default(),
        };

        driver.configure_defaults()?;

        Ok(driver)
    }

    /// Apply the default configuration
    ///
    /// Useful after [`reset_device()`](Self::reset_device), which returns every
    /// register to its power-on value.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_defaults(&mut self) -> Result<(), Error<I::Error>> {
        self.set_clock_source(ClockSource::PllGyroX)?;
        self.set_accel_full_scale(AccelFullScale::G4)?;
        self.set_external_sync(ExternalSync::Disabled)?;
        debug!("default configuration applied");
        Ok(())
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }

    // ==================== REGISTER ACCESS ====================

    /// Read a single register byte
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_register(&mut self, register: Register) -> Result<u8, Error<I::Error>> {
        let mut buffer = [0u8; 1];
        self.device
            .interface
            .read_register(register.addr(), 8, &mut buffer)?;
        Ok(buffer[0])
    }

    /// Update one bit-field of a register, preserving all other bits
    ///
    /// Reads the current register byte, clears the bits covered by
    /// `field.mask`, inserts `value << field.start_bit` and writes the merged
    /// byte back. There is no retry; a failure in either transaction is
    /// returned as-is.
    ///
    /// A successful write that touches `ACCEL_CONFIG.AFS_SEL` also updates the
    /// cached range, whichever [`Field`] was used.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `value` does not fit in the field. No
    ///   bus transaction is issued in that case.
    /// - [`Error::Bus`] if the read or the write fails.
    pub fn write_field(&mut self, field: Field, value: u8) -> Result<(), Error<I::Error>> {
        if !field.accepts(value) {
            return Err(Error::InvalidArgument);
        }

        let prior = self.read_register(field.register)?;
        let updated = field.merge(prior, value);
        trace!(
            "write_field {=u8:#x}: {=u8:#x} -> {=u8:#x}",
            field.register.addr(),
            prior,
            updated
        );

        self.device
            .interface
            .write_register(field.register.addr(), 8, &[updated])?;

        if field.register == Register::AccelConfig && field.mask & fields::AFS_SEL.mask != 0 {
            if let Ok(scale) = AccelFullScale::try_from(fields::AFS_SEL.extract(updated)) {
                self.accel_full_scale = scale;
            }
        }
        Ok(())
    }

    /// Write `0x00` to a register
    ///
    /// All-zero is the reset value of every register except `PWR_MGMT_1`
    /// (0x40) and `WHO_AM_I` (0x68).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn reset_register(&mut self, register: Register) -> Result<(), Error<I::Error>> {
        self.device
            .interface
            .write_register(register.addr(), 8, &[0x00])?;

        // Clearing ACCEL_CONFIG also clears AFS_SEL
        if register == Register::AccelConfig {
            self.accel_full_scale = AccelFullScale::G2;
        }
        Ok(())
    }

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0x68 for a genuine MPU-6050. Some compatible parts report
    /// other values, which is why the driver does not check this on
    /// construction.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    // ==================== CONFIGURATION ====================

    /// Set clock source
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_clock_source(&mut self, source: ClockSource) -> Result<(), Error<I::Error>> {
        self.write_field(fields::CLKSEL, source as u8)
    }

    /// Set the accelerometer full-scale range
    ///
    /// The cached range used to scale samples is only updated once the
    /// register write has succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. The cached
    /// range is left unchanged in that case.
    pub fn set_accel_full_scale(&mut self, scale: AccelFullScale) -> Result<(), Error<I::Error>> {
        // write_field refreshes the cached range
        self.write_field(fields::AFS_SEL, scale as u8)
    }

    /// Currently configured accelerometer full-scale range
    ///
    /// This is the value of the last successful write, not a register read.
    pub const fn accel_full_scale(&self) -> AccelFullScale {
        self.accel_full_scale
    }

    /// Set the digital low-pass filter
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_dlpf(&mut self, mode: DlpfMode) -> Result<(), Error<I::Error>> {
        self.write_field(fields::DLPF_CFG, mode as u8)
    }

    /// Set the FSYNC sampling location
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_external_sync(&mut self, sync: ExternalSync) -> Result<(), Error<I::Error>> {
        self.write_field(fields::EXT_SYNC_SET, sync as u8)
    }

    /// Set sleep mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sleep(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.write_field(fields::SLEEP, u8::from(enable))
    }

    /// Set cycle mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_cycle(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.write_field(fields::CYCLE, u8::from(enable))
    }

    /// Enable or disable temperature sensor
    ///
    /// # Arguments
    /// * `enable` - true to enable, false to disable
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_temperature_sensor(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        // TEMP_DIS is active high
        self.write_field(fields::TEMP_DIS, u8::from(!enable))
    }

    /// Put gyroscope axes in standby
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gyro_standby(&mut self, standby: GyroStandby) -> Result<(), Error<I::Error>> {
        self.write_field(fields::STBY_GYRO, standby.bits())
    }

    /// Set the wake-up frequency used in accelerometer-only low-power mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_wake_frequency(&mut self, frequency: WakeFrequency) -> Result<(), Error<I::Error>> {
        self.write_field(fields::LP_WAKE_CTRL, frequency as u8)
    }

    // ==================== RESET & POWER PROTOCOLS ====================

    /// Reset the device
    ///
    /// Two-phase sequence:
    /// 1. set `DEVICE_RESET`, which returns every register to its power-on
    ///    value, then wait [`RESET_SETTLE_MS`]
    /// 2. set the gyro, accel and temperature bits of `SIGNAL_PATH_RESET`,
    ///    then wait [`RESET_SETTLE_MS`] again
    ///
    /// The device comes out of reset asleep with a ±2g range, and the cached
    /// range follows. Call [`configure_defaults()`](Self::configure_defaults)
    /// or the individual setters afterwards.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider implementing `embedded_hal::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. A failure in
    /// the second phase leaves the register reset done but the signal path
    /// untouched; nothing is rolled back.
    pub fn reset_device<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.write_field(fields::DEVICE_RESET, 1)?;
        self.accel_full_scale = AccelFullScale::G2;
        delay.delay_ms(RESET_SETTLE_MS);

        self.write_field(fields::SIGNAL_PATH_RESET, 0b111)?;
        delay.delay_ms(RESET_SETTLE_MS);

        debug!("device reset complete");
        Ok(())
    }

    /// Enter accelerometer-only low-power mode
    ///
    /// Writes, in order: cycle on, sleep off, temperature sensor off, all gyro
    /// axes in standby, wake-up frequency. Cycle has to be asserted no later
    /// than sleep is cleared for the device to start intermittent sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. Steps that
    /// already succeeded are not rolled back; re-issue the whole sequence to
    /// recover.
    pub fn enable_low_power_accel_only(
        &mut self,
        frequency: WakeFrequency,
    ) -> Result<(), Error<I::Error>> {
        self.set_cycle(true)?;
        self.set_sleep(false)?;
        self.set_temperature_sensor(false)?;
        self.set_gyro_standby(GyroStandby::ALL)?;
        self.set_wake_frequency(frequency)?;
        debug!("low-power accel-only mode on");
        Ok(())
    }

    /// Leave accelerometer-only low-power mode
    ///
    /// Writes, in order: cycle off, sleep off, temperature sensor on, all gyro
    /// axes active. The device is left awake.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. Steps that
    /// already succeeded are not rolled back.
    pub fn disable_low_power_accel_only(&mut self) -> Result<(), Error<I::Error>> {
        self.set_cycle(false)?;
        self.set_sleep(false)?;
        self.set_temperature_sensor(true)?;
        self.set_gyro_standby(GyroStandby::NONE)?;
        debug!("low-power accel-only mode off");
        Ok(())
    }

    /// Read current power status
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_power_status(&mut self) -> Result<PowerStatus, Error<I::Error>> {
        let pwr1 = self.device.pwr_mgmt_1().read()?;
        let pwr2 = self.device.pwr_mgmt_2().read()?;

        Ok(PowerStatus {
            sleep: pwr1.sleep(),
            cycle: pwr1.cycle(),
            temp_disabled: pwr1.temp_dis(),
            clock_source: ClockSource::from_bits(pwr1.clksel()),
            gyro_standby: GyroStandby::from_axes(pwr2.stby_xg(), pwr2.stby_yg(), pwr2.stby_zg()),
            wake_frequency: WakeFrequency::from_bits(pwr2.lp_wake_ctrl()),
        })
    }

    // ==================== ACCELEROMETER ====================

    /// Read raw accelerometer data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_raw(&mut self) -> Result<AccelData, Error<I::Error>> {
        // Read all 6 bytes in one transaction so the axes come from the same sample
        let mut buffer = [0u8; 6];
        self.device
            .interface
            .read_register(Register::AccelXoutH.addr(), 48, &mut buffer)?;

        Ok(AccelData::from_be_bytes(buffer))
    }

    /// Read accelerometer data in g-force units
    ///
    /// Scaled with the cached full-scale range.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let accel = imu.read_accelerometer()?;
    /// println!("X: {}g, Y: {}g, Z: {}g", accel.x, accel.y, accel.z);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accelerometer(&mut self) -> Result<AccelDataG, Error<I::Error>> {
        let raw = self.read_accel_raw()?;
        Ok(AccelDataG::from_raw(
            raw,
            self.accel_full_scale.sensitivity(),
        ))
    }

    /// Read a sample and estimate pitch and roll from it
    ///
    /// See [`PitchRoll`] for the limits of this estimate.
    ///
    /// # Errors
    ///
    /// - [`Error::Bus`] if communication with the device fails
    /// - [`Error::Domain`] if the sample makes either angle undefined
    pub fn read_pitch_and_roll(&mut self) -> Result<PitchRoll, Error<I::Error>> {
        let accel = self.read_accelerometer()?;
        PitchRoll::from_accel(&accel).ok_or(Error::Domain)
    }
}

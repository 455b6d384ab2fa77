//! Bus interface implementation for the MPU-6050
//!
//! This module adapts an `embedded-hal` I2C bus to the `device-driver`
//! [`RegisterInterface`] trait. A register read is a write of the register
//! address followed by a repeated-start read; a register write is the address
//! byte followed by the data bytes in a single transaction.
//!
//! The bus clock is configured on the HAL peripheral before it is handed
//! over; see [`I2C_CLOCK_HZ`](crate::I2C_CLOCK_HZ) for the recommended rate.

use crate::{Error, I2C_ADDRESS_AD0_HIGH, I2C_ADDRESS_AD0_LOW};
use device_driver::RegisterInterface;

/// I2C interface for the MPU-6050
///
/// Owning the bus handle is what "opening a session" means here: the interface
/// is the only user of the bus until [`release()`](Self::release) hands it
/// back.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x68, AD0 pin LOW)
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut imu = Mpu6050Driver::new(interface)?;
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_AD0_LOW,
        }
    }

    /// Create a new I2C interface with the alternative address (0x69, AD0 pin HIGH)
    ///
    /// Use this when the AD0 pin is explicitly pulled high to VDD.
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    pub const fn alternative(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_AD0_HIGH,
        }
    }

    /// Create a new I2C interface with an explicit device address
    ///
    /// The MPU-6050 only answers on the two AD0 strap addresses, so anything
    /// else is rejected up front. No bus traffic happens here.
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    /// * `address` - 0x68 or 0x69
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `address` is not a valid strap
    /// address.
    pub fn new(i2c: I2C, address: u8) -> Result<Self, Error<I2C::Error>>
    where
        I2C: embedded_hal::i2c::ErrorType,
    {
        if address != I2C_ADDRESS_AD0_LOW && address != I2C_ADDRESS_AD0_HIGH {
            warn!("rejecting unsupported I2C address {=u8:#x}", address);
            return Err(Error::InvalidArgument);
        }
        Ok(Self { i2c, address })
    }

    /// Device address this interface talks to
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for I2C
        // Create a buffer with address + data
        let mut buffer = [0u8; 9]; // Max: 1 address + 8 data bytes
        buffer[0] = address;
        let len = write_data.len().min(8);
        buffer[1..=len].copy_from_slice(&write_data[..len]);

        self.i2c.write(self.address, &buffer[..=len])
    }
}

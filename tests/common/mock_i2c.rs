//! Mock `embedded-hal` I2C bus simulating an MPU-6050 register file

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write { addr: u8, data: Vec<u8> },
    /// Write-Read transaction
    WriteRead {
        addr: u8,
        write_data: Vec<u8>,
        read_len: usize,
    },
}

#[derive(Debug, Default)]
struct BusState {
    device_address: u8,
    registers: HashMap<u8, u8>,
    transactions: Vec<I2cTransaction>,
}

/// Mock I2C bus
///
/// Records all transactions and answers for a single simulated device at
/// `device_address`. Any other address NACKs.
#[derive(Debug, Clone)]
pub struct MockI2c {
    state: Rc<RefCell<BusState>>,
}

impl MockI2c {
    /// Create a bus with one device at `device_address`
    pub fn new(device_address: u8) -> Self {
        let mut registers = HashMap::new();
        registers.insert(0x6B, 0x40);
        registers.insert(0x75, 0x68);
        Self {
            state: Rc::new(RefCell::new(BusState {
                device_address,
                registers,
                transactions: Vec::new(),
            })),
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<I2cTransaction> {
        self.state.borrow().transactions.clone()
    }

    /// Get a register value
    pub fn get_register(&self, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&address)
            .copied()
            .unwrap_or(0)
    }

    /// Set a register value
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    fn check_address(&self, addr: u8) -> Result<(), ErrorKind> {
        if addr == self.state.borrow().device_address {
            Ok(())
        } else {
            Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
        }
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.check_address(address)?;
        let mut state = self.state.borrow_mut();
        let mut pointer = 0u8;

        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    let Some((&register, data)) = bytes.split_first() else {
                        continue;
                    };
                    pointer = register;
                    for &byte in data {
                        state.registers.insert(pointer, byte);
                        pointer = pointer.wrapping_add(1);
                    }
                }
                Operation::Read(buffer) => {
                    for byte in buffer.iter_mut() {
                        *byte = state.registers.get(&pointer).copied().unwrap_or(0);
                        pointer = pointer.wrapping_add(1);
                    }
                }
            }
        }

        Ok(())
    }

    fn write(&mut self, address: u8, write: &[u8]) -> Result<(), Self::Error> {
        self.state
            .borrow_mut()
            .transactions
            .push(I2cTransaction::Write {
                addr: address,
                data: write.to_vec(),
            });
        self.transaction(address, &mut [Operation::Write(write)])
    }

    fn write_read(
        &mut self,
        address: u8,
        write: &[u8],
        read: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.state
            .borrow_mut()
            .transactions
            .push(I2cTransaction::WriteRead {
                addr: address,
                write_data: write.to_vec(),
                read_len: read.len(),
            });
        self.transaction(address, &mut [Operation::Write(write), Operation::Read(read)])
    }
}

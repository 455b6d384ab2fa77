//! Unit tests for the read-modify-write and register reset primitives

use crate::common::{Operation, create_mock_driver};
use mpu6050::registers::fields;
use mpu6050::{AccelFullScale, Error, Field, Register};

#[test]
fn test_write_field_reads_before_writing() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x6B, 0b0010_1010);

    driver.write_field(fields::CLKSEL, 5).unwrap();

    assert_eq!(
        interface.operations(),
        vec![
            Operation::ReadRegister {
                address: 0x6B,
                value: 0b0010_1010,
            },
            Operation::WriteRegister {
                address: 0x6B,
                value: 0b0010_1101,
            },
        ]
    );
}

#[test]
fn test_write_field_merges_for_every_prior_byte() {
    let (mut driver, interface) = create_mock_driver();
    let field = fields::AFS_SEL;

    for prior in 0..=u8::MAX {
        for value in 0..=field.max_value() {
            interface.set_register(0x1C, prior);
            driver.write_field(field, value).unwrap();

            let expected = (prior & !field.mask) | (value << field.start_bit);
            assert_eq!(
                interface.get_register(0x1C),
                expected,
                "prior {:#010b}, value {}",
                prior,
                value
            );
        }
    }
}

#[test]
fn test_every_field_rejects_out_of_domain_values() {
    let (mut driver, interface) = create_mock_driver();

    let table = [
        fields::CLKSEL,
        fields::AFS_SEL,
        fields::DLPF_CFG,
        fields::EXT_SYNC_SET,
        fields::SLEEP,
        fields::CYCLE,
        fields::TEMP_DIS,
        fields::STBY_GYRO,
        fields::LP_WAKE_CTRL,
    ];

    for field in table {
        let too_big = field.max_value() + 1;
        let result = driver.write_field(field, too_big);
        assert!(
            matches!(result, Err(Error::InvalidArgument)),
            "{:?} accepted {}",
            field,
            too_big
        );
        let result = driver.write_field(field, u8::MAX);
        assert!(matches!(result, Err(Error::InvalidArgument)));
    }

    assert!(
        interface.operations().is_empty(),
        "Rejected values must not touch the bus"
    );
}

#[test]
fn test_custom_field() {
    let (mut driver, interface) = create_mock_driver();
    // ACCEL_CONFIG self-test bits, not wrapped by a setter
    let self_test = Field::new(Register::AccelConfig, 0b1110_0000, 5);
    interface.set_register(0x1C, 0b0000_1000);

    driver.write_field(self_test, 0b101).unwrap();
    assert_eq!(interface.get_register(0x1C), 0b1010_1000);
}

#[test]
fn test_reset_register_writes_zero_without_reading() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x1A, 0xFF);

    driver.reset_register(Register::Config).unwrap();

    assert_eq!(interface.get_register(0x1A), 0x00);
    assert_eq!(
        interface.operations(),
        vec![Operation::WriteRegister {
            address: 0x1A,
            value: 0x00,
        }]
    );
}

#[test]
fn test_reset_accel_config_tracks_range() {
    let (mut driver, _interface) = create_mock_driver();
    assert_eq!(driver.accel_full_scale(), AccelFullScale::G4);

    driver.reset_register(Register::AccelConfig).unwrap();
    assert_eq!(driver.accel_full_scale(), AccelFullScale::G2);
}

#[test]
fn test_read_register() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x6C, 0x87);

    assert_eq!(driver.read_register(Register::PwrMgmt2).unwrap(), 0x87);
    assert_eq!(driver.read_who_am_i().unwrap(), mpu6050::WHO_AM_I_VALUE);
}

#[test]
fn test_write_field_on_range_bits_updates_cache() {
    let (mut driver, interface) = create_mock_driver();
    assert_eq!(driver.accel_full_scale(), AccelFullScale::G4);

    driver.write_field(fields::AFS_SEL, 3).unwrap();
    assert_eq!(interface.get_register(0x1C), 0x18);
    assert_eq!(driver.accel_full_scale(), AccelFullScale::G16);

    // 2048 LSB is 1g at ±16g
    interface.set_accel_data(2048, 0, 0);
    let data = driver.read_accelerometer().unwrap();
    assert!((data.x - 1.0).abs() < 1e-6);
}

#[test]
fn test_whole_register_field_updates_cache() {
    let (mut driver, interface) = create_mock_driver();
    let whole = Field::new(Register::AccelConfig, 0xFF, 0);

    driver.write_field(whole, 0x10).unwrap();
    assert_eq!(driver.accel_full_scale(), AccelFullScale::G8);

    // Self-test bits only, range bits untouched
    let self_test = Field::new(Register::AccelConfig, 0b1110_0000, 5);
    driver.write_field(self_test, 0b111).unwrap();
    assert_eq!(interface.get_register(0x1C), 0b1111_0000);
    assert_eq!(driver.accel_full_scale(), AccelFullScale::G8);
}

#[test]
fn test_failed_range_write_keeps_cache() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_write();
    assert!(driver.write_field(fields::AFS_SEL, 0).is_err());
    assert_eq!(driver.accel_full_scale(), AccelFullScale::G4);
}

#[test]
fn test_raw_mode_rejection_matches_write_field() {
    let (mut driver, _interface) = create_mock_driver();

    let raw = 9;
    let from_conversion = mpu6050::ClockSource::try_from(raw)
        .map_err(mpu6050::InvalidMode::into_error::<crate::common::mock_interface::MockError>);
    let from_field = driver.write_field(fields::CLKSEL, raw);

    assert_eq!(from_conversion, Err(Error::InvalidArgument));
    assert_eq!(from_field, Err(Error::InvalidArgument));
}

//! Unit tests for sample decoding, scaling and tilt estimation

use crate::common::{Operation, assert_float_eq, create_mock_driver};
use mpu6050::{AccelData, AccelFullScale, Error, PitchRoll, SCALE_TABLE};

#[test]
fn test_documented_sample_at_4g() {
    let (mut driver, interface) = create_mock_driver();
    assert_eq!(driver.accel_full_scale(), AccelFullScale::G4);

    interface.set_accel_bytes([0x10, 0x00, 0x00, 0x00, 0x20, 0x00]);
    let data = driver.read_accelerometer().unwrap();

    assert_float_eq(data.x, 0.5, 1e-6);
    assert_float_eq(data.y, 0.0, 1e-6);
    assert_float_eq(data.z, 1.0, 1e-6);
}

#[test]
fn test_sample_is_one_six_byte_burst() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_bytes([1, 2, 3, 4, 5, 6]);

    driver.read_accel_raw().unwrap();

    let expected: Vec<Operation> = (0..6u8)
        .map(|i| Operation::ReadRegister {
            address: 0x3B + i,
            value: i + 1,
        })
        .collect();
    assert_eq!(interface.operations(), expected);
    assert!(interface.writes().is_empty());
}

#[test]
fn test_negative_values_decode() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_bytes([0xFF, 0xFF, 0x80, 0x00, 0xF0, 0x00]);

    let raw = driver.read_accel_raw().unwrap();
    assert_eq!(
        raw,
        AccelData {
            x: -1,
            y: -32768,
            z: -4096
        }
    );

    let data = driver.read_accelerometer().unwrap();
    assert_float_eq(data.y, -4.0, 1e-6);
    assert_float_eq(data.z, -0.5, 1e-6);
}

#[test]
fn test_scaling_follows_configured_range() {
    let (mut driver, interface) = create_mock_driver();
    let scales = [
        AccelFullScale::G2,
        AccelFullScale::G4,
        AccelFullScale::G8,
        AccelFullScale::G16,
    ];

    for raw in [1i16, -1, 1000, -12345, i16::MAX, i16::MIN] {
        interface.set_accel_data(raw, raw, raw);

        for scale in scales {
            driver.set_accel_full_scale(scale).unwrap();
            let data = driver.read_accelerometer().unwrap();

            let expected = f32::from(raw) / SCALE_TABLE[scale as usize];
            assert_float_eq(data.x, expected, 1e-6);
            assert_float_eq(data.y, expected, 1e-6);
            assert_float_eq(data.z, expected, 1e-6);
        }
    }
}

#[test]
fn test_full_scale_reading_matches_range() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_data(i16::MIN, 0, 0);

    driver.set_accel_full_scale(AccelFullScale::G16).unwrap();
    let data = driver.read_accelerometer().unwrap();
    assert_float_eq(data.x, -16.0, 1e-6);

    driver.set_accel_full_scale(AccelFullScale::G2).unwrap();
    let data = driver.read_accelerometer().unwrap();
    assert_float_eq(data.x, -2.0, 1e-6);
}

#[test]
fn test_pitch_and_roll_level() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_data(0, 0, 8192);

    let angles = driver.read_pitch_and_roll().unwrap();
    assert_eq!(angles, PitchRoll { pitch: 0, roll: 0 });
}

#[test]
fn test_pitch_and_roll_tilted() {
    let (mut driver, interface) = create_mock_driver();

    // x = 0.5g, z = 1.0g -> pitch = atan(0.5) = 26.57°
    interface.set_accel_data(4096, 0, 8192);
    let angles = driver.read_pitch_and_roll().unwrap();
    assert_eq!(angles, PitchRoll { pitch: 26, roll: 0 });

    // y = -0.5g, z = 1.0g -> roll = -26.57°
    interface.set_accel_data(0, -4096, 8192);
    let angles = driver.read_pitch_and_roll().unwrap();
    assert_eq!(
        angles,
        PitchRoll {
            pitch: 0,
            roll: -26
        }
    );
}

#[test]
fn test_pitch_undefined_along_x() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_data(8192, 0, 0);

    let result = driver.read_pitch_and_roll();
    assert!(matches!(result, Err(Error::Domain)));
}

#[test]
fn test_free_fall_sample_undefined() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_data(0, 0, 0);

    assert!(matches!(driver.read_pitch_and_roll(), Err(Error::Domain)));
}

#[test]
fn test_samples_are_not_cached() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_accel_data(0, 0, 8192);
    let first = driver.read_accelerometer().unwrap();

    interface.set_accel_data(0, 0, -8192);
    let second = driver.read_accelerometer().unwrap();

    assert_float_eq(first.z, 1.0, 1e-6);
    assert_float_eq(second.z, -1.0, 1e-6);
}

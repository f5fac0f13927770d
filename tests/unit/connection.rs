//! Identity check and construction

use crate::common::create_mock_driver;
use crate::common::mock_interface::MockI2c;
use l3g4200d::{L3g4200d, I2C_ADDR_SDO_HIGH, I2C_ADDR_SDO_LOW, WHO_AM_I};

#[test]
fn test_default_address() {
    let (driver, _) = create_mock_driver();

    assert_eq!(driver.address(), I2C_ADDR_SDO_HIGH);
    assert_eq!(driver.address(), 0x69);
}

#[test]
fn test_sdo_low_address() {
    let interface = MockI2c::new(I2C_ADDR_SDO_LOW);
    let mut driver = L3g4200d::new(interface).with_sdo_line_low();

    assert_eq!(driver.address(), 0x68);
    assert!(driver.test_connection().unwrap());
}

#[test]
fn test_explicit_address() {
    let interface = MockI2c::new(0x42);
    let mut driver = L3g4200d::with_address(interface, 0x42);

    assert_eq!(driver.address(), 0x42);
    assert!(driver.test_connection().unwrap());
}

#[test]
fn test_connection_with_expected_identity() {
    let (mut driver, _) = create_mock_driver();

    assert_eq!(WHO_AM_I, 0xD3);
    assert_eq!(driver.device_id().unwrap(), 0xD3);
    assert!(driver.test_connection().unwrap());
}

#[test]
fn test_connection_rejects_every_other_identity() {
    let (mut driver, interface) = create_mock_driver();

    for value in (0..=u8::MAX).filter(|value| *value != WHO_AM_I) {
        interface.set_who_am_i(value);

        assert!(
            !driver.test_connection().unwrap(),
            "identity {:#04x} must not be accepted",
            value
        );
    }
}

#[test]
fn test_connection_rejects_decimal_209() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_who_am_i(209);

    assert!(!driver.test_connection().unwrap());
}

#[test]
fn test_connection_only_reads() {
    let (mut driver, interface) = create_mock_driver();

    driver.test_connection().unwrap();

    assert!(interface.writes().is_empty());
}

#[test]
fn test_wrong_address_is_bus_error() {
    let interface = MockI2c::new(I2C_ADDR_SDO_LOW);
    let mut driver = L3g4200d::new(interface);

    assert!(driver.test_connection().is_err());
}

#[test]
fn test_init_powers_on() {
    let (mut driver, interface) = create_mock_driver();

    assert!(!driver.power_on().unwrap());

    driver.init().unwrap();

    assert!(driver.power_on().unwrap());
    assert_eq!(interface.register(MockI2c::CTRL_REG1), 0b0000_1111);
}

#[test]
fn test_release_returns_bus() {
    let (driver, interface) = create_mock_driver();

    let released = driver.release();
    released.set_register(MockI2c::OUT_TEMP, 7);

    assert_eq!(interface.register(MockI2c::OUT_TEMP), 7);
}

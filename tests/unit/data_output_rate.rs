//! Output data rate encoding and decoding

use crate::common::create_mock_driver;
use crate::common::mock_interface::MockI2c;
use l3g4200d::DataOutputRate;

#[test]
fn test_rate_round_trip() {
    let (mut driver, _) = create_mock_driver();

    for rate in [100, 200, 400, 800] {
        driver.set_data_output_rate(rate).unwrap();

        assert_eq!(driver.data_output_rate().unwrap().hz(), rate);
    }
}

#[test]
fn test_rate_codes() {
    let (mut driver, interface) = create_mock_driver();
    let expected = [(100, 0b00), (200, 0b01), (400, 0b10), (800, 0b11)];

    for (rate, code) in expected {
        driver.set_data_output_rate(rate).unwrap();

        assert_eq!(interface.register(MockI2c::CTRL_REG1) >> 6, code);
    }
}

#[test]
fn test_out_of_domain_rate_falls_back_to_800() {
    let (mut driver, _) = create_mock_driver();

    driver.set_data_output_rate(999).unwrap();

    assert_eq!(driver.data_output_rate().unwrap(), DataOutputRate::Hz800);
    assert_eq!(driver.data_output_rate().unwrap().hz(), 800);
}

#[test]
fn test_out_of_domain_rate_encodes_like_800() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_data_output_rate(800).unwrap();
    let reference = interface.register(MockI2c::CTRL_REG1);

    for rate in [0, 50, 99, 101, 300, 401, 1600, u16::MAX] {
        driver.set_data_output_rate(100).unwrap();
        driver.set_data_output_rate(rate).unwrap();

        assert_eq!(
            interface.register(MockI2c::CTRL_REG1),
            reference,
            "rate {} should encode as 800 Hz",
            rate
        );
    }
}

#[test]
fn test_rate_from_enum_hz() {
    let (mut driver, _) = create_mock_driver();

    driver
        .set_data_output_rate(DataOutputRate::Hz400.hz())
        .unwrap();

    assert_eq!(driver.data_output_rate().unwrap(), DataOutputRate::Hz400);
}

#[test]
fn test_rate_reads_device_every_time() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_data_output_rate(100).unwrap();
    interface.set_register(MockI2c::CTRL_REG1, 0b1000_0000);

    assert_eq!(driver.data_output_rate().unwrap(), DataOutputRate::Hz400);
}

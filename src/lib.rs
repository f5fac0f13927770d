#![no_std]

pub mod raw_data;
pub mod register_map;

#[cfg(feature = "async")]
mod asynch;

#[cfg(not(feature = "async"))]
use embedded_hal::i2c::I2c;
use embedded_hal::i2c::SevenBitAddress;
#[cfg(not(feature = "async"))]
use register_map::{ctrl_reg1, BitField, AUTO_INCREMENT, STATUS_ZYXDA};

pub use raw_data::RawData;
pub use register_map::{bandwidth_cut_off_hz, BandwidthCutOffMode, DataOutputRate, RegisterMap};

/// Default I2C address, SDO line pulled high
pub const I2C_ADDR_SDO_HIGH: SevenBitAddress = 0b1101001;
pub const I2C_ADDR_SDO_LOW: SevenBitAddress = 0b1101000;

/// Expected `WHO_AM_I` response
pub const WHO_AM_I: u8 = 0b1101_0011;

pub struct L3g4200d<T> {
    dev: T,
    address: SevenBitAddress,
}

impl<T> L3g4200d<T> {
    /// Use driver with default I2C address (SDO line high)
    pub fn new(dev: T) -> Self {
        Self::with_address(dev, I2C_ADDR_SDO_HIGH)
    }

    /// Use driver with explicit I2C address
    pub fn with_address(dev: T, address: SevenBitAddress) -> Self {
        Self { dev, address }
    }

    /// SDO line is low, adjust device I2C address accordingly
    pub fn with_sdo_line_low(self) -> Self {
        Self {
            dev: self.dev,
            address: I2C_ADDR_SDO_LOW,
        }
    }

    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Give back the bus
    pub fn release(self) -> T {
        self.dev
    }
}

#[cfg(not(feature = "async"))]
impl<T> L3g4200d<T>
where
    T: I2c,
{
    /// Power on the device. Use [`Self::test_connection`] to check it responds.
    pub fn init(&mut self) -> Result<(), T::Error> {
        self.set_power_on(true)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("L3G4200D at {=u8:#x} powered on", self.address);

        Ok(())
    }

    pub fn device_id(&mut self) -> Result<u8, T::Error> {
        self.read_register(RegisterMap::WhoAmI)
    }

    /// Check `WHO_AM_I` response.
    ///
    /// `Ok(false)` means a device answered with an unexpected identity,
    /// bus failures are returned as `Err`.
    pub fn test_connection(&mut self) -> Result<bool, T::Error> {
        let value = self.device_id()?;

        #[cfg(feature = "defmt")]
        defmt::trace!("WHO_AM_I: {=u8:#x}", value);

        Ok(value == WHO_AM_I)
    }

    pub fn read_register(&mut self, register: RegisterMap) -> Result<u8, T::Error> {
        let mut buf = [0; 1];

        self.dev.write_read(self.address, &[register as u8], &mut buf)?;

        Ok(buf[0])
    }

    pub fn write_register(&mut self, register: RegisterMap, value: u8) -> Result<(), T::Error> {
        self.dev.write(self.address, &[register as u8, value])
    }

    fn read_field(&mut self, register: RegisterMap, field: BitField) -> Result<u8, T::Error> {
        let value = self.read_register(register)?;

        Ok(field.extract(value))
    }

    fn write_field(
        &mut self,
        register: RegisterMap,
        field: BitField,
        value: u8,
    ) -> Result<(), T::Error> {
        let current = self.read_register(register)?;

        self.write_register(register, field.insert(current, value))
    }

    fn read_flag(&mut self, register: RegisterMap, field: BitField) -> Result<bool, T::Error> {
        Ok(self.read_field(register, field)? != 0)
    }

    fn write_flag(
        &mut self,
        register: RegisterMap,
        field: BitField,
        value: bool,
    ) -> Result<(), T::Error> {
        self.write_field(register, field, value as u8)
    }

    /// Rates other than 100, 200 or 400 Hz select 800 Hz
    pub fn set_data_output_rate(&mut self, rate_hz: u16) -> Result<(), T::Error> {
        let rate = DataOutputRate::from_hz(rate_hz);

        #[cfg(feature = "defmt")]
        defmt::trace!("Set data output rate: {}", rate);

        self.write_field(RegisterMap::CtrlReg1, ctrl_reg1::DATA_RATE, rate as u8)
    }

    pub fn data_output_rate(&mut self) -> Result<DataOutputRate, T::Error> {
        let bits = self.read_field(RegisterMap::CtrlReg1, ctrl_reg1::DATA_RATE)?;

        Ok(DataOutputRate::from_bits(bits))
    }

    pub fn set_bandwidth_cut_off_mode(
        &mut self,
        mode: BandwidthCutOffMode,
    ) -> Result<(), T::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("Set bandwidth cut-off mode: {}", mode);

        self.write_field(RegisterMap::CtrlReg1, ctrl_reg1::BANDWIDTH, mode as u8)
    }

    pub fn bandwidth_cut_off_mode(&mut self) -> Result<BandwidthCutOffMode, T::Error> {
        let bits = self.read_field(RegisterMap::CtrlReg1, ctrl_reg1::BANDWIDTH)?;

        Ok(BandwidthCutOffMode::from_bits(bits))
    }

    /// Low-pass filter cut-off frequency in Hz for the configured rate and mode
    pub fn bandwidth_cut_off(&mut self) -> Result<f32, T::Error> {
        let value = self.read_register(RegisterMap::CtrlReg1)?;

        Ok(bandwidth_cut_off_hz(
            ctrl_reg1::DATA_RATE.extract(value),
            ctrl_reg1::BANDWIDTH.extract(value),
        ))
    }

    pub fn set_power_on(&mut self, on: bool) -> Result<(), T::Error> {
        self.write_flag(RegisterMap::CtrlReg1, ctrl_reg1::POWER_ON, on)
    }

    pub fn power_on(&mut self) -> Result<bool, T::Error> {
        self.read_flag(RegisterMap::CtrlReg1, ctrl_reg1::POWER_ON)
    }

    pub fn set_x_enabled(&mut self, enabled: bool) -> Result<(), T::Error> {
        self.write_flag(RegisterMap::CtrlReg1, ctrl_reg1::X_ENABLE, enabled)
    }

    pub fn x_enabled(&mut self) -> Result<bool, T::Error> {
        self.read_flag(RegisterMap::CtrlReg1, ctrl_reg1::X_ENABLE)
    }

    pub fn set_y_enabled(&mut self, enabled: bool) -> Result<(), T::Error> {
        self.write_flag(RegisterMap::CtrlReg1, ctrl_reg1::Y_ENABLE, enabled)
    }

    pub fn y_enabled(&mut self) -> Result<bool, T::Error> {
        self.read_flag(RegisterMap::CtrlReg1, ctrl_reg1::Y_ENABLE)
    }

    pub fn set_z_enabled(&mut self, enabled: bool) -> Result<(), T::Error> {
        self.write_flag(RegisterMap::CtrlReg1, ctrl_reg1::Z_ENABLE, enabled)
    }

    pub fn z_enabled(&mut self) -> Result<bool, T::Error> {
        self.read_flag(RegisterMap::CtrlReg1, ctrl_reg1::Z_ENABLE)
    }

    /// New sample available on all axes
    pub fn data_ready(&mut self) -> Result<bool, T::Error> {
        self.read_flag(RegisterMap::StatusReg, STATUS_ZYXDA)
    }

    /// Read raw temperature, one LSB per degree, negative slope
    pub fn read_temperature(&mut self) -> Result<i8, T::Error> {
        Ok(self.read_register(RegisterMap::OutTemp)? as i8)
    }

    /// Read raw gyroscope measurement data
    pub fn read_gyro_data(&mut self) -> Result<RawData, T::Error> {
        let mut data = [0; RawData::SIZE];

        self.dev.write_read(
            self.address,
            &[RegisterMap::OutXL as u8 | AUTO_INCREMENT],
            &mut data,
        )?;

        Ok(data.into())
    }
}

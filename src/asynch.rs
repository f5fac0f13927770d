use embedded_hal_async::i2c::I2c;

use crate::register_map::{ctrl_reg1, BitField, AUTO_INCREMENT, STATUS_ZYXDA};
use crate::{
    bandwidth_cut_off_hz, BandwidthCutOffMode, DataOutputRate, L3g4200d, RawData, RegisterMap,
    WHO_AM_I,
};

impl<T> L3g4200d<T>
where
    T: I2c,
{
    /// Power on the device. Use [`Self::test_connection`] to check it responds.
    pub async fn init(&mut self) -> Result<(), T::Error> {
        self.set_power_on(true).await?;

        #[cfg(feature = "defmt")]
        defmt::trace!("L3G4200D at {=u8:#x} powered on", self.address);

        Ok(())
    }

    pub async fn device_id(&mut self) -> Result<u8, T::Error> {
        self.read_register(RegisterMap::WhoAmI).await
    }

    /// Check `WHO_AM_I` response, bus failures are returned as `Err`
    pub async fn test_connection(&mut self) -> Result<bool, T::Error> {
        let value = self.device_id().await?;

        #[cfg(feature = "defmt")]
        defmt::trace!("WHO_AM_I: {=u8:#x}", value);

        Ok(value == WHO_AM_I)
    }

    pub async fn read_register(&mut self, register: RegisterMap) -> Result<u8, T::Error> {
        let mut buf = [0; 1];

        self.dev
            .write_read(self.address, &[register as u8], &mut buf)
            .await?;

        Ok(buf[0])
    }

    pub async fn write_register(
        &mut self,
        register: RegisterMap,
        value: u8,
    ) -> Result<(), T::Error> {
        self.dev.write(self.address, &[register as u8, value]).await
    }

    async fn read_field(&mut self, register: RegisterMap, field: BitField) -> Result<u8, T::Error> {
        let value = self.read_register(register).await?;

        Ok(field.extract(value))
    }

    async fn write_field(
        &mut self,
        register: RegisterMap,
        field: BitField,
        value: u8,
    ) -> Result<(), T::Error> {
        let current = self.read_register(register).await?;

        self.write_register(register, field.insert(current, value))
            .await
    }

    async fn read_flag(&mut self, register: RegisterMap, field: BitField) -> Result<bool, T::Error> {
        Ok(self.read_field(register, field).await? != 0)
    }

    async fn write_flag(
        &mut self,
        register: RegisterMap,
        field: BitField,
        value: bool,
    ) -> Result<(), T::Error> {
        self.write_field(register, field, value as u8).await
    }

    pub async fn set_data_output_rate(&mut self, rate_hz: u16) -> Result<(), T::Error> {
        let rate = DataOutputRate::from_hz(rate_hz);

        #[cfg(feature = "defmt")]
        defmt::trace!("Set data output rate: {}", rate);

        self.write_field(RegisterMap::CtrlReg1, ctrl_reg1::DATA_RATE, rate as u8)
            .await
    }

    pub async fn data_output_rate(&mut self) -> Result<DataOutputRate, T::Error> {
        let bits = self
            .read_field(RegisterMap::CtrlReg1, ctrl_reg1::DATA_RATE)
            .await?;

        Ok(DataOutputRate::from_bits(bits))
    }

    pub async fn set_bandwidth_cut_off_mode(
        &mut self,
        mode: BandwidthCutOffMode,
    ) -> Result<(), T::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("Set bandwidth cut-off mode: {}", mode);

        self.write_field(RegisterMap::CtrlReg1, ctrl_reg1::BANDWIDTH, mode as u8)
            .await
    }

    pub async fn bandwidth_cut_off_mode(&mut self) -> Result<BandwidthCutOffMode, T::Error> {
        let bits = self
            .read_field(RegisterMap::CtrlReg1, ctrl_reg1::BANDWIDTH)
            .await?;

        Ok(BandwidthCutOffMode::from_bits(bits))
    }

    pub async fn bandwidth_cut_off(&mut self) -> Result<f32, T::Error> {
        let value = self.read_register(RegisterMap::CtrlReg1).await?;

        Ok(bandwidth_cut_off_hz(
            ctrl_reg1::DATA_RATE.extract(value),
            ctrl_reg1::BANDWIDTH.extract(value),
        ))
    }

    pub async fn set_power_on(&mut self, on: bool) -> Result<(), T::Error> {
        self.write_flag(RegisterMap::CtrlReg1, ctrl_reg1::POWER_ON, on)
            .await
    }

    pub async fn power_on(&mut self) -> Result<bool, T::Error> {
        self.read_flag(RegisterMap::CtrlReg1, ctrl_reg1::POWER_ON)
            .await
    }

    pub async fn set_x_enabled(&mut self, enabled: bool) -> Result<(), T::Error> {
        self.write_flag(RegisterMap::CtrlReg1, ctrl_reg1::X_ENABLE, enabled)
            .await
    }

    pub async fn x_enabled(&mut self) -> Result<bool, T::Error> {
        self.read_flag(RegisterMap::CtrlReg1, ctrl_reg1::X_ENABLE)
            .await
    }

    pub async fn set_y_enabled(&mut self, enabled: bool) -> Result<(), T::Error> {
        self.write_flag(RegisterMap::CtrlReg1, ctrl_reg1::Y_ENABLE, enabled)
            .await
    }

    pub async fn y_enabled(&mut self) -> Result<bool, T::Error> {
        self.read_flag(RegisterMap::CtrlReg1, ctrl_reg1::Y_ENABLE)
            .await
    }

    pub async fn set_z_enabled(&mut self, enabled: bool) -> Result<(), T::Error> {
        self.write_flag(RegisterMap::CtrlReg1, ctrl_reg1::Z_ENABLE, enabled)
            .await
    }

    pub async fn z_enabled(&mut self) -> Result<bool, T::Error> {
        self.read_flag(RegisterMap::CtrlReg1, ctrl_reg1::Z_ENABLE)
            .await
    }

    pub async fn data_ready(&mut self) -> Result<bool, T::Error> {
        self.read_flag(RegisterMap::StatusReg, STATUS_ZYXDA).await
    }

    pub async fn read_temperature(&mut self) -> Result<i8, T::Error> {
        Ok(self.read_register(RegisterMap::OutTemp).await? as i8)
    }

    /// Read raw gyroscope measurement data
    pub async fn read_gyro_data(&mut self) -> Result<RawData, T::Error> {
        let mut data = [0; RawData::SIZE];

        self.dev
            .write_read(
                self.address,
                &[RegisterMap::OutXL as u8 | AUTO_INCREMENT],
                &mut data,
            )
            .await?;

        Ok(data.into())
    }
}

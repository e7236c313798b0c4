use embedded_hal as hal;

use super::{BusMode, Device, SensorInterface};
use crate::registers::I2cAddressing;
use crate::Error;

/// Default 7-bit bus address of the BMA220 accelerometer.
pub const ACCEL_I2C_ADDRESS: u8 = 0x0A;

/// Default 7-bit bus address of the L3G4200D gyroscope, as wired on the
/// breakout (SDO pulled high).
pub const GYRO_I2C_ADDRESS: u8 = 0x69;

/// Both chips share the I2C bus; devices are selected by bus address,
/// not by chip-select lines.
pub struct I2cInterface<I2C> {
    /// i2c port
    i2c_port: I2C,
    /// bus address of the accelerometer
    accel_address: u8,
    /// bus address of the gyroscope
    gyro_address: u8,
}

impl<I2C, CommE> I2cInterface<I2C>
where
    I2C: hal::i2c::I2c<Error = CommE>,
{
    pub fn new(i2c: I2C) -> Self {
        Self::with_addresses(i2c, ACCEL_I2C_ADDRESS, GYRO_I2C_ADDRESS)
    }

    /// For boards wired with non-default address pins.
    pub fn with_addresses(i2c: I2C, accel_address: u8, gyro_address: u8) -> Self {
        Self {
            i2c_port: i2c,
            accel_address,
            gyro_address,
        }
    }

    /// Release owned resources
    pub fn release(self) -> I2C {
        self.i2c_port
    }

    fn address_of(&self, device: Device) -> u8 {
        match device {
            Device::Accel => self.accel_address,
            Device::Gyro => self.gyro_address,
        }
    }
}

impl<I2C, CommE> SensorInterface for I2cInterface<I2C>
where
    I2C: hal::i2c::I2c<Error = CommE>,
{
    type InterfaceError = Error<CommE, ()>;
    type AccelMap = I2cAddressing;

    const BUS_MODE: BusMode = BusMode::I2c;

    /// Nothing to bring up: addressing is by bus address and no
    /// chip-select lines exist on this interface.
    fn setup(&mut self) -> Result<(), Self::InterfaceError> {
        Ok(())
    }

    fn register_read(&mut self, device: Device, reg: u8) -> Result<u8, Self::InterfaceError> {
        let address = self.address_of(device);
        let mut block: [u8; 1] = [0];
        self.i2c_port
            .write_read(address, &[reg], &mut block)
            .map_err(Error::Comm)?;
        Ok(block[0])
    }

    fn register_write(
        &mut self,
        device: Device,
        reg: u8,
        val: u8,
    ) -> Result<(), Self::InterfaceError> {
        let address = self.address_of(device);
        self.i2c_port
            .write(address, &[reg, val])
            .map_err(Error::Comm)
    }
}

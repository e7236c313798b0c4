pub mod i2c;
pub mod spi;

pub use self::i2c::I2cInterface;
pub use self::spi::SpiInterface;

use crate::registers::AccelRegisterMap;

/// The serial bus the accelerometer is wired for.
///
/// Selected once when the interface is constructed; it also decides which
/// accelerometer register map is in effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BusMode {
    Spi,
    I2c,
}

/// The two chips on the breakout board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Device {
    Accel,
    Gyro,
}

/// A method of communicating with the two sensors on the board
pub trait SensorInterface {
    /// Interface error type
    type InterfaceError;

    /// The accelerometer register map in effect on this bus
    type AccelMap: AccelRegisterMap;

    /// Which bus this interface drives
    const BUS_MODE: BusMode;

    /// One-time bus bring-up: parks both chip selects high on SPI,
    /// nothing to do on I2C.
    fn setup(&mut self) -> Result<(), Self::InterfaceError>;

    /// Read a single register from one of the two devices
    fn register_read(&mut self, device: Device, reg: u8) -> Result<u8, Self::InterfaceError>;

    /// Write a single register on one of the two devices
    fn register_write(
        &mut self,
        device: Device,
        reg: u8,
        val: u8,
    ) -> Result<(), Self::InterfaceError>;
}

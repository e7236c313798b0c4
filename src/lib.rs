//! Driver for the tinyIMU breakout board: a BMA220 3-axis accelerometer
//! and an L3G4200D 3-axis gyroscope behind one serial bus.
//!
//! The accelerometer speaks either SPI or I2C and uses a different
//! register layout on each; pick the bus with [`Builder::new_spi`] or
//! [`Builder::new_i2c`] and the matching [`registers::AccelRegisterMap`]
//! table follows from that choice. The gyroscope map is the same either
//! way. [`TinyImu::init`] parks both chip-select lines high on SPI and
//! is a no-op on I2C; register access for downstream readout code goes
//! through [`TinyImu::register_read`] and [`TinyImu::register_write`].

#![no_std]

use embedded_hal as hal;
use hal::digital::OutputPin;

mod interface;
pub mod registers;

pub use interface::{BusMode, Device, I2cInterface, SensorInterface, SpiInterface};

pub use interface::i2c::{ACCEL_I2C_ADDRESS, GYRO_I2C_ADDRESS};
pub use interface::spi::SPI_MODE;

/// Errors in this crate
#[derive(Debug)]
pub enum Error<CommE, PinE> {
    /// Sensor communication error
    Comm(CommE),
    /// Pin setting error
    Pin(PinE),
}

pub struct Builder {}

impl Builder {
    /// Create a new driver using the I2C interface, with the breakout's
    /// default device addresses. No chip-select pins are involved.
    pub fn new_i2c<I2C, CommE>(i2c: I2C) -> TinyImu<I2cInterface<I2C>>
    where
        I2C: hal::i2c::I2c<Error = CommE>,
        CommE: core::fmt::Debug,
    {
        let iface = interface::I2cInterface::new(i2c);
        TinyImu::new_with_interface(iface)
    }

    /// Create a new driver using the I2C interface with explicit device
    /// addresses.
    pub fn new_i2c_with_addresses<I2C, CommE>(
        i2c: I2C,
        accel_address: u8,
        gyro_address: u8,
    ) -> TinyImu<I2cInterface<I2C>>
    where
        I2C: hal::i2c::I2c<Error = CommE>,
        CommE: core::fmt::Debug,
    {
        let iface = interface::I2cInterface::with_addresses(i2c, accel_address, gyro_address);
        TinyImu::new_with_interface(iface)
    }

    /// Create a new driver using the SPI interface.
    ///
    /// The bus must be configured for [`SPI_MODE`] (mode 2), MSB first;
    /// both chips share it, each behind its own chip-select pin.
    pub fn new_spi<SPI, ACS, GCS, CommE, PinE>(
        spi: SPI,
        accel_csn: ACS,
        gyro_csn: GCS,
    ) -> TinyImu<SpiInterface<SPI, ACS, GCS>>
    where
        SPI: hal::spi::SpiBus<u8, Error = CommE>,
        ACS: OutputPin<Error = PinE>,
        GCS: OutputPin<Error = PinE>,
        CommE: core::fmt::Debug,
        PinE: core::fmt::Debug,
    {
        let iface = interface::SpiInterface::new(spi, accel_csn, gyro_csn);
        TinyImu::new_with_interface(iface)
    }
}

pub struct TinyImu<SI> {
    pub(crate) si: SI,
}

impl<SI> TinyImu<SI>
where
    SI: SensorInterface,
{
    pub(crate) fn new_with_interface(sensor_interface: SI) -> Self {
        Self {
            si: sensor_interface,
        }
    }

    /// One-time bus bring-up, to be run once at startup before any
    /// register traffic. On SPI this deasserts (drives high) both
    /// chip-select lines; on I2C it does nothing.
    pub fn init(&mut self) -> Result<(), SI::InterfaceError> {
        self.si.setup()
    }

    /// The bus this driver instance was built for
    pub fn bus_mode(&self) -> BusMode {
        SI::BUS_MODE
    }

    /// Read a single register from one of the two chips.
    ///
    /// Accelerometer addresses come from the map matching the active
    /// bus ([`registers::SpiAddressing`] or [`registers::I2cAddressing`]);
    /// gyroscope addresses come from [`registers::gyro`].
    pub fn register_read(&mut self, device: Device, reg: u8) -> Result<u8, SI::InterfaceError> {
        self.si.register_read(device, reg)
    }

    /// Write a single register on one of the two chips
    pub fn register_write(
        &mut self,
        device: Device,
        reg: u8,
        val: u8,
    ) -> Result<(), SI::InterfaceError> {
        self.si.register_write(device, reg, val)
    }

    /// Release the owned sensor interface
    pub fn release(self) -> SI {
        self.si
    }
}

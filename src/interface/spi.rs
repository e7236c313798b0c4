use embedded_hal as hal;
use hal::digital::OutputPin;
use hal::spi::{Mode, MODE_2};

use super::{BusMode, Device, SensorInterface};
use crate::registers::SpiAddressing;
use crate::Error;
#[cfg(feature = "rttdebug")]
use panic_rtt_core::rprintln;

/// SPI clock configuration both chips require (CPOL=1, CPHA=0).
///
/// The bus peripheral handed to [`SpiInterface::new`] must be configured
/// for this mode, MSB first.
pub const SPI_MODE: Mode = MODE_2;

/// This combines the shared SPI bus with the two chip-select control
/// pins of the breakout:
/// - ACS : accelerometer Chip Select
/// - GCS : gyroscope Chip Select
pub struct SpiInterface<SPI, ACS, GCS> {
    /// the SPI bus both chips hang off
    spi: SPI,
    /// Chip Select pin (GPIO output) for the accelerometer
    accel_csn: ACS,
    /// Chip Select pin (GPIO output) for the gyroscope
    gyro_csn: GCS,
}

impl<SPI, ACS, GCS, CommE, PinE> SpiInterface<SPI, ACS, GCS>
where
    SPI: hal::spi::SpiBus<u8, Error = CommE>,
    ACS: OutputPin<Error = PinE>,
    GCS: OutputPin<Error = PinE>,
{
    /// Combined with register address for reading single byte register
    const DIR_READ: u8 = 0x80; // same as 1<<7

    /// Takes ownership of the bus and both chip-select pins. Neither pin
    /// is driven until [`SensorInterface::setup`] runs.
    pub fn new(spi: SPI, accel_csn: ACS, gyro_csn: GCS) -> Self {
        Self {
            spi,
            accel_csn,
            gyro_csn,
        }
    }

    /// Release owned resources
    pub fn release(self) -> (SPI, ACS, GCS) {
        (self.spi, self.accel_csn, self.gyro_csn)
    }

    fn select(&mut self, device: Device) -> Result<(), Error<CommE, PinE>> {
        match device {
            Device::Accel => self.accel_csn.set_low(),
            Device::Gyro => self.gyro_csn.set_low(),
        }
        .map_err(Error::Pin)
    }

    fn deselect(&mut self, device: Device) -> Result<(), Error<CommE, PinE>> {
        match device {
            Device::Accel => self.accel_csn.set_high(),
            Device::Gyro => self.gyro_csn.set_high(),
        }
        .map_err(Error::Pin)
    }

    fn read_block(
        &mut self,
        device: Device,
        reg: u8,
        buffer: &mut [u8],
    ) -> Result<(), Error<CommE, PinE>> {
        self.select(device)?;
        let rc = self
            .spi
            .write(&[reg | Self::DIR_READ])
            .and_then(|_| self.spi.read(buffer))
            .and_then(|_| self.spi.flush());
        self.deselect(device)?;
        rc.map_err(Error::Comm)?;

        Ok(())
    }

    fn write_block(&mut self, device: Device, block: &[u8]) -> Result<(), Error<CommE, PinE>> {
        #[cfg(feature = "rttdebug")]
        rprintln!("write {:x?} ", block);

        self.select(device)?;
        let rc = self.spi.write(block).and_then(|_| self.spi.flush());
        self.deselect(device)?;
        rc.map_err(Error::Comm)?;

        Ok(())
    }
}

impl<SPI, ACS, GCS, CommE, PinE> SensorInterface for SpiInterface<SPI, ACS, GCS>
where
    SPI: hal::spi::SpiBus<u8, Error = CommE>,
    ACS: OutputPin<Error = PinE>,
    GCS: OutputPin<Error = PinE>,
{
    type InterfaceError = Error<CommE, PinE>;
    type AccelMap = SpiAddressing;

    const BUS_MODE: BusMode = BusMode::Spi;

    /// Park both chip selects at their idle (deasserted) level so
    /// neither chip responds until it is explicitly addressed.
    fn setup(&mut self) -> Result<(), Self::InterfaceError> {
        self.accel_csn.set_high().map_err(Error::Pin)?;
        self.gyro_csn.set_high().map_err(Error::Pin)?;
        Ok(())
    }

    fn register_read(&mut self, device: Device, reg: u8) -> Result<u8, Self::InterfaceError> {
        let mut block: [u8; 1] = [0];
        self.read_block(device, reg, &mut block)?;

        #[cfg(feature = "rttdebug")]
        rprintln!("read reg 0x{:x} {:x?} ", reg, block[0]);

        Ok(block[0])
    }

    fn register_write(
        &mut self,
        device: Device,
        reg: u8,
        val: u8,
    ) -> Result<(), Self::InterfaceError> {
        let block: [u8; 2] = [reg, val];
        self.write_block(device, &block)?;
        Ok(())
    }
}

use embedded_hal::spi::{Phase, Polarity};
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

use tinyimu::registers::{gyro, AccelRegisterMap, I2cAddressing, SpiAddressing};
use tinyimu::{
    Builder, BusMode, Device, SensorInterface, TinyImu, ACCEL_I2C_ADDRESS, GYRO_I2C_ADDRESS,
    SPI_MODE,
};

/// register addressing bit for reads, shared by both chips
const DIR_READ: u8 = 0x80;

fn active_accel_range_addr<SI: SensorInterface>(_imu: &TinyImu<SI>) -> u8 {
    <SI::AccelMap as AccelRegisterMap>::RANGE
}

#[test]
fn spi_init_parks_both_chip_selects_high() {
    let spi = SpiMock::new(&[]);
    let accel_cs = PinMock::new(&[PinTransaction::set(PinState::High)]);
    let gyro_cs = PinMock::new(&[PinTransaction::set(PinState::High)]);

    let mut imu = Builder::new_spi(spi, accel_cs, gyro_cs);
    imu.init().unwrap();
    assert_eq!(imu.bus_mode(), BusMode::Spi);

    // done() panics on any unconsumed or extra pin edge, so this also
    // proves init drove each pin high exactly once and never low
    let (mut spi, mut accel_cs, mut gyro_cs) = imu.release().release();
    spi.done();
    accel_cs.done();
    gyro_cs.done();
}

#[test]
fn i2c_init_performs_no_bus_traffic() {
    let i2c = I2cMock::new(&[]);

    let mut imu = Builder::new_i2c(i2c);
    imu.init().unwrap();
    assert_eq!(imu.bus_mode(), BusMode::I2c);

    imu.release().release().done();
}

#[test]
fn spi_clock_configuration_is_mode_2() {
    assert_eq!(SPI_MODE.polarity, Polarity::IdleHigh);
    assert_eq!(SPI_MODE.phase, Phase::CaptureOnFirstTransition);
}

#[test]
fn interface_selects_matching_accel_map() {
    let spi_imu = Builder::new_spi(
        SpiMock::new(&[]),
        PinMock::new(&[]),
        PinMock::new(&[]),
    );
    assert_eq!(active_accel_range_addr(&spi_imu), 0x11);

    let i2c_imu = Builder::new_i2c(I2cMock::new(&[]));
    assert_eq!(active_accel_range_addr(&i2c_imu), 0x22);

    let (mut spi, mut accel_cs, mut gyro_cs) = spi_imu.release().release();
    spi.done();
    accel_cs.done();
    gyro_cs.done();
    i2c_imu.release().release().done();
}

#[test]
fn spi_read_brackets_the_accel_chip_select_only() {
    let spi_expectations = [
        SpiTransaction::write_vec(vec![SpiAddressing::RANGE | DIR_READ]),
        SpiTransaction::read_vec(vec![0x03]),
        SpiTransaction::flush(),
    ];
    let accel_cs_expectations = [
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ];
    let gyro_cs_expectations = [PinTransaction::set(PinState::High)];

    let spi = SpiMock::new(&spi_expectations);
    let accel_cs = PinMock::new(&accel_cs_expectations);
    let gyro_cs = PinMock::new(&gyro_cs_expectations);

    let mut imu = Builder::new_spi(spi, accel_cs, gyro_cs);
    imu.init().unwrap();
    let val = imu.register_read(Device::Accel, SpiAddressing::RANGE).unwrap();
    assert_eq!(val, 0x03);

    let (mut spi, mut accel_cs, mut gyro_cs) = imu.release().release();
    spi.done();
    accel_cs.done();
    gyro_cs.done();
}

#[test]
fn spi_write_brackets_the_gyro_chip_select_only() {
    let spi_expectations = [
        SpiTransaction::write_vec(vec![gyro::CTRL_REG1, 0x0F]),
        SpiTransaction::flush(),
    ];
    let accel_cs_expectations = [PinTransaction::set(PinState::High)];
    let gyro_cs_expectations = [
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ];

    let spi = SpiMock::new(&spi_expectations);
    let accel_cs = PinMock::new(&accel_cs_expectations);
    let gyro_cs = PinMock::new(&gyro_cs_expectations);

    let mut imu = Builder::new_spi(spi, accel_cs, gyro_cs);
    imu.init().unwrap();
    imu.register_write(Device::Gyro, gyro::CTRL_REG1, 0x0F).unwrap();

    let (mut spi, mut accel_cs, mut gyro_cs) = imu.release().release();
    spi.done();
    accel_cs.done();
    gyro_cs.done();
}

#[test]
fn i2c_register_access_addresses_each_device() {
    let expectations = [
        I2cTransaction::write_read(
            ACCEL_I2C_ADDRESS,
            vec![I2cAddressing::CHIP_ID],
            vec![0xDD],
        ),
        I2cTransaction::write(GYRO_I2C_ADDRESS, vec![gyro::CTRL_REG1, 0x0F]),
    ];
    let i2c = I2cMock::new(&expectations);

    let mut imu = Builder::new_i2c(i2c);
    imu.init().unwrap();
    let chip_id = imu
        .register_read(Device::Accel, I2cAddressing::CHIP_ID)
        .unwrap();
    assert_eq!(chip_id, 0xDD);
    imu.register_write(Device::Gyro, gyro::CTRL_REG1, 0x0F).unwrap();

    imu.release().release().done();
}

#[test]
fn i2c_custom_addresses_are_used() {
    let expectations = [I2cTransaction::write_read(0x0B, vec![I2cAddressing::CHIP_ID], vec![0xDD])];
    let i2c = I2cMock::new(&expectations);

    let mut imu = Builder::new_i2c_with_addresses(i2c, 0x0B, 0x68);
    imu.init().unwrap();
    let chip_id = imu
        .register_read(Device::Accel, I2cAddressing::CHIP_ID)
        .unwrap();
    assert_eq!(chip_id, 0xDD);

    imu.release().release().done();
}

//! Register maps for the two chips on the tinyIMU breakout.
//!
//! The BMA220 accelerometer exposes a different register layout depending
//! on whether it is wired for SPI or for I2C; the two tables below were
//! mapped independently from the datasheet and are not arithmetic
//! transforms of one another. The L3G4200D gyroscope layout is the same
//! on either bus.

/// BMA220 register addresses for one addressing mode.
///
/// Many names resolve to the same byte: the chip packs several logical
/// bit-fields into one physical register, and each field keeps its own
/// named constant.
///
/// Implemented only by [`SpiAddressing`] and [`I2cAddressing`]; an
/// interface type carries exactly one of the two, so exactly one table is
/// ever active.
pub trait AccelRegisterMap {
    const CHIP_ID: u8;
    const REVISION_ID: u8;

    // acceleration data, one register per axis
    const ACC_X: u8;
    const ACC_Y: u8;
    const ACC_Z: u8;

    // high-g / low-g interrupt thresholds and timing
    const HIGH_DUR: u8;
    const HIGH_HY: u8;
    const HIGH_TH: u8;
    const LOW_TH: u8;
    const LOW_DUR: u8;
    const LOW_HY: u8;

    // tap and slope detection configuration
    const TT_DUR: u8;
    const TT_TH: u8;
    const TT_FILT: u8;
    const SLOPE_DUR: u8;
    const SLOPE_TH: u8;
    const SLOPE_FILT: u8;
    const ORIENT_EX: u8;
    const TT_SAMP: u8;
    const ORIENT_BLOCKING: u8;
    const TIP_EN: u8;

    // interrupt status fields
    const INT_SIGN: u8;
    const INT_FIRST_Z: u8;
    const INT_FIRST_Y: u8;
    const INT_FIRST_X: u8;
    const ORIENT: u8;
    const ORIENT_INT: u8;
    const SLOPE_INT: u8;
    const DATA_INT: u8;
    const HIGH_INT: u8;
    const LOW_INT: u8;
    const TT_INT: u8;

    // interrupt enable fields
    const EN_TT_Z: u8;
    const EN_TT_Y: u8;
    const EN_TT_X: u8;
    const EN_SLOPE_Z: u8;
    const EN_SLOPE_Y: u8;
    const EN_SLOPE_X: u8;
    const EN_ORIENT: u8;
    const EN_DATA: u8;
    const EN_HIGH_Z: u8;
    const EN_HIGH_Y: u8;
    const EN_HIGH_X: u8;
    const EN_LOW: u8;
    const LAT_INT: u8;
    const RESET_INT: u8;

    /// Alias of [`AccelRegisterMap::EN_SLOPE_Y`]. The misspelling appears
    /// in the breakout's published register list and is kept for
    /// compatibility with code written against it.
    const EN_CLOPE_Y: u8 = Self::EN_SLOPE_Y;

    // channel enables and sleep control
    const EN_Z_CHANNEL: u8;
    const EN_Y_CHANNEL: u8;
    const EN_X_CHANNEL: u8;
    const SLEEP_DUR: u8;
    const SLEEP_EN: u8;

    // filter and range configuration
    const FILT_CONFIG: u8;
    const SERIAL_HIGH_BW: u8;
    const RANGE: u8;
    const SBIST: u8;
    const SBIST_SIGN: u8;

    // serial interface and watchdog configuration
    const SPI3: u8;
    const WDT_TO_SEL: u8;
    const WDT_TO_EN: u8;

    const SUSPEND: u8;
    const SOFTRESET: u8;
}

/// BMA220 register addresses as seen over SPI.
pub struct SpiAddressing;

/// BMA220 register addresses as seen over I2C.
pub struct I2cAddressing;

impl AccelRegisterMap for SpiAddressing {
    const CHIP_ID: u8 = 0x00;
    const REVISION_ID: u8 = 0x01;

    const ACC_X: u8 = 0x02;
    const ACC_Y: u8 = 0x03;
    const ACC_Z: u8 = 0x04;

    const HIGH_DUR: u8 = 0x05;
    const HIGH_HY: u8 = 0x05;
    const HIGH_TH: u8 = 0x06;
    const LOW_TH: u8 = 0x06;
    const LOW_DUR: u8 = 0x07;
    const LOW_HY: u8 = 0x07;

    const TT_DUR: u8 = 0x08;
    const TT_TH: u8 = 0x08;
    const TT_FILT: u8 = 0x08;
    const SLOPE_DUR: u8 = 0x09;
    const SLOPE_TH: u8 = 0x09;
    const SLOPE_FILT: u8 = 0x09;
    const ORIENT_EX: u8 = 0x09;
    const TT_SAMP: u8 = 0x0A;
    const ORIENT_BLOCKING: u8 = 0x0A;
    const TIP_EN: u8 = 0x0A;

    const INT_SIGN: u8 = 0x0B;
    const INT_FIRST_Z: u8 = 0x0B;
    const INT_FIRST_Y: u8 = 0x0B;
    const INT_FIRST_X: u8 = 0x0B;
    const ORIENT: u8 = 0x0B;
    const ORIENT_INT: u8 = 0x0B;
    const SLOPE_INT: u8 = 0x0C;
    const DATA_INT: u8 = 0x0C;
    const HIGH_INT: u8 = 0x0C;
    const LOW_INT: u8 = 0x0C;
    const TT_INT: u8 = 0x0C;

    const EN_TT_Z: u8 = 0x0D;
    const EN_TT_Y: u8 = 0x0D;
    const EN_TT_X: u8 = 0x0D;
    const EN_SLOPE_Z: u8 = 0x0D;
    const EN_SLOPE_Y: u8 = 0x0D;
    const EN_SLOPE_X: u8 = 0x0D;
    const EN_ORIENT: u8 = 0x0D;
    const EN_DATA: u8 = 0x0D;
    const EN_HIGH_Z: u8 = 0x0E;
    const EN_HIGH_Y: u8 = 0x0E;
    const EN_HIGH_X: u8 = 0x0E;
    const EN_LOW: u8 = 0x0E;
    const LAT_INT: u8 = 0x0E;
    const RESET_INT: u8 = 0x0E;

    const EN_Z_CHANNEL: u8 = 0x0F;
    const EN_Y_CHANNEL: u8 = 0x0F;
    const EN_X_CHANNEL: u8 = 0x0F;
    const SLEEP_DUR: u8 = 0x0F;
    const SLEEP_EN: u8 = 0x0F;

    const FILT_CONFIG: u8 = 0x10;
    const SERIAL_HIGH_BW: u8 = 0x10;
    const RANGE: u8 = 0x11;
    const SBIST: u8 = 0x11;
    const SBIST_SIGN: u8 = 0x11;

    const SPI3: u8 = 0x17;
    const WDT_TO_SEL: u8 = 0x17;
    const WDT_TO_EN: u8 = 0x17;

    const SUSPEND: u8 = 0x18;
    const SOFTRESET: u8 = 0x19;
}

impl AccelRegisterMap for I2cAddressing {
    const CHIP_ID: u8 = 0x00;
    const REVISION_ID: u8 = 0x02;

    const ACC_X: u8 = 0x04;
    const ACC_Y: u8 = 0x06;
    const ACC_Z: u8 = 0x08;

    const HIGH_DUR: u8 = 0x0A;
    const HIGH_HY: u8 = 0x0A;
    const HIGH_TH: u8 = 0x0C;
    const LOW_TH: u8 = 0x0C;
    const LOW_DUR: u8 = 0x0E;
    const LOW_HY: u8 = 0x0E;

    const TT_DUR: u8 = 0x10;
    const TT_TH: u8 = 0x10;
    const TT_FILT: u8 = 0x10;
    const SLOPE_DUR: u8 = 0x12;
    const SLOPE_TH: u8 = 0x12;
    const SLOPE_FILT: u8 = 0x12;
    const ORIENT_EX: u8 = 0x12;
    const TT_SAMP: u8 = 0x14;
    const ORIENT_BLOCKING: u8 = 0x14;
    const TIP_EN: u8 = 0x14;

    const INT_SIGN: u8 = 0x16;
    const INT_FIRST_Z: u8 = 0x16;
    const INT_FIRST_Y: u8 = 0x16;
    const INT_FIRST_X: u8 = 0x16;
    const ORIENT: u8 = 0x16;
    const ORIENT_INT: u8 = 0x16;
    const SLOPE_INT: u8 = 0x18;
    const DATA_INT: u8 = 0x18;
    const HIGH_INT: u8 = 0x18;
    const LOW_INT: u8 = 0x18;
    const TT_INT: u8 = 0x18;

    const EN_TT_Z: u8 = 0x1A;
    const EN_TT_Y: u8 = 0x1A;
    const EN_TT_X: u8 = 0x1A;
    const EN_SLOPE_Z: u8 = 0x1A;
    const EN_SLOPE_Y: u8 = 0x1A;
    const EN_SLOPE_X: u8 = 0x1A;
    const EN_ORIENT: u8 = 0x1A;
    const EN_DATA: u8 = 0x1A;
    const EN_HIGH_Z: u8 = 0x1C;
    const EN_HIGH_Y: u8 = 0x1C;
    const EN_HIGH_X: u8 = 0x1C;
    const EN_LOW: u8 = 0x1C;
    const LAT_INT: u8 = 0x1C;
    const RESET_INT: u8 = 0x1C;

    const EN_Z_CHANNEL: u8 = 0x1E;
    const EN_Y_CHANNEL: u8 = 0x1E;
    const EN_X_CHANNEL: u8 = 0x1E;
    const SLEEP_DUR: u8 = 0x1E;
    const SLEEP_EN: u8 = 0x1E;

    const FILT_CONFIG: u8 = 0x20;
    const SERIAL_HIGH_BW: u8 = 0x20;
    const RANGE: u8 = 0x22;
    const SBIST: u8 = 0x22;
    const SBIST_SIGN: u8 = 0x22;

    const SPI3: u8 = 0x2E;
    const WDT_TO_SEL: u8 = 0x2E;
    const WDT_TO_EN: u8 = 0x2E;

    const SUSPEND: u8 = 0x20;
    const SOFTRESET: u8 = 0x32;
}

/// L3G4200D gyroscope register addresses, identical on SPI and I2C.
pub mod gyro {
    pub const WHO_AM_I: u8 = 0x0F;
    pub const CTRL_REG1: u8 = 0x20;
    pub const CTRL_REG2: u8 = 0x21;
    pub const CTRL_REG3: u8 = 0x22;
    pub const CTRL_REG4: u8 = 0x23;
    pub const CTRL_REG5: u8 = 0x24;
    pub const REFERENCE: u8 = 0x25;
    pub const OUT_TEMP: u8 = 0x26;
    pub const STATUS_REG: u8 = 0x27;
    pub const OUT_X_L: u8 = 0x28;
    pub const OUT_X_H: u8 = 0x29;
    pub const OUT_Y_L: u8 = 0x2A;
    pub const OUT_Y_H: u8 = 0x2B;
    pub const OUT_Z_L: u8 = 0x2C;
    pub const OUT_Z_H: u8 = 0x2D;
    pub const FIFO_CTRL_REG: u8 = 0x2E;
    pub const FIFO_SRC_REG: u8 = 0x2F;
    pub const INT1_CFG: u8 = 0x30;
    pub const INT1_SRC: u8 = 0x31;
    pub const INT1_TSH_XH: u8 = 0x32;
    pub const INT1_TSH_XL: u8 = 0x33;
    pub const INT1_TSH_YH: u8 = 0x34;
    pub const INT1_TSH_YL: u8 = 0x35;
    pub const INT1_THS_ZH: u8 = 0x36;
    pub const INT1_THS_ZL: u8 = 0x37;
    pub const INT1_DURATION: u8 = 0x38;
}

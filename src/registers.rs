//! Register map definitions for the ADXL355 accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{
    DataReadyPin, I2cSpeed, InterruptPolarity, MeasureRange, OperatingMode, TemperatureSensor,
};

/// Register address of `DEVID_AD`.
pub const REG_DEVID_AD: u8 = 0x00;
/// Register address of `DEVID_MST`.
pub const REG_DEVID_MST: u8 = 0x01;
/// Register address of `PARTID`.
pub const REG_PARTID: u8 = 0x02;
/// Register address of `REVID`.
pub const REG_REVID: u8 = 0x03;
/// Register address of `STATUS`.
pub const REG_STATUS: u8 = 0x04;
/// Register address of `TEMP2` (bits 11:8 of the temperature word).
pub const REG_TEMP2: u8 = 0x06;
/// Register address of `TEMP1` (bits 7:0 of the temperature word).
pub const REG_TEMP1: u8 = 0x07;
/// Register address of `XDATA3` (X bits 19:12).
pub const REG_XDATA3: u8 = 0x08;
/// Register address of `XDATA2` (X bits 11:4).
pub const REG_XDATA2: u8 = 0x09;
/// Register address of `XDATA1` (X bits 3:0 in the upper nibble).
pub const REG_XDATA1: u8 = 0x0A;
/// Register address of `YDATA3`.
pub const REG_YDATA3: u8 = 0x0B;
/// Register address of `YDATA2`.
pub const REG_YDATA2: u8 = 0x0C;
/// Register address of `YDATA1`.
pub const REG_YDATA1: u8 = 0x0D;
/// Register address of `ZDATA3`.
pub const REG_ZDATA3: u8 = 0x0E;
/// Register address of `ZDATA2`.
pub const REG_ZDATA2: u8 = 0x0F;
/// Register address of `ZDATA1`.
pub const REG_ZDATA1: u8 = 0x10;
/// Register address of `RANGE`.
pub const REG_RANGE: u8 = 0x2C;
/// Register address of `POWER_CTL`.
pub const REG_POWER_CTL: u8 = 0x2D;
/// Register address of `RESET`.
pub const REG_RESET: u8 = 0x2F;

/// Axis data registers in burst order: least significant byte first per axis.
pub const AXIS_READ_SEQUENCE: [u8; 9] = [
    REG_XDATA1, REG_XDATA2, REG_XDATA3,
    REG_YDATA1, REG_YDATA2, REG_YDATA3,
    REG_ZDATA1, REG_ZDATA2, REG_ZDATA3,
];

/// Identification registers in burst order.
pub const ID_READ_SEQUENCE: [u8; 4] = [REG_DEVID_AD, REG_DEVID_MST, REG_PARTID, REG_REVID];

/// Expected content of `DEVID_AD`.
pub const EXPECTED_DEVID_AD: u8 = 0xAD;
/// Expected content of `DEVID_MST`.
pub const EXPECTED_DEVID_MST: u8 = 0x1D;
/// Expected content of `PARTID`.
pub const EXPECTED_PART_ID: u8 = 0xED;

/// Soft reset command value written to the `RESET` register.
pub const RESET_COMMAND: u8 = 0x52;

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Reset value defined by the datasheet.
    const RESET_VALUE: u8;
}

/// Bitfield representation of the `STATUS` register (address `0x04`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // A complete x, y, z measurement is available (bit 0).
    pub data_ready: bool,
    // FIFO watermark reached (bit 1).
    pub fifo_full: bool,
    // FIFO overrun, oldest data lost (bit 2).
    pub fifo_overrun: bool,
    // Activity threshold exceeded (bit 3).
    pub activity: bool,
    // NVM controller busy (bit 4).
    pub nvm_busy: bool,
    #[skip]
    __: B3,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Status> for u8 {
    fn from(value: Status) -> Self {
        value.into_bytes()[0]
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Status {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Status {{ DATA_RDY: {}, FIFO_FULL: {}, FIFO_OVR: {}, ACTIVITY: {}, NVM_BUSY: {} }}",
            self.data_ready(),
            self.fifo_full(),
            self.fifo_overrun(),
            self.activity(),
            self.nvm_busy()
        );
    }
}

/// Bitfield representation of the `RANGE` register (address `0x2C`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    // Full-scale range (bits 1:0).
    pub range: MeasureRange,
    #[skip]
    __: B4,
    // Interrupt polarity (bit 6).
    pub int_pol: InterruptPolarity,
    // I2C speed (bit 7).
    pub i2c_hs: I2cSpeed,
}

impl From<Range> for u8 {
    fn from(value: Range) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `POWER_CTL` register (address `0x2D`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerControl {
    // Standby or measurement mode (bit 0).
    pub standby: OperatingMode,
    // Temperature processing off (bit 1).
    pub temp_off: TemperatureSensor,
    // DRDY output forced low (bit 2).
    pub drdy_off: DataReadyPin,
    #[skip]
    __: B5,
}

impl From<u8> for PowerControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PowerControl> for u8 {
    fn from(value: PowerControl) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for Status {
    const ADDRESS: u8 = REG_STATUS;
    const RESET_VALUE: u8 = 0x00;
}

impl Register for Range {
    const ADDRESS: u8 = REG_RANGE;
    const RESET_VALUE: u8 = 0x81;
}

impl Register for PowerControl {
    const ADDRESS: u8 = REG_POWER_CTL;
    const RESET_VALUE: u8 = 0x01;
}

/// Combines `TEMP2[3:0]` and `TEMP1` into the 12-bit temperature word.
pub fn temperature_word(temp2: u8, temp1: u8) -> u16 {
    (u16::from(temp2 & 0x0F) << 8) | u16::from(temp1)
}

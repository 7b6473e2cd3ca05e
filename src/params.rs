//! Strongly typed parameter enumerations for the ADXL355 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use adxl355::params::{MeasureRange, TemperatureSensor};
//!
//! let range = MeasureRange::G4;
//! assert_eq!(range.g(), 4);
//! let _ = TemperatureSensor::Disabled;
//! ```

use modular_bitfield::prelude::Specifier;

/// Full-scale acceleration range encoded in `RANGE[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum MeasureRange {
    /// ±2 g.
    G2 = 0b01,
    /// ±4 g.
    G4 = 0b10,
    /// ±8 g.
    G8 = 0b11,
}

impl MeasureRange {
    /// Returns the full-scale value in g.
    pub const fn g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
        }
    }

    /// Typical sensitivity expressed in nano-g per LSB.
    pub const fn nano_g_per_lsb(self) -> i64 {
        match self {
            Self::G2 => 3_900,
            Self::G4 => 7_800,
            Self::G8 => 15_600,
        }
    }
}

/// Interrupt pin polarity (`RANGE.INT_POL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum InterruptPolarity {
    /// INT1 and INT2 are active low.
    ActiveLow = 0,
    /// INT1 and INT2 are active high.
    ActiveHigh = 1,
}

/// I2C bus speed selection (`RANGE.I2C_HS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum I2cSpeed {
    /// Fast mode.
    Fast = 0,
    /// High-speed mode.
    HighSpeed = 1,
}

/// Temperature processing selection (`POWER_CTL.TEMP_OFF`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum TemperatureSensor {
    /// Temperature channel sampled alongside the axes.
    Enabled = 0,
    /// Temperature channel off; accelerometer only.
    Disabled = 1,
}

/// Data-ready pin output selection (`POWER_CTL.DRDY_OFF`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum DataReadyPin {
    /// DRDY pin driven by the sample clock.
    Enabled = 0,
    /// DRDY pin forced to 0.
    Disabled = 1,
}

/// Operating mode selection (`POWER_CTL.STANDBY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum OperatingMode {
    /// Continuous measurement.
    Measure = 0,
    /// Standby, no conversions.
    Standby = 1,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_sensitivity_doubles_with_full_scale() {
        assert_eq!(MeasureRange::G2.nano_g_per_lsb() * 2, MeasureRange::G4.nano_g_per_lsb());
        assert_eq!(MeasureRange::G4.nano_g_per_lsb() * 2, MeasureRange::G8.nano_g_per_lsb());
    }

    #[test]
    fn range_encodings_match_datasheet() {
        assert_eq!(MeasureRange::G2 as u8, 0x01);
        assert_eq!(MeasureRange::G4 as u8, 0x02);
        assert_eq!(MeasureRange::G8 as u8, 0x03);
    }
}

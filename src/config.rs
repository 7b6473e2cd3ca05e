//! Configuration primitives for the ADXL355 driver.

use crate::params::{
    DataReadyPin, I2cSpeed, InterruptPolarity, MeasureRange, OperatingMode, TemperatureSensor,
};
use crate::registers::{PowerControl, Range};

/// User-facing configuration for the ADXL355 sensor.
///
/// The default is the accelerometer-only measure mode at ±2 g, which encodes
/// `RANGE = 0x01` and `POWER_CTL = 0x06`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Full-scale measurement range.
    pub range: MeasureRange,
    /// Interrupt pin polarity.
    pub interrupt_polarity: InterruptPolarity,
    /// I2C speed bit of the `RANGE` register.
    pub i2c_speed: I2cSpeed,
    /// Temperature channel selection.
    pub temperature: TemperatureSensor,
    /// Data-ready pin output selection.
    pub data_ready_pin: DataReadyPin,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Encodes the `RANGE` register value.
    pub fn range_register(&self) -> Range {
        Range::new()
            .with_range(self.range)
            .with_int_pol(self.interrupt_polarity)
            .with_i2c_hs(self.i2c_speed)
    }

    /// Encodes the `POWER_CTL` register value with measurement enabled.
    pub fn power_control_register(&self) -> PowerControl {
        PowerControl::new()
            .with_standby(OperatingMode::Measure)
            .with_temp_off(self.temperature)
            .with_drdy_off(self.data_ready_pin)
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the measurement range.
    pub fn range(mut self, range: MeasureRange) -> Self {
        self.config.range = range;
        self
    }

    /// Sets the interrupt polarity.
    pub fn interrupt_polarity(mut self, polarity: InterruptPolarity) -> Self {
        self.config.interrupt_polarity = polarity;
        self
    }

    /// Sets the I2C speed bit.
    pub fn i2c_speed(mut self, speed: I2cSpeed) -> Self {
        self.config.i2c_speed = speed;
        self
    }

    /// Enables or disables the temperature channel.
    pub fn temperature(mut self, temperature: TemperatureSensor) -> Self {
        self.config.temperature = temperature;
        self
    }

    /// Enables or disables the data-ready pin.
    pub fn data_ready_pin(mut self, pin: DataReadyPin) -> Self {
        self.config.data_ready_pin = pin;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            range: MeasureRange::G2,
            interrupt_polarity: InterruptPolarity::ActiveLow,
            i2c_speed: I2cSpeed::Fast,
            temperature: TemperatureSensor::Disabled,
            data_ready_pin: DataReadyPin::Disabled,
        }
    }
}

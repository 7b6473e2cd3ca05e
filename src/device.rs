//! High-level ADXL355 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::Adxl355Interface;
use crate::interface::spi::{SpiInterface, SpiOpen, SpiSettings};
use crate::log;
use crate::params::MeasureRange;
use crate::registers::{
    AXIS_READ_SEQUENCE,
    EXPECTED_DEVID_AD,
    EXPECTED_DEVID_MST,
    EXPECTED_PART_ID,
    ID_READ_SEQUENCE,
    PowerControl,
    REG_RESET,
    REG_TEMP1,
    REG_TEMP2,
    RESET_COMMAND,
    Range,
    Register,
    Status,
    temperature_word,
};
use crate::sample::AxisSample;
use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiDevice;

// Time allowed for the device to reload its defaults after a soft reset (milliseconds).
const RESET_SETTLE_DELAY_MS: u32 = 5;
// Nominal temperature transfer function: 1885 LSB at 25 °C, -9.05 LSB/°C.
const TEMP_INTERCEPT_LSB: f32 = 1885.0;
const TEMP_INTERCEPT_C: f32 = 25.0;
const TEMP_SLOPE_LSB_PER_C: f32 = -9.05;

/// High-level synchronous driver for the ADXL355 accelerometer.
///
/// A value of this type only exists once the device has been put into
/// measurement mode, so every read method returns live data.
pub struct Adxl355<IFACE> {
    interface: IFACE,
    config: Config,
}

impl<IFACE> Adxl355<IFACE> {
    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<SPI> Adxl355<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Wraps an already configured SPI device and initializes the sensor.
    pub fn new_spi(spi: SPI, config: Config) -> Result<Self, SPI::Error> {
        Self::new(SpiInterface::new(spi), config)
    }

    /// Opens the ADXL355 SPI channel through `opener` and initializes the sensor.
    pub fn open_spi<O>(opener: &mut O, config: Config) -> Result<Self, SPI::Error>
    where
        O: SpiOpen<Device = SPI>,
    {
        let settings = SpiSettings::ADXL355;
        log::debug!(
            "opening SPI bus {=u8} cs {=u8} at {=u32} Hz",
            settings.bus,
            settings.chip_select,
            settings.max_clock_hz
        );
        let spi = opener.open(&settings).map_err(Error::BusOpen)?;
        Self::new_spi(spi, config)
    }

    /// Releases the driver, returning the SPI device and configuration.
    pub fn release_spi(self) -> (SPI, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> Adxl355<IFACE>
where
    IFACE: Adxl355Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization ================================================
    // ==================================================================
    /// Creates a driver and enables measurement.
    ///
    /// Writes `RANGE` then `POWER_CTL`. Any bus error aborts construction and is
    /// returned unchanged; nothing is retried.
    pub fn new(interface: IFACE, config: Config) -> Result<Self, CommE> {
        let mut device = Self { interface, config };
        device.apply_config()?;
        Ok(device)
    }

    /// Issues a soft reset, then restores the active configuration.
    pub fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        self.write_register(REG_RESET, RESET_COMMAND)?;
        delay.delay_ms(RESET_SETTLE_DELAY_MS);
        self.apply_config()
    }

    /// Changes the measurement range.
    pub fn set_range(&mut self, range: MeasureRange) -> Result<(), CommE> {
        let mut config = self.config;
        config.range = range;
        self.write_typed(config.range_register())?;
        self.config = config;
        Ok(())
    }

    // ==================================================================
    // == Register Access ===============================================
    // ==================================================================
    /// Writes `value` to the register at `address`.
    pub fn write_register(&mut self, address: u8, value: u8) -> Result<(), CommE> {
        log::trace!("write {=u8:#04x} <- {=u8:#04x}", address, value);
        self.interface
            .write_register(address, value)
            .map_err(Error::from)
    }

    /// Reads the register at `address`.
    pub fn read_register(&mut self, address: u8) -> Result<u8, CommE> {
        self.interface.read_register(address).map_err(Error::from)
    }

    /// Reads `addresses` in one bus transaction, preserving order.
    pub fn read_registers<const N: usize>(&mut self, addresses: &[u8; N]) -> Result<[u8; N], CommE> {
        self.interface
            .read_registers(addresses)
            .map_err(Error::from)
    }

    // ==================================================================
    // == Identification & Status =======================================
    // ==================================================================
    /// Verifies identification registers and returns the revision ID.
    pub fn check_ids(&mut self) -> Result<u8, CommE> {
        let ids = self.read_registers(&ID_READ_SEQUENCE)?;

        if ids[0] != EXPECTED_DEVID_AD
            || ids[1] != EXPECTED_DEVID_MST
            || ids[2] != EXPECTED_PART_ID
        {
            log::debug!("unexpected ids {=u8:#04x} {=u8:#04x} {=u8:#04x}", ids[0], ids[1], ids[2]);
            return Err(Error::DeviceIdMismatch);
        }

        Ok(ids[3])
    }

    /// Reads the `STATUS` register.
    pub fn read_status(&mut self) -> Result<Status, CommE> {
        self.read_typed::<Status>()
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads the current acceleration sample.
    ///
    /// All nine data registers are fetched in a single transaction so the
    /// three axes come from the same conversion. `DATA_RDY` is not polled; the
    /// sample resident in the data registers is returned as is.
    pub fn get_sample(&mut self) -> Result<AxisSample, CommE> {
        let raw = self.read_registers(&AXIS_READ_SEQUENCE)?;
        Ok(AxisSample::from_raw(&raw))
    }

    /// Reads the current acceleration sample scaled to micro-g.
    pub fn get_sample_ug(&mut self) -> Result<[i32; 3], CommE> {
        let range = self.config.range;
        Ok(self.get_sample()?.to_micro_g(range))
    }

    /// Reads the 12-bit temperature word.
    ///
    /// Only updated when [`Config::temperature`] is enabled.
    pub fn read_temperature_raw(&mut self) -> Result<u16, CommE> {
        let [temp2, temp1] = self.read_registers(&[REG_TEMP2, REG_TEMP1])?;
        Ok(temperature_word(temp2, temp1))
    }

    /// Reads the die temperature in degrees Celsius.
    pub fn read_temperature_celsius(&mut self) -> Result<f32, CommE> {
        let raw = self.read_temperature_raw()?;
        Ok((f32::from(raw) - TEMP_INTERCEPT_LSB) / TEMP_SLOPE_LSB_PER_C + TEMP_INTERCEPT_C)
    }

    // ==================================================================
    // == Internal Configuration Helpers =================================
    // ==================================================================
    fn apply_config(&mut self) -> Result<(), CommE> {
        let range: Range = self.config.range_register();
        let power: PowerControl = self.config.power_control_register();

        self.write_typed(range)?;
        self.write_typed(power)?;
        log::debug!("measurement enabled at +/-{=u8} g", self.config.range.g());
        Ok(())
    }

    fn write_typed<R>(&mut self, value: R) -> Result<(), CommE>
    where
        R: Register + Into<u8>,
    {
        self.write_register(R::ADDRESS, value.into())
    }

    fn read_typed<R>(&mut self) -> Result<R, CommE>
    where
        R: Register + From<u8>,
    {
        Ok(R::from(self.read_register(R::ADDRESS)?))
    }
}

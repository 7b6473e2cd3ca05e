//! Error handling primitives for the ADXL355 driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The SPI channel could not be opened or configured.
    BusOpen(E),
    /// Any error reported by the underlying bus interface during a transfer.
    Interface(E),
    /// The identification registers do not match an ADXL355.
    DeviceIdMismatch,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}

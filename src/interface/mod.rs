//! Bus interface abstraction for the ADXL355 driver.

pub mod spi;

/// Abstraction over the low-level register access required by the driver.
pub trait Adxl355Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;

    /// Reads an arbitrary list of registers in a single bus transaction.
    ///
    /// Element `i` of the result holds the content of `registers[i]`.
    /// An empty request (`N == 0`) returns immediately without a bus transaction.
    fn read_registers<const N: usize>(
        &mut self,
        registers: &[u8; N],
    ) -> core::result::Result<[u8; N], Self::Error>;
}

impl<T> Adxl355Interface for &mut T
where
    T: Adxl355Interface,
{
    type Error = T::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        T::write_register(self, register, value)
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        T::read_register(self, register)
    }

    fn read_registers<const N: usize>(
        &mut self,
        registers: &[u8; N],
    ) -> core::result::Result<[u8; N], Self::Error> {
        T::read_registers(self, registers)
    }
}

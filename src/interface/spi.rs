//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.
//!
//! The ADXL355 answers each read command one byte late: while the master shifts
//! out the command for register `n + 1`, the device shifts back the content of
//! register `n`. A burst of N reads therefore costs N + 1 bytes, the first
//! response byte being discarded and the last command byte being a placeholder.

use embedded_hal::spi::{ErrorType, MODE_0, Mode, Operation, SpiDevice};

use super::Adxl355Interface;

/// Placeholder clocked out after the last read command.
pub const DUMMY_BYTE: u8 = 0xAA;

/// Channel parameters the ADXL355 expects from its SPI master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiSettings {
    /// Bus index on the host.
    pub bus: u8,
    /// Chip select line on that bus.
    pub chip_select: u8,
    /// Maximum SCLK frequency in hertz.
    pub max_clock_hz: u32,
    /// Clock polarity and phase.
    pub mode: Mode,
}

impl SpiSettings {
    /// Bus 0, chip select 0, 10 MHz, mode 0.
    pub const ADXL355: Self = Self {
        bus: 0,
        chip_select: 0,
        max_clock_hz: 10_000_000,
        mode: MODE_0,
    };
}

impl Default for SpiSettings {
    fn default() -> Self {
        Self::ADXL355
    }
}

/// Opens and configures SPI channels for the driver.
///
/// Implemented by the application on top of its HAL; the returned device must
/// already run at `settings.max_clock_hz` in `settings.mode`.
pub trait SpiOpen {
    /// Configured device handle.
    type Device: SpiDevice;

    /// Opens the channel described by `settings`.
    fn open(
        &mut self,
        settings: &SpiSettings,
    ) -> core::result::Result<Self::Device, <Self::Device as ErrorType>::Error>;
}

/// SPI-based interface implementation for the ADXL355 driver.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Builds the command byte used to address registers over SPI.
    pub const fn command_byte(register: u8, is_read: bool) -> u8 {
        let mut command = (register & 0x7F) << 1;
        if is_read {
            command |= 0x01;
        }
        command
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Adxl355Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        let frame = [Self::command_byte(register, false), value];
        self.spi.write(&frame)
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let [value] = self.read_registers(&[register])?;
        Ok(value)
    }

    fn read_registers<const N: usize>(
        &mut self,
        registers: &[u8; N],
    ) -> core::result::Result<[u8; N], Self::Error> {
        let Some((&first, rest)) = registers.split_first() else {
            return Ok([0u8; N]);
        };

        // The tail of the frame is shifted in place: commands for registers
        // 1..N followed by the placeholder. Its response lines up with `registers`.
        let command = [Self::command_byte(first, true)];
        let mut buf = [DUMMY_BYTE; N];
        for (slot, &register) in buf.iter_mut().zip(rest) {
            *slot = Self::command_byte(register, true);
        }

        let mut operations = [Operation::Write(&command), Operation::TransferInPlace(&mut buf)];
        self.spi.transaction(&mut operations)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::{DUMMY_BYTE, SpiInterface};
    use crate::interface::Adxl355Interface;
    use embedded_hal::spi::{ErrorKind, ErrorType, Operation, SpiDevice};

    /// Records the full wire frame of each transaction and answers with a
    /// canned response, mimicking a full-duplex exchange.
    struct MockDevice<'a> {
        expectations: &'a [TransactionExpectation<'a>],
        index: usize,
    }

    impl<'a> MockDevice<'a> {
        fn new(expectations: &'a [TransactionExpectation<'a>]) -> Self {
            Self { expectations, index: 0 }
        }
    }

    impl<'a> Drop for MockDevice<'a> {
        fn drop(&mut self) {
            assert_eq!(
                self.index,
                self.expectations.len(),
                "not all SPI expectations consumed"
            );
        }
    }

    impl<'a> ErrorType for MockDevice<'a> {
        type Error = ErrorKind;
    }

    impl<'a> SpiDevice for MockDevice<'a> {
        fn transaction<'b>(
            &mut self,
            operations: &mut [Operation<'b, u8>],
        ) -> Result<(), Self::Error> {
            let expected = self
                .expectations
                .get(self.index)
                .expect("unexpected SPI transaction");
            self.index += 1;

            let TransactionExpectation::Exchange { sent, response } = *expected else {
                return Err(ErrorKind::Other);
            };

            let mut wire = 0usize;
            for operation in operations.iter_mut() {
                match operation {
                    Operation::Write(data) => {
                        assert_eq!(*data, &sent[wire..wire + data.len()], "write mismatch");
                        wire += data.len();
                    }
                    Operation::TransferInPlace(buf) => {
                        let len = buf.len();
                        assert_eq!(&buf[..], &sent[wire..wire + len], "transfer mismatch");
                        buf.copy_from_slice(&response[wire..wire + len]);
                        wire += len;
                    }
                    _ => panic!("unexpected operation"),
                }
            }
            assert_eq!(wire, sent.len(), "frame length mismatch");

            Ok(())
        }
    }

    #[derive(Clone, Copy)]
    enum TransactionExpectation<'a> {
        Exchange { sent: &'a [u8], response: &'a [u8] },
        Fail,
    }

    #[test]
    fn command_byte_sets_read_bit() {
        for register in 0u8..0x80 {
            assert_eq!(SpiInterface::<()>::command_byte(register, false), register << 1);
            assert_eq!(SpiInterface::<()>::command_byte(register, true), (register << 1) | 1);
        }
    }

    #[test]
    fn write_register_sends_two_byte_frame() {
        let expectations = [TransactionExpectation::Exchange {
            sent: &[0x58, 0x01],
            response: &[0x00, 0x00],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        interface.write_register(0x2C, 0x01).unwrap();
    }

    #[test]
    fn read_register_returns_second_response_byte() {
        let expectations = [TransactionExpectation::Exchange {
            sent: &[0x09, DUMMY_BYTE],
            response: &[0x77, 0xAD],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        assert_eq!(interface.read_register(0x04).unwrap(), 0xAD);
    }

    #[test]
    fn read_registers_batches_commands_and_drops_first_response() {
        let expectations = [TransactionExpectation::Exchange {
            sent: &[0x15, 0x13, 0x11, DUMMY_BYTE],
            response: &[0xFF, 0x10, 0x20, 0x30],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        let values = interface.read_registers(&[0x0A, 0x09, 0x08]).unwrap();
        assert_eq!(values, [0x10, 0x20, 0x30]);
    }

    #[test]
    fn read_registers_ignores_empty_request() {
        let expectations: [TransactionExpectation; 0] = [];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        assert_eq!(interface.read_registers(&[]).unwrap(), []);
    }

    #[test]
    fn transfer_errors_propagate() {
        let expectations = [TransactionExpectation::Fail];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        assert_eq!(interface.read_register(0x00), Err(ErrorKind::Other));
    }
}

use avr_device::atmega128a::USART0;
use core::convert::Infallible;

use embedded_hal::serial::Write;
use ufmt::uWrite;

use crate::hal::Uart;

/// Text console on USART0, the sink behind the firmware's `Logger`
pub struct SerialConsole {
    uart: Uart,
}

impl SerialConsole {
    pub fn new(usart: USART0) -> Self {
        Self {
            uart: Uart::new(usart),
        }
    }

    pub fn write_byte(&mut self, byte: u8) {
        let _ = nb::block!(self.uart.write(byte));
    }
}

impl uWrite for SerialConsole {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}

use avr_device::atmega128a::USART0;
use core::convert::Infallible;

use crate::config::{CPU_FREQ_HZ, UART_BAUD};
use crate::timing::ubrr;

const UDRE: u8 = 1 << 5;
const TXEN: u8 = 1 << 3;
// Asynchronous, no parity, 1 stop bit, 8 data bits
const FRAME_8N1: u8 = 0x06;

/// Polled, transmit-only USART0
pub struct Uart {
    usart: USART0,
}

impl Uart {
    pub fn new(usart: USART0) -> Self {
        let divisor = ubrr(CPU_FREQ_HZ, UART_BAUD);
        usart.ubrr0h.write(|w| unsafe { w.bits((divisor >> 8) as u8) });
        usart.ubrr0l.write(|w| unsafe { w.bits(divisor as u8) });
        usart.ucsr0c.write(|w| unsafe { w.bits(FRAME_8N1) });
        usart.ucsr0b.write(|w| unsafe { w.bits(TXEN) });
        Self { usart }
    }
}

impl embedded_hal::serial::Write<u8> for Uart {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if self.usart.ucsr0a.read().bits() & UDRE == 0 {
            return Err(nb::Error::WouldBlock);
        }
        self.usart.udr0.write(|w| unsafe { w.bits(byte) });
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        if self.usart.ucsr0a.read().bits() & UDRE == 0 {
            Err(nb::Error::WouldBlock)
        } else {
            Ok(())
        }
    }
}

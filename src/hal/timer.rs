use avr_device::atmega128a::{TC0, TC1};
use avr_device::interrupt::{self, Mutex};
use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;

use crate::timing::Prescaler;

// Timer0 clock select for clk/64 (the 8-bit async timer has its own table)
const TC0_DIV64: u8 = 0x04;
// 16MHz / 64 = 250kHz, 250 ticks = 1ms
const TICKS_PER_MS: u8 = 250;

const TOIE1: u8 = 1 << 2;

/// Blocking millisecond delay polling Timer0
pub struct Delay {
    tc0: TC0,
}

impl Delay {
    pub fn new(tc0: TC0) -> Self {
        // Normal mode, clock stopped
        tc0.tccr0.write(|w| unsafe { w.bits(0) });
        tc0.tcnt0.write(|w| unsafe { w.bits(0) });
        Self { tc0 }
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        self.tc0.tcnt0.write(|w| unsafe { w.bits(0) });
        self.tc0.tccr0.write(|w| unsafe { w.bits(TC0_DIV64) });

        for _ in 0..ms {
            while self.tc0.tcnt0.read().bits() < TICKS_PER_MS {}
            self.tc0.tcnt0.write(|w| unsafe { w.bits(0) });
        }

        self.tc0.tccr0.write(|w| unsafe { w.bits(0) });
    }
}

impl DelayMs<u8> for Delay {
    fn delay_ms(&mut self, ms: u8) {
        DelayMs::<u16>::delay_ms(self, ms as u16);
    }
}

// Timer1 overflows seen by the interrupt handler since the last `take_overflows`
static OVERFLOWS: Mutex<Cell<u16>> = Mutex::new(Cell::new(0));

/// Timer1 in normal mode with the overflow interrupt enabled
pub struct OverflowTimer {
    tc1: TC1,
}

impl OverflowTimer {
    pub fn new(tc1: TC1, prescaler: Prescaler, preload: u16) -> Self {
        tc1.tccr1a.write(|w| unsafe { w.bits(0) });
        tc1.tcnt1.write(|w| unsafe { w.bits(preload) });
        tc1.tccr1b.write(|w| unsafe { w.bits(prescaler.bits()) });
        tc1.timsk.modify(|r, w| unsafe { w.bits(r.bits() | TOIE1) });
        Self { tc1 }
    }

    pub fn set_counter(&mut self, value: u16) {
        self.tc1.tcnt1.write(|w| unsafe { w.bits(value) });
    }

    pub fn stop(&mut self) {
        self.tc1.timsk.modify(|r, w| unsafe { w.bits(r.bits() & !TOIE1) });
        self.tc1.tccr1b.write(|w| unsafe { w.bits(0) });
    }
}

/// Body of the TIMER1_OVF handler. A non-zero `preload` is written back to
/// TCNT1 to shorten the next period.
#[inline]
pub fn handle_overflow(preload: u16) {
    interrupt::free(|cs| {
        let count = OVERFLOWS.borrow(cs);
        count.set(count.get().wrapping_add(1));
    });
    if preload != 0 {
        // SAFETY: single 16-bit write from the handler; the main loop only
        // writes TCNT1 while waiting for this very overflow
        unsafe { (*TC1::ptr()).tcnt1.write(|w| w.bits(preload)) };
    }
}

/// Read and clear the overflow count
pub fn take_overflows() -> u16 {
    interrupt::free(|cs| OVERFLOWS.borrow(cs).replace(0))
}

/// Clear the overflow count without reading it
pub fn clear_overflows() {
    interrupt::free(|cs| OVERFLOWS.borrow(cs).set(0));
}

/// `WouldBlock` until at least `min` overflows were counted, then the count
pub fn wait_overflows(min: u16) -> nb::Result<u16, Infallible> {
    interrupt::free(|cs| {
        let count = OVERFLOWS.borrow(cs).get();
        if count >= min {
            Ok(count)
        } else {
            Err(nb::Error::WouldBlock)
        }
    })
}

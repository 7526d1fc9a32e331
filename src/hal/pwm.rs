//! Timer1 fast PWM on OC1A (PB5)
//!
//! Mode 14 (WGM13:0 = 1110) takes TOP from ICR1, so the PWM frequency and the
//! duty resolution are both set by the channel's TOP value:
//! `f = 16MHz / (N * (ICR1 + 1))`.

use avr_device::atmega128a::TC1;

use crate::channel::PwmOutput;
use crate::hal::gpio::board::Led;
use crate::timing::Prescaler;

const COM1A1: u8 = 1 << 7;
const COM1A_MASK: u8 = 0b11 << 6;
const WGM11: u8 = 1 << 1;
const WGM12: u8 = 1 << 3;
const WGM13: u8 = 1 << 4;

pub struct Timer1Pwm {
    tc1: TC1,
    _pin: Led,
    prescaler: Prescaler,
}

impl Timer1Pwm {
    /// Take Timer1 and its output pin; the timer stays stopped until enabled
    pub fn new(tc1: TC1, pin: Led, prescaler: Prescaler) -> Self {
        tc1.tccr1b.write(|w| unsafe { w.bits(0) });
        tc1.tccr1a.write(|w| unsafe { w.bits(WGM11) });
        tc1.tcnt1.write(|w| unsafe { w.bits(0) });

        Self {
            tc1,
            _pin: pin,
            prescaler,
        }
    }
}

impl PwmOutput for Timer1Pwm {
    fn set_top(&mut self, top: u16) {
        self.tc1.icr1.write(|w| unsafe { w.bits(top) });
    }

    fn set_compare(&mut self, duty: u16) {
        self.tc1.ocr1a.write(|w| unsafe { w.bits(duty) });
    }

    fn enable(&mut self) {
        // Clear OC1A on compare match, set at TOP
        self.tc1
            .tccr1a
            .modify(|r, w| unsafe { w.bits((r.bits() & !COM1A_MASK) | COM1A1 | WGM11) });
        self.tc1
            .tccr1b
            .write(|w| unsafe { w.bits(WGM13 | WGM12 | self.prescaler.bits()) });
    }

    fn disable(&mut self) {
        // Disconnect OC1A so PORTB drives the pin again, then stop the clock
        self.tc1
            .tccr1a
            .modify(|r, w| unsafe { w.bits(r.bits() & !COM1A_MASK) });
        self.tc1.tccr1b.write(|w| unsafe { w.bits(WGM13 | WGM12) });
    }
}

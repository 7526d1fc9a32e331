use avr_device::atmega128a::PORTB;
use core::convert::Infallible;
use core::marker::PhantomData;

use embedded_hal::digital::v2::{OutputPin, StatefulOutputPin, ToggleableOutputPin};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// One PORTB pin in the given mode
pub struct Pin<const P: u8, MODE> {
    _mode: PhantomData<MODE>,
}

/// PORTB split into the pins the demos use
pub struct Pins {
    pub pb5: Pin<5, Input>,
}

impl Pins {
    pub fn new(_portb: PORTB) -> Self {
        Self {
            pb5: Pin { _mode: PhantomData },
        }
    }
}

#[inline]
fn portb() -> &'static avr_device::atmega128a::portb::RegisterBlock {
    // SAFETY: PORTB was moved into `Pins::new`, so only pins touch it from here
    unsafe { &*PORTB::ptr() }
}

impl<const P: u8, MODE: PinMode> Pin<P, MODE> {
    pub fn into_output(self) -> Pin<P, Output> {
        // Drive low before switching DDRx, so the LED does not flash
        portb().portb.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << P)) });
        portb().ddrb.modify(|r, w| unsafe { w.bits(r.bits() | (1 << P)) });
        Pin { _mode: PhantomData }
    }
}

impl<const P: u8> Pin<P, Output> {
    #[inline]
    pub fn set_high(&mut self) {
        portb().portb.modify(|r, w| unsafe { w.bits(r.bits() | (1 << P)) });
    }

    #[inline]
    pub fn set_low(&mut self) {
        portb().portb.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << P)) });
    }

    /// The ATmega128 has no PINx toggle, so this is a read-modify-write of PORTB
    #[inline]
    pub fn toggle(&mut self) {
        portb().portb.modify(|r, w| unsafe { w.bits(r.bits() ^ (1 << P)) });
    }

    #[inline]
    pub fn is_set_high(&self) -> bool {
        portb().portb.read().bits() & (1 << P) != 0
    }
}

impl<const P: u8> OutputPin for Pin<P, Output> {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Infallible> {
        Pin::set_high(self);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        Pin::set_low(self);
        Ok(())
    }
}

impl<const P: u8> StatefulOutputPin for Pin<P, Output> {
    fn is_set_high(&self) -> Result<bool, Infallible> {
        Ok(Pin::is_set_high(self))
    }

    fn is_set_low(&self) -> Result<bool, Infallible> {
        Ok(!Pin::is_set_high(self))
    }
}

impl<const P: u8> ToggleableOutputPin for Pin<P, Output> {
    type Error = Infallible;

    fn toggle(&mut self) -> Result<(), Infallible> {
        Pin::toggle(self);
        Ok(())
    }
}

pub mod board {
    use super::*;

    /// LED on PB5, which doubles as the Timer1 OC1A output
    pub type Led = Pin<5, Output>;
}

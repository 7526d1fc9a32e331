//! Heartbeat firmware for the ATmega128
//!
//! LED exercises on PB5: software blinking, timer interrupts, clock division,
//! hardware PWM, and a fading heartbeat built from linear intensity ramps.
//! Everything outside `hal` and `drivers` is plain arithmetic over the
//! `PwmOutput`, `OutputPin` and `DelayMs` seams and is tested on the host.

#![cfg_attr(not(test), no_std)]

pub mod blink;
pub mod channel;
pub mod config;
pub mod error;
pub mod heartbeat;
pub mod logger;
pub mod pulse;
pub mod ramp;
pub mod timing;

#[cfg(target_arch = "avr")]
pub mod drivers;
#[cfg(target_arch = "avr")]
pub mod hal;

#[cfg(test)]
mod testing;

pub use channel::{HardwareChannel, PwmOutput};
pub use error::Error;
pub use heartbeat::Heartbeat;
pub use logger::{Level, Logger};
pub use ramp::{Ramp, Steps};

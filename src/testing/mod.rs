//! Host-side fakes for the hardware seams

use core::convert::Infallible;
use std::string::String;
use std::vec::Vec;

use embedded_hal::blocking::delay::DelayMs;
use ufmt::uWrite;

use crate::channel::PwmOutput;

/// Register writes seen by a [`FakePwm`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Top(u16),
    Duty(u16),
    Enable,
    Disable,
}

/// Records every register write instead of touching Timer1
#[derive(Default, Debug)]
pub struct FakePwm {
    pub ops: Vec<Op>,
}

impl FakePwm {
    pub fn duties(&self) -> Vec<u16> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Duty(d) => Some(*d),
                _ => None,
            })
            .collect()
    }
}

impl PwmOutput for FakePwm {
    fn set_top(&mut self, top: u16) {
        self.ops.push(Op::Top(top));
    }

    fn set_compare(&mut self, duty: u16) {
        self.ops.push(Op::Duty(duty));
    }

    fn enable(&mut self) {
        self.ops.push(Op::Enable);
    }

    fn disable(&mut self) {
        self.ops.push(Op::Disable);
    }
}

/// Fake clock: keeps the requested durations and returns at once
#[derive(Default, Debug)]
pub struct RecordingDelay {
    pub waits: Vec<u16>,
}

impl RecordingDelay {
    pub fn total_ms(&self) -> u32 {
        self.waits.iter().map(|&ms| ms as u32).sum()
    }
}

impl DelayMs<u16> for RecordingDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.waits.push(ms);
    }
}

/// Console stand-in that collects everything written to it
#[derive(Default, Debug)]
pub struct Transcript {
    pub text: String,
}

impl uWrite for Transcript {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.text.push_str(s);
        Ok(())
    }
}

//! Fixed hardware PWM patterns: the duty staircase and the asymmetric pulse

use embedded_hal::blocking::delay::DelayMs;

use crate::channel::{HardwareChannel, PwmOutput};
use crate::ramp::Steps;

/// Duty percentages visited by the staircase, dark to full
pub const STAIRCASE: [u8; 5] = [0, 25, 50, 75, 100];

/// Walk through [`STAIRCASE`], holding each level for `hold_ms`
pub fn staircase<O, D>(channel: &mut HardwareChannel<O>, delay: &mut D, hold_ms: u16)
where
    O: PwmOutput,
    D: DelayMs<u16>,
{
    for &percent in STAIRCASE.iter() {
        channel.set_percent(percent);
        delay.delay_ms(hold_ms);
    }
}

/// Fast-rise, slow-fall pulse in 1% increments.
///
/// The rise writes `steps + 1` levels from 0% to 100%; the fall writes
/// `steps` levels from just below 100% down to 0%, so the peak is not repeated.
#[derive(Clone, Copy, Debug)]
pub struct Pulse {
    pub rise_ms: u16,
    pub fall_ms: u16,
    pub steps: Steps,
}

impl Pulse {
    pub const fn new(rise_ms: u16, fall_ms: u16, steps: Steps) -> Self {
        Self {
            rise_ms,
            fall_ms,
            steps,
        }
    }

    fn percent(&self, step: u16) -> u8 {
        (step as u32 * 100 / self.steps.get() as u32) as u8
    }

    /// Play one rise and one fall
    pub fn run<O, D>(&self, channel: &mut HardwareChannel<O>, delay: &mut D)
    where
        O: PwmOutput,
        D: DelayMs<u16>,
    {
        let steps = self.steps.get();
        let rise_slice = self.rise_ms / steps;
        let fall_slice = self.fall_ms / steps;

        for step in 0..=steps {
            channel.set_percent(self.percent(step));
            delay.delay_ms(rise_slice);
        }

        for step in (1..=steps).rev() {
            channel.set_percent(self.percent(step - 1));
            delay.delay_ms(fall_slice);
        }
    }
}

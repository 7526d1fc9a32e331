//! Linear intensity ramps on a PWM channel
//!
//! A ramp walks from one intensity to another in `steps` equal time slices,
//! writing `steps + 1` duty samples (both endpoints included). All arithmetic
//! is integer and truncating:
//!
//! ```text
//! intensity(i) = start + (end - start) * i / steps
//! capped(i)    = intensity(i) * cap / 100
//! duty(i)      = capped(i) * top / 100          (clamped to [0, top])
//! ```
//!
//! The time slice is `duration / steps`; a duration shorter than the step
//! count yields a slice of 0 and the samples go out back to back.

use core::num::NonZeroU16;

use embedded_hal::blocking::delay::DelayMs;

use crate::channel::{HardwareChannel, PwmOutput};
use crate::config::RAMP_STEPS;
use crate::error::Error;

/// Number of time slices a ramp is divided into
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Steps(NonZeroU16);

impl Steps {
    pub const DEFAULT: Steps = match NonZeroU16::new(RAMP_STEPS) {
        Some(n) => Steps(n),
        None => panic!("RAMP_STEPS must be non-zero"),
    };

    pub fn new(steps: u16) -> Result<Self, Error> {
        NonZeroU16::new(steps).map(Steps).ok_or(Error::ZeroSteps)
    }

    #[inline]
    pub fn get(self) -> u16 {
        self.0.get()
    }
}

impl Default for Steps {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One ramp request; intensities and cap are percentages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ramp {
    pub start: u8,
    pub end: u8,
    pub duration_ms: u16,
    pub cap: u8,
}

impl Ramp {
    /// Uncapped ramp (cap 100%)
    pub const fn new(start: u8, end: u8, duration_ms: u16) -> Self {
        Self {
            start,
            end,
            duration_ms,
            cap: 100,
        }
    }

    /// Same ramp scaled down by `cap` percent (clamped to 100)
    pub const fn with_cap(self, cap: u8) -> Self {
        Self {
            cap: if cap > 100 { 100 } else { cap },
            ..self
        }
    }

    #[inline]
    pub fn slice_ms(&self, steps: Steps) -> u16 {
        self.duration_ms / steps.get()
    }

    /// Interpolated intensity (percent, before capping) at `step`
    pub fn intensity(&self, step: u16, steps: Steps) -> i32 {
        let start = self.start as i32;
        let delta = self.end as i32 - start;
        start + delta * step as i32 / steps.get() as i32
    }

    /// Duty register value at `step` for a channel with the given TOP
    pub fn duty(&self, step: u16, steps: Steps, top: u16) -> u16 {
        let cap = self.cap.min(100) as i32;
        let capped = self.intensity(step, steps) * cap / 100;
        let duty = capped * top as i32 / 100;
        duty.clamp(0, top as i32) as u16
    }

    /// Duty samples in the order they are written
    pub fn samples(&self, top: u16, steps: Steps) -> Samples {
        Samples {
            ramp: *self,
            top,
            steps,
            next: 0,
        }
    }

    /// Play the ramp: write each sample, then block for one slice
    pub fn run<O, D>(&self, channel: &mut HardwareChannel<O>, delay: &mut D, steps: Steps)
    where
        O: PwmOutput,
        D: DelayMs<u16>,
    {
        let slice = self.slice_ms(steps);
        for duty in self.samples(channel.top(), steps) {
            channel.set_duty(duty);
            delay.delay_ms(slice);
        }
    }
}

/// Iterator over the `steps + 1` duty samples of a ramp
pub struct Samples {
    ramp: Ramp,
    top: u16,
    steps: Steps,
    next: u32,
}

impl Iterator for Samples {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        if self.next > self.steps.get() as u32 {
            return None;
        }
        let duty = self.ramp.duty(self.next as u16, self.steps, self.top);
        self.next += 1;
        Some(duty)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.steps.get() as u32 + 1).saturating_sub(self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Samples {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakePwm, RecordingDelay};
    use std::vec::Vec;

    fn steps(n: u16) -> Steps {
        Steps::new(n).unwrap()
    }

    #[test]
    fn zero_steps_is_rejected() {
        assert_eq!(Steps::new(0), Err(Error::ZeroSteps));
        assert_eq!(Steps::default().get(), 50);
    }

    #[test]
    fn endpoints_match_scaled_start_and_end() {
        for &top in &[1u16, 255, 999, 1999, u16::MAX] {
            for &(start, end) in &[(0u8, 100u8), (100, 0), (0, 50), (50, 0), (37, 91), (20, 20)] {
                for &cap in &[0u8, 1, 33, 75, 100] {
                    let ramp = Ramp::new(start, end, 400).with_cap(cap);
                    let duties: Vec<u16> = ramp.samples(top, Steps::DEFAULT).collect();

                    let expect = |p: u8| (p as u32 * cap as u32 / 100 * top as u32 / 100) as u16;
                    assert_eq!(duties.len(), 51);
                    assert_eq!(duties[0], expect(start), "{:?} top {}", ramp, top);
                    assert_eq!(duties[50], expect(end), "{:?} top {}", ramp, top);
                }
            }
        }
    }

    #[test]
    fn rising_ramp_on_heartbeat_channel() {
        let duties: Vec<u16> = Ramp::new(0, 100, 100).samples(999, Steps::DEFAULT).collect();
        assert_eq!(&duties[..4], [0, 19, 39, 59]);
        assert_eq!(duties[25], 499);
        assert_eq!(duties[50], 999);
        assert!(duties.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn falling_interpolation_truncates_toward_zero() {
        let ramp = Ramp::new(50, 0, 30);
        let s = steps(3);
        assert_eq!(ramp.intensity(0, s), 50);
        assert_eq!(ramp.intensity(1, s), 34);
        assert_eq!(ramp.intensity(2, s), 17);
        assert_eq!(ramp.intensity(3, s), 0);

        let duties: Vec<u16> = ramp.samples(100, s).collect();
        assert_eq!(duties, [50, 34, 17, 0]);
    }

    #[test]
    fn cap_above_hundred_is_clamped() {
        assert_eq!(Ramp::new(0, 100, 100).with_cap(250).cap, 100);

        let raw = Ramp {
            start: 0,
            end: 100,
            duration_ms: 100,
            cap: 250,
        };
        let clamped: Vec<u16> = raw.samples(999, steps(10)).collect();
        let full: Vec<u16> = Ramp::new(0, 100, 100).samples(999, steps(10)).collect();
        assert_eq!(clamped, full);
    }

    #[test]
    fn zero_cap_is_dark() {
        let ramp = Ramp::new(0, 100, 100).with_cap(0);
        assert!(ramp.samples(999, Steps::DEFAULT).all(|d| d == 0));
    }

    #[test]
    fn run_writes_every_sample_then_waits_one_slice() {
        let mut channel = HardwareChannel::new(FakePwm::default(), 999).unwrap();
        let mut delay = RecordingDelay::default();
        let ramp = Ramp::new(100, 0, 400).with_cap(50);

        ramp.run(&mut channel, &mut delay, Steps::DEFAULT);

        assert_eq!(channel.duty(), 0);
        let written = channel.release().duties();
        let expected: Vec<u16> = ramp.samples(999, Steps::DEFAULT).collect();
        assert_eq!(&written[1..], &expected[..]);
        assert_eq!(written[1], 499);
        assert_eq!(delay.waits, [8u16; 51]);
    }

    #[test]
    fn short_duration_truncates_slice_to_zero() {
        let mut channel = HardwareChannel::new(FakePwm::default(), 999).unwrap();
        let mut delay = RecordingDelay::default();

        Ramp::new(0, 100, 30).run(&mut channel, &mut delay, Steps::DEFAULT);

        assert_eq!(delay.waits.len(), 51);
        assert_eq!(delay.total_ms(), 0);
        assert_eq!(channel.duty(), 999);
    }

    #[test]
    fn duration_remainder_is_dropped() {
        let ramp = Ramp::new(0, 100, 130);
        assert_eq!(ramp.slice_ms(Steps::DEFAULT), 2);
        assert_eq!(ramp.slice_ms(steps(7)), 18);
    }

    #[test]
    fn sample_count_is_exact() {
        let samples = Ramp::new(0, 100, 100).samples(999, steps(4));
        assert_eq!(samples.len(), 5);
        assert_eq!(Ramp::new(0, 100, 100).samples(999, steps(u16::MAX)).count(), 65536);
    }
}

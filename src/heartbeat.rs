//! Lub-dub heartbeat built from intensity ramps, and its fading variant

use embedded_hal::blocking::delay::DelayMs;
use ufmt::uWrite;

use crate::channel::{HardwareChannel, PwmOutput};
use crate::config::HEARTBEAT_REST_MS;
use crate::logger::{Level, Logger};
use crate::ramp::{Ramp, Steps};

/// Ramp phases of one beat: strong contraction, release, weak contraction, release
pub const LUB_DUB: [Ramp; 4] = [
    Ramp::new(0, 100, 100),
    Ramp::new(100, 0, 400),
    Ramp::new(0, 50, 100),
    Ramp::new(50, 0, 400),
];

/// Cap of beat `beat` when fading linearly from 100% to 0% over `num_beats`.
/// Callers must pass `num_beats >= 2` and `beat < num_beats`.
pub fn decay_cap(beat: u16, num_beats: u16) -> u8 {
    let last = (num_beats - 1) as u32;
    ((last - beat as u32) * 100 / last) as u8
}

/// Per-beat caps of a fading heartbeat. Fewer than two beats fall back to a
/// single beat at full intensity.
pub fn decay_caps(num_beats: u16) -> DecayCaps {
    DecayCaps { beat: 0, num_beats }
}

pub struct DecayCaps {
    beat: u16,
    num_beats: u16,
}

impl Iterator for DecayCaps {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.num_beats < 2 {
            if self.beat > 0 {
                return None;
            }
            self.beat = 1;
            return Some(100);
        }
        if self.beat >= self.num_beats {
            return None;
        }
        let cap = decay_cap(self.beat, self.num_beats);
        self.beat += 1;
        Some(cap)
    }
}

/// Drives a heartbeat pattern on one PWM channel.
///
/// The sequencer is the single writer of the channel; it blocks on `delay`
/// for the whole length of every pattern.
pub struct Heartbeat<O, D> {
    channel: HardwareChannel<O>,
    delay: D,
    steps: Steps,
}

impl<O, D> Heartbeat<O, D>
where
    O: PwmOutput,
    D: DelayMs<u16>,
{
    pub fn new(channel: HardwareChannel<O>, delay: D) -> Self {
        Self {
            channel,
            delay,
            steps: Steps::DEFAULT,
        }
    }

    pub fn with_steps(mut self, steps: Steps) -> Self {
        self.steps = steps;
        self
    }

    pub fn channel(&self) -> &HardwareChannel<O> {
        &self.channel
    }

    pub fn channel_mut(&mut self) -> &mut HardwareChannel<O> {
        &mut self.channel
    }

    /// One lub-dub at `cap` percent (clamped to 100), followed by the rest
    pub fn beat_once(&mut self, cap: u8) {
        self.lub_dub(cap.min(100));
        self.delay.delay_ms(HEARTBEAT_REST_MS);
    }

    /// Two lub-dubs at full intensity separated by one rest. Called in a
    /// loop, the second beat runs straight into the next cycle's first one.
    pub fn double_beat(&mut self) {
        self.lub_dub(100);
        self.delay.delay_ms(HEARTBEAT_REST_MS);
        self.lub_dub(100);
    }

    /// Play `num_beats` beats with the cap falling linearly from 100% to 0%,
    /// then switch the output off. Fewer than two beats play a single full
    /// beat and return without the final write.
    pub fn weaken<W: uWrite>(&mut self, num_beats: u16, log: &mut Logger<W>) {
        if num_beats < 2 {
            log.debug("single beat");
            self.beat_once(100);
            return;
        }

        for cap in decay_caps(num_beats) {
            log.value(Level::Debug, "cap", &cap);
            self.beat_once(cap);
        }
        self.channel.off();
    }

    /// Block for `ms` with the output left as it is
    pub fn hold(&mut self, ms: u16) {
        self.delay.delay_ms(ms);
    }

    pub fn release(self) -> (HardwareChannel<O>, D) {
        (self.channel, self.delay)
    }

    fn lub_dub(&mut self, cap: u8) {
        for phase in LUB_DUB.iter() {
            phase
                .with_cap(cap)
                .run(&mut self.channel, &mut self.delay, self.steps);
        }
    }
}

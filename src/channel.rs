//! PWM output channel with a clamped duty register
//!
//! `HardwareChannel` owns one PWM-capable output together with its TOP value
//! and the last duty written to it. Every write goes through here, so the duty
//! can never exceed TOP, including while TOP itself is being lowered.

use crate::error::Error;

/// Register-level access to one PWM output (e.g. Timer1 OC1A with TOP in ICR1)
pub trait PwmOutput {
    /// Write the counter value that ends a PWM period
    fn set_top(&mut self, top: u16);
    /// Write the compare value that ends the high phase
    fn set_compare(&mut self, duty: u16);
    fn enable(&mut self);
    fn disable(&mut self);
}

pub struct HardwareChannel<O> {
    output: O,
    top: u16,
    duty: u16,
    enabled: bool,
}

impl<O: PwmOutput> HardwareChannel<O> {
    /// Set up the output with the given TOP, duty 0, and enable it
    pub fn new(mut output: O, top: u16) -> Result<Self, Error> {
        if top == 0 {
            return Err(Error::ZeroTop);
        }

        output.set_compare(0);
        output.set_top(top);
        output.enable();

        Ok(Self {
            output,
            top,
            duty: 0,
            enabled: true,
        })
    }

    #[inline]
    pub fn top(&self) -> u16 {
        self.top
    }

    #[inline]
    pub fn duty(&self) -> u16 {
        self.duty
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Write a raw duty value, clamped to TOP
    pub fn set_duty(&mut self, duty: u16) {
        self.write(duty);
    }

    /// Write `top * percent / 100`, percent clamped to 100
    pub fn set_percent(&mut self, percent: u8) {
        let percent = percent.min(100) as u32;
        self.write((self.top as u32 * percent / 100) as u16);
    }

    pub fn off(&mut self) {
        self.write(0);
    }

    /// Change TOP. A duty above the new TOP is clamped before TOP is written,
    /// so the hardware never sees a compare value past the end of the period.
    pub fn reconfigure(&mut self, top: u16) -> Result<(), Error> {
        if top == 0 {
            return Err(Error::ZeroTop);
        }

        if self.duty > top {
            self.duty = top;
            self.output.set_compare(top);
        }
        self.output.set_top(top);
        self.top = top;

        Ok(())
    }

    pub fn release(self) -> O {
        self.output
    }

    fn write(&mut self, duty: u16) {
        let duty = duty.min(self.top);
        self.duty = duty;
        self.output.set_compare(duty);
    }
}

impl<O: PwmOutput> embedded_hal::PwmPin for HardwareChannel<O> {
    type Duty = u16;

    fn disable(&mut self) {
        self.output.disable();
        self.enabled = false;
    }

    fn enable(&mut self) {
        self.output.enable();
        self.enabled = true;
    }

    fn get_duty(&self) -> u16 {
        self.duty
    }

    fn get_max_duty(&self) -> u16 {
        self.top
    }

    fn set_duty(&mut self, duty: u16) {
        self.write(duty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakePwm, Op};
    use embedded_hal::PwmPin;

    #[test]
    fn starts_enabled_and_dark() {
        let channel = HardwareChannel::new(FakePwm::default(), 999).unwrap();
        assert_eq!(channel.top(), 999);
        assert_eq!(channel.duty(), 0);
        assert!(channel.is_enabled());
        assert_eq!(
            channel.release().ops,
            [Op::Duty(0), Op::Top(999), Op::Enable]
        );
    }

    #[test]
    fn zero_top_is_rejected() {
        assert_eq!(
            HardwareChannel::new(FakePwm::default(), 0).err(),
            Some(Error::ZeroTop)
        );

        let mut channel = HardwareChannel::new(FakePwm::default(), 999).unwrap();
        assert_eq!(channel.reconfigure(0), Err(Error::ZeroTop));
        assert_eq!(channel.top(), 999);
    }

    #[test]
    fn duty_above_top_is_clamped() {
        let mut channel = HardwareChannel::new(FakePwm::default(), 999).unwrap();
        channel.set_duty(5000);
        assert_eq!(channel.duty(), 999);
        assert_eq!(channel.release().duties().last(), Some(&999));
    }

    #[test]
    fn percent_scales_with_truncation() {
        let mut channel = HardwareChannel::new(FakePwm::default(), 1999).unwrap();
        channel.set_percent(25);
        assert_eq!(channel.duty(), 499);
        channel.set_percent(75);
        assert_eq!(channel.duty(), 1499);
        channel.set_percent(100);
        assert_eq!(channel.duty(), 1999);
        channel.set_percent(250);
        assert_eq!(channel.duty(), 1999);
    }

    #[test]
    fn lowering_top_clamps_duty_before_top_is_written() {
        let mut channel = HardwareChannel::new(FakePwm::default(), 999).unwrap();
        channel.set_duty(800);
        channel.reconfigure(500).unwrap();

        assert_eq!(channel.top(), 500);
        assert_eq!(channel.duty(), 500);
        let ops = channel.release().ops;
        assert_eq!(&ops[3..], [Op::Duty(800), Op::Duty(500), Op::Top(500)]);
    }

    #[test]
    fn raising_top_keeps_duty() {
        let mut channel = HardwareChannel::new(FakePwm::default(), 999).unwrap();
        channel.set_duty(400);
        channel.reconfigure(1999).unwrap();

        assert_eq!(channel.duty(), 400);
        assert_eq!(channel.release().ops.last(), Some(&Op::Top(1999)));
    }

    #[test]
    fn usable_as_embedded_hal_pwm_pin() {
        fn half<P: PwmPin<Duty = u16>>(pin: &mut P) {
            let max = pin.get_max_duty();
            pin.set_duty(max / 2);
        }

        let mut channel = HardwareChannel::new(FakePwm::default(), 999).unwrap();
        half(&mut channel);
        assert_eq!(channel.get_duty(), 499);

        PwmPin::disable(&mut channel);
        assert!(!channel.is_enabled());
        assert_eq!(channel.release().ops.last(), Some(&Op::Disable));
    }
}

//! Software-timed blinking with busy-wait delays

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

/// How one period of a software duty cycle is spent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DutyCycle {
    /// 0%: LED held off for the whole period
    Off { period_ms: u16 },
    /// 100%: LED held on for the whole period
    On { period_ms: u16 },
    Blink { on_ms: u16, off_ms: u16 },
}

impl DutyCycle {
    /// Split `period_ms` into on and off time; `percent` is clamped to 100
    pub fn new(period_ms: u16, percent: u8) -> Self {
        match percent.min(100) {
            0 => DutyCycle::Off { period_ms },
            100 => DutyCycle::On { period_ms },
            percent => {
                let on_ms = (period_ms as u32 * percent as u32 / 100) as u16;
                DutyCycle::Blink {
                    on_ms,
                    off_ms: period_ms - on_ms,
                }
            }
        }
    }

    /// Drive `pin` through one period
    pub fn run_cycle<P, D>(&self, pin: &mut P, delay: &mut D) -> Result<(), P::Error>
    where
        P: OutputPin,
        D: DelayMs<u16>,
    {
        match *self {
            DutyCycle::Off { period_ms } => {
                pin.set_low()?;
                delay.delay_ms(period_ms);
            }
            DutyCycle::On { period_ms } => {
                pin.set_high()?;
                delay.delay_ms(period_ms);
            }
            DutyCycle::Blink { on_ms, off_ms } => {
                pin.set_high()?;
                delay.delay_ms(on_ms);
                pin.set_low()?;
                delay.delay_ms(off_ms);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingDelay;
    use embedded_hal_mock::delay::MockNoop;
    use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};

    #[test]
    fn quarter_duty_splits_period() {
        assert_eq!(
            DutyCycle::new(1000, 25),
            DutyCycle::Blink {
                on_ms: 250,
                off_ms: 750
            }
        );
    }

    #[test]
    fn extremes_hold_the_pin() {
        assert_eq!(DutyCycle::new(1000, 0), DutyCycle::Off { period_ms: 1000 });
        assert_eq!(DutyCycle::new(1000, 100), DutyCycle::On { period_ms: 1000 });
        assert_eq!(DutyCycle::new(1000, 140), DutyCycle::On { period_ms: 1000 });
    }

    #[test]
    fn on_time_truncates() {
        assert_eq!(
            DutyCycle::new(999, 33),
            DutyCycle::Blink {
                on_ms: 329,
                off_ms: 670
            }
        );
        assert_eq!(
            DutyCycle::new(u16::MAX, 99),
            DutyCycle::Blink {
                on_ms: 64879,
                off_ms: 656
            }
        );
    }

    #[test]
    fn blink_cycle_drives_pin_high_then_low() {
        let expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ];
        let mut pin = PinMock::new(&expectations);
        let mut delay = RecordingDelay::default();

        DutyCycle::new(2000, 50).run_cycle(&mut pin, &mut delay).unwrap();

        assert_eq!(delay.waits, [1000, 1000]);
        pin.done();
    }

    #[test]
    fn held_levels_wait_whole_period() {
        let expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let mut pin = PinMock::new(&expectations);
        let mut delay = RecordingDelay::default();

        DutyCycle::new(1000, 0).run_cycle(&mut pin, &mut delay).unwrap();
        DutyCycle::new(1000, 100).run_cycle(&mut pin, &mut delay).unwrap();

        assert_eq!(delay.waits, [1000, 1000]);
        pin.done();
    }

    #[test]
    fn repeated_cycles_with_noop_delay() {
        let expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ];
        let mut pin = PinMock::new(&expectations);
        let mut delay = MockNoop::new();
        let duty = DutyCycle::new(1000, 25);

        for _ in 0..2 {
            duty.run_cycle(&mut pin, &mut delay).unwrap();
        }
        pin.done();
    }
}

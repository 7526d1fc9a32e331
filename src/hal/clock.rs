use avr_device::atmega128a::CPU;

use crate::timing::ClockDivider;

/// System clock control through the XTAL divide register
pub struct SystemClock {
    cpu: CPU,
    divider: ClockDivider,
}

impl SystemClock {
    pub fn new(cpu: CPU) -> Self {
        let mut clock = Self {
            cpu,
            divider: ClockDivider::Div1,
        };
        clock.set_divider(ClockDivider::Div1);
        clock
    }

    /// XDIVEN has to be cleared before a new division factor is written
    pub fn set_divider(&mut self, divider: ClockDivider) {
        self.cpu.xdiv.write(|w| unsafe { w.bits(0) });
        if divider != ClockDivider::Div1 {
            self.cpu.xdiv.write(|w| unsafe { w.bits(divider.xdiv()) });
        }
        self.divider = divider;
    }

    #[inline]
    pub fn divider(&self) -> ClockDivider {
        self.divider
    }
}

//! Timer1 and system clock arithmetic
//!
//! Kept free of register access so the numbers the demos program into the
//! timer can be checked on the host.

/// Timer1 clock select (CS12:10)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Prescaler {
    Direct = 1,
    Div8 = 2,
    Div64 = 3,
    Div256 = 4,
    Div1024 = 5,
}

impl Prescaler {
    pub const fn divisor(self) -> u32 {
        match self {
            Prescaler::Direct => 1,
            Prescaler::Div8 => 8,
            Prescaler::Div64 => 64,
            Prescaler::Div256 => 256,
            Prescaler::Div1024 => 1024,
        }
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Timer tick rate after the prescaler
pub const fn tick_hz(clock_hz: u32, prescaler: Prescaler) -> u32 {
    clock_hz / prescaler.divisor()
}

/// ICR1 value giving `freq_hz` in fast PWM mode 14: `f = clk / (N * (TOP + 1))`
pub const fn pwm_top(clock_hz: u32, prescaler: Prescaler, freq_hz: u32) -> u16 {
    (clock_hz / (prescaler.divisor() * freq_hz) - 1) as u16
}

/// Whole timer ticks closest to `period_us`
pub const fn ticks_for_us(clock_hz: u32, prescaler: Prescaler, period_us: u32) -> u32 {
    let ticks = tick_hz(clock_hz, prescaler) as u64 * period_us as u64;
    ((ticks + 500_000) / 1_000_000) as u32
}

/// TCNT1 preload so the next overflow comes `period_us` later.
/// Periods longer than one full counter cycle saturate at a preload of 0.
pub const fn overflow_preload(clock_hz: u32, prescaler: Prescaler, period_us: u32) -> u16 {
    let ticks = ticks_for_us(clock_hz, prescaler, period_us);
    if ticks == 0 {
        0xFFFF
    } else if ticks >= 0x1_0000 {
        0
    } else {
        (0x1_0000 - ticks) as u16
    }
}

/// Time between two overflows of a free-running 16-bit counter, in ms
pub fn overflow_period_ms(clock_hz: u32, prescaler: Prescaler) -> u32 {
    (0x1_0000u64 * 1000 / tick_hz(clock_hz, prescaler) as u64) as u32
}

/// UBRR value for asynchronous normal-speed USART: `clk / (16 * baud) - 1`
pub const fn ubrr(clock_hz: u32, baud: u32) -> u16 {
    (clock_hz / (16 * baud) - 1) as u16
}

/// System clock division through XDIV
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockDivider {
    Div1,
    Div2,
    Div4,
}

impl ClockDivider {
    pub const fn factor(self) -> u32 {
        match self {
            ClockDivider::Div1 => 1,
            ClockDivider::Div2 => 2,
            ClockDivider::Div4 => 4,
        }
    }

    /// XDIV register value. The division factor is `129 - XDIV[6:0]` with
    /// XDIVEN (bit 7) set; 0 runs the core at the full crystal frequency.
    pub const fn xdiv(self) -> u8 {
        match self {
            ClockDivider::Div1 => 0,
            divider => 0x80 | (129 - divider.factor()) as u8,
        }
    }

    pub const fn frequency(self, clock_hz: u32) -> u32 {
        clock_hz / self.factor()
    }
}

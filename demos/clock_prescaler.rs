//! System clock divider vs. Timer1 and busy-wait delays
//!
//! Timer1 free-runs at clk/1024 and counts overflows in its interrupt. The
//! core clock is divided by 1, 2 and 4 in turn and one overflow is awaited
//! at each setting; a slower core clock stretches the wait accordingly. The
//! console baud rate is only valid at the full clock, so results are printed
//! after the clock is restored.
#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::interrupt(atmega128a)]
fn TIMER1_OVF() {
    heartbeat_firmware::hal::timer::handle_overflow(0);
}

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use avr_device::atmega128a::Peripherals;
    use embedded_hal::blocking::delay::DelayMs;
    use heartbeat_firmware::config::{CPU_FREQ_HZ, PRESCALER_BLINK_MS};
    use heartbeat_firmware::hal::{timer, Board, OverflowTimer};
    use heartbeat_firmware::timing::{overflow_period_ms, ClockDivider, Prescaler};
    use heartbeat_firmware::Level;

    const DIVIDERS: [ClockDivider; 3] = [ClockDivider::Div1, ClockDivider::Div2, ClockDivider::Div4];

    let dp = Peripherals::take().unwrap();
    let mut board = Board::new(dp);
    board.log.system("Clock prescaler");

    let mut timer = OverflowTimer::new(board.tc1, Prescaler::Div1024, 0);
    // SAFETY: the overflow counter is the only state the handler touches
    unsafe { avr_device::interrupt::enable() };

    let mut overflows = [0u16; 3];
    for (count, &divider) in overflows.iter_mut().zip(DIVIDERS.iter()) {
        board.clock.set_divider(divider);
        timer::clear_overflows();
        timer.set_counter(0);
        *count = nb::block!(timer::wait_overflows(1)).unwrap_or_else(|never| match never {});
    }
    board.clock.set_divider(ClockDivider::Div1);

    for (count, &divider) in overflows.iter().zip(DIVIDERS.iter()) {
        let core_hz = divider.frequency(CPU_FREQ_HZ);
        board.log.value(Level::System, "core Hz", &core_hz);
        board.log.value(Level::System, "overflows", count);
        board.log.value(
            Level::System,
            "ms per overflow",
            &overflow_period_ms(core_hz, Prescaler::Div1024),
        );
    }

    loop {
        board.led.toggle();
        board.delay.delay_ms(PRESCALER_BLINK_MS);
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}

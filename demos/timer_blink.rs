//! 20Hz blink on PB5 paced by the Timer1 overflow interrupt
//!
//! Timer1 runs at 16MHz/1024 = 15.625kHz and is preloaded so it overflows
//! every 391 ticks (25.024ms). The handler only counts; the main loop toggles.
#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
use heartbeat_firmware::{
    config::{CPU_FREQ_HZ, TIMER_BLINK_TOGGLE_US},
    timing::{overflow_preload, Prescaler},
};

#[cfg(target_arch = "avr")]
const PRESCALER: Prescaler = Prescaler::Div1024;

#[cfg(target_arch = "avr")]
const PRELOAD: u16 = overflow_preload(CPU_FREQ_HZ, PRESCALER, TIMER_BLINK_TOGGLE_US);

#[cfg(target_arch = "avr")]
#[avr_device::interrupt(atmega128a)]
fn TIMER1_OVF() {
    heartbeat_firmware::hal::timer::handle_overflow(PRELOAD);
}

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use avr_device::atmega128a::Peripherals;
    use heartbeat_firmware::hal::{timer, Board, OverflowTimer};
    use heartbeat_firmware::Level;

    let dp = Peripherals::take().unwrap();
    let mut board = Board::new(dp);
    board.log.system("Timer blink");
    board.log.value(Level::Debug, "TCNT1 preload", &PRELOAD);

    let _timer = OverflowTimer::new(board.tc1, PRESCALER, PRELOAD);
    // SAFETY: the overflow counter is the only state the handler touches
    unsafe { avr_device::interrupt::enable() };

    loop {
        if timer::take_overflows() >= 1 {
            board.led.toggle();
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}

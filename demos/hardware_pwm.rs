//! Timer1 fast PWM on OC1A (PB5) at 1kHz, stepping 0/25/50/75/100% every 2s
#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use avr_device::atmega128a::Peripherals;
    use heartbeat_firmware::config::{STAIRCASE_HOLD_MS, STAIRCASE_PWM_TOP};
    use heartbeat_firmware::hal::{self, Board, Timer1Pwm};
    use heartbeat_firmware::pulse::staircase;
    use heartbeat_firmware::timing::Prescaler;
    use heartbeat_firmware::HardwareChannel;

    let dp = Peripherals::take().unwrap();
    let mut board = Board::new(dp);
    board.log.system("Hardware PWM");

    let pwm = Timer1Pwm::new(board.tc1, board.led, Prescaler::Div8);
    let mut channel = match HardwareChannel::new(pwm, STAIRCASE_PWM_TOP) {
        Ok(channel) => channel,
        Err(err) => hal::halt(&mut board.log, err),
    };

    loop {
        staircase(&mut channel, &mut board.delay, STAIRCASE_HOLD_MS);
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}

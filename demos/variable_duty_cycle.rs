//! Busy-wait duty cycle on PB5: 25% of a 1s period
#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use avr_device::atmega128a::Peripherals;
    use heartbeat_firmware::blink::DutyCycle;
    use heartbeat_firmware::config::{DUTY_PERCENT, DUTY_PERIOD_MS};
    use heartbeat_firmware::hal::Board;
    use heartbeat_firmware::Level;

    let dp = Peripherals::take().unwrap();
    let mut board = Board::new(dp);
    board.log.system("Variable duty cycle");

    let duty = DutyCycle::new(DUTY_PERIOD_MS, DUTY_PERCENT);
    match duty {
        DutyCycle::Off { .. } => board.log.system("always off"),
        DutyCycle::On { .. } => board.log.system("always on"),
        DutyCycle::Blink { on_ms, off_ms } => {
            board.log.value(Level::System, "on ms", &on_ms);
            board.log.value(Level::System, "off ms", &off_ms);
        }
    }

    loop {
        duty.run_cycle(&mut board.led, &mut board.delay).ok();
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}

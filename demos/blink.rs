//! Software-timed blink on PB5: 1s on, 1s off, using busy-wait delays only
#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use avr_device::atmega128a::Peripherals;
    use heartbeat_firmware::blink::DutyCycle;
    use heartbeat_firmware::config::BLINK_PERIOD_MS;
    use heartbeat_firmware::hal::Board;

    let dp = Peripherals::take().unwrap();
    let mut board = Board::new(dp);
    board.log.system("Blink");

    // On first, then toggle every half period
    let blink = DutyCycle::new(BLINK_PERIOD_MS, 50);
    loop {
        blink.run_cycle(&mut board.led, &mut board.delay).ok();
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}

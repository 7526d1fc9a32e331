//! Asymmetric PWM pulse on PB5: 0.3s rise to full, 0.6s fall to dark, repeat
#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use avr_device::atmega128a::Peripherals;
    use heartbeat_firmware::config::{HEARTBEAT_PWM_TOP, PULSE_FALL_MS, PULSE_RISE_MS, PULSE_STEPS};
    use heartbeat_firmware::hal::{self, Board, Timer1Pwm};
    use heartbeat_firmware::pulse::Pulse;
    use heartbeat_firmware::timing::Prescaler;
    use heartbeat_firmware::{HardwareChannel, Steps};

    let dp = Peripherals::take().unwrap();
    let mut board = Board::new(dp);
    board.log.system("Pulsing LED");

    let steps = match Steps::new(PULSE_STEPS) {
        Ok(steps) => steps,
        Err(err) => hal::halt(&mut board.log, err),
    };
    let pulse = Pulse::new(PULSE_RISE_MS, PULSE_FALL_MS, steps);

    let pwm = Timer1Pwm::new(board.tc1, board.led, Prescaler::Div8);
    let mut channel = match HardwareChannel::new(pwm, HEARTBEAT_PWM_TOP) {
        Ok(channel) => channel,
        Err(err) => hal::halt(&mut board.log, err),
    };

    loop {
        pulse.run(&mut channel, &mut board.delay);
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}

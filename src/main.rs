//! Fading heartbeat: 20 beats with a linearly falling intensity cap, then dark
#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use avr_device::atmega128a::Peripherals;
    use heartbeat_firmware::config::{DECAY_BEATS, HEARTBEAT_PWM_TOP, IDLE_MS};
    use heartbeat_firmware::hal::{self, Board, Timer1Pwm};
    use heartbeat_firmware::timing::Prescaler;
    use heartbeat_firmware::{HardwareChannel, Heartbeat};

    let dp = Peripherals::take().unwrap();
    let mut board = Board::new(dp);
    board.log.system("Fading heartbeat");

    let pwm = Timer1Pwm::new(board.tc1, board.led, Prescaler::Div8);
    let channel = match HardwareChannel::new(pwm, HEARTBEAT_PWM_TOP) {
        Ok(channel) => channel,
        Err(err) => hal::halt(&mut board.log, err),
    };

    let mut heart = Heartbeat::new(channel, board.delay);
    heart.weaken(DECAY_BEATS, &mut board.log);

    heart.channel_mut().off();
    board.log.system("Idle");
    loop {
        heart.hold(IDLE_MS);
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}

pub mod clock;
pub mod gpio;
pub mod pwm;
pub mod timer;
pub mod uart;

pub use clock::SystemClock;
pub use gpio::board::Led;
pub use gpio::{Input, Output, Pin, Pins};
pub use pwm::Timer1Pwm;
pub use timer::{Delay, OverflowTimer};
pub use uart::Uart;

use avr_device::atmega128a::{Peripherals, TC1};
use ufmt::uWrite;

use crate::config::LOG_LEVEL;
use crate::drivers::SerialConsole;
use crate::error::Error;
use crate::logger::{Level, Logger};

/// What every demo starts from: LED pin, Timer0 delay, console, and the
/// peripherals left for the demo to configure
pub struct Board {
    pub led: Led,
    pub delay: Delay,
    pub log: Logger<SerialConsole>,
    pub clock: SystemClock,
    pub tc1: TC1,
}

impl Board {
    pub fn new(dp: Peripherals) -> Self {
        let clock = SystemClock::new(dp.CPU);
        let pins = Pins::new(dp.PORTB);

        Self {
            led: pins.pb5.into_output(),
            delay: Delay::new(dp.TC0),
            log: Logger::new(SerialConsole::new(dp.USART0), LOG_LEVEL),
            clock,
            tc1: dp.TC1,
        }
    }
}

/// Report a configuration error and park the CPU
pub fn halt<W: uWrite>(log: &mut Logger<W>, err: Error) -> ! {
    log.value(Level::Error, "halted", &err);
    loop {
        avr_device::asm::sleep();
    }
}

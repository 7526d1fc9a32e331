//! Configuration constants for the heartbeat firmware

use crate::logger::Level;

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Timer1 TOP for the heartbeat demos (2kHz with the /8 prescaler)
pub const HEARTBEAT_PWM_TOP: u16 = 999;

/// Timer1 TOP for the hardware PWM staircase (1kHz with the /8 prescaler)
pub const STAIRCASE_PWM_TOP: u16 = 1999;

/// Number of interpolation steps per ramp
pub const RAMP_STEPS: u16 = 50;

/// Number of interpolation steps for the asymmetric pulse
pub const PULSE_STEPS: u16 = 100;

/// Pulse rise time in milliseconds
pub const PULSE_RISE_MS: u16 = 300;

/// Pulse fall time in milliseconds
pub const PULSE_FALL_MS: u16 = 600;

/// Rest between two heartbeats in milliseconds
pub const HEARTBEAT_REST_MS: u16 = 2000;

/// Beats played by the fading heartbeat before going dark
pub const DECAY_BEATS: u16 = 20;

/// Busy-wait period of the idle loop in milliseconds
pub const IDLE_MS: u16 = 1000;

/// Hold time of each step of the hardware PWM staircase
pub const STAIRCASE_HOLD_MS: u16 = 2000;

/// Blink period of the software-timed blink (1s on, 1s off)
pub const BLINK_PERIOD_MS: u16 = 2000;

/// Period of the variable duty-cycle blink
pub const DUTY_PERIOD_MS: u16 = 1000;

/// Duty of the variable duty-cycle blink in percent
pub const DUTY_PERCENT: u8 = 25;

/// Toggle period of the timer-driven blink in microseconds (20Hz blink)
pub const TIMER_BLINK_TOGGLE_US: u32 = 25_000;

/// Blink half-period used after the clock prescaler measurement
pub const PRESCALER_BLINK_MS: u16 = 500;

/// Lowest level written to the console
pub const LOG_LEVEL: Level = if cfg!(feature = "debug") {
    Level::Debug
} else {
    Level::System
};

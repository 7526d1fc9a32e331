//! Levelled status lines over any `ufmt` sink
//!
//! On the board the sink is the USART0 console; under test it is an in-memory
//! transcript. Write errors are dropped: a missing console must never stop the
//! LED pattern.

use core::convert::Infallible;

use ufmt::{uDisplay, uWrite, uwrite};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug = 0,
    System = 1,
    Error = 2,
}

impl Level {
    fn prefix(self) -> &'static str {
        match self {
            Level::Debug => "[DBG] ",
            Level::System => "[SYS] ",
            Level::Error => "[ERR] ",
        }
    }
}

pub struct Logger<W> {
    out: W,
    level: Level,
}

impl<W: uWrite> Logger<W> {
    pub fn new(out: W, level: Level) -> Self {
        Self { out, level }
    }

    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    pub fn system(&mut self, msg: &str) {
        self.line(Level::System, msg);
    }

    pub fn error(&mut self, msg: &str) {
        self.line(Level::Error, msg);
    }

    pub fn debug(&mut self, msg: &str) {
        self.line(Level::Debug, msg);
    }

    /// Print `msg: value` at the given level
    pub fn value<T: uDisplay + ?Sized>(&mut self, level: Level, msg: &str, value: &T) {
        if self.enabled(level) {
            let _ = uwrite!(self.out, "{}{}: {}\r\n", level.prefix(), msg, value);
        }
    }

    fn line(&mut self, level: Level, msg: &str) {
        if self.enabled(level) {
            let _ = uwrite!(self.out, "{}{}\r\n", level.prefix(), msg);
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Sink for images that have no console attached
pub struct Discard;

impl uWrite for Discard {
    type Error = Infallible;

    fn write_str(&mut self, _s: &str) -> Result<(), Infallible> {
        Ok(())
    }
}

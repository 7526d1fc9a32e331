use core::fmt;

use ufmt::{uDisplay, uWrite, Formatter};

/// Configuration errors raised while setting up a PWM pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A channel TOP of zero leaves no room for any duty
    ZeroTop,
    /// A ramp needs at least one step
    ZeroSteps,
}

impl Error {
    pub fn as_str(&self) -> &'static str {
        match self {
            Error::ZeroTop => "PWM top must be non-zero",
            Error::ZeroSteps => "ramp step count must be non-zero",
        }
    }
}

impl uDisplay for Error {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

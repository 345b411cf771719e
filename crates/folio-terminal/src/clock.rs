//! Injected wall-clock capability.
//!
//! The `date` command is the only consumer. The host supplies whatever
//! clock it has (browser time, platform RTC); the core never reads the
//! system clock directly, which keeps `date` deterministic under test.

use std::fmt;

/// A calendar timestamp in the host's local time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> LocalTime;

    /// Render a timestamp for display. Defaults to the fixed
    /// `YYYY-MM-DD HH:MM:SS` form; hosts with locale-aware formatting
    /// override this.
    fn format(&self, time: LocalTime) -> String {
        time.to_string()
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub LocalTime);

impl Clock for FixedClock {
    fn now(&self) -> LocalTime {
        self.0
    }
}

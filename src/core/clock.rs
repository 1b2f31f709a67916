//! Source of "today" as the same opaque label stored on entries.

use chrono::Local;

pub trait Clock {
    fn today(&self) -> String;
}

/// Local wall clock, formatted with a chrono format string.
pub struct LocalClock {
    format: String,
}

impl LocalClock {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

impl Clock for LocalClock {
    fn today(&self) -> String {
        Local::now().date_naive().format(&self.format).to_string()
    }
}

/// Always returns the same label.
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(today: impl Into<String>) -> Self {
        FixedClock(today.into())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> String {
        self.0.clone()
    }
}

//! Source of the current time of day.
//!
//! Open/closed evaluation takes the time as a parameter; handlers read it
//! from a [`Clock`] once per request.

use chrono::NaiveTime;

pub trait Clock: Send + Sync {
    fn time_of_day(&self) -> NaiveTime;
}

/// Server-local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_of_day(&self) -> NaiveTime { chrono::Local::now().time() }
}

/// Always reports the same time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl FixedClock {
    /// Clock stopped at `hour:00:00`. Hours past 23 wrap to midnight.
    pub fn at_hour(hour: u32) -> Self {
        Self(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn time_of_day(&self) -> NaiveTime { self.0 }
}

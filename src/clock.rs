//!
//! Source for "now".
//!
//! The picker falls back to the current date whenever there is no value
//! yet. Tests and hosts that need a stable date can inject a [FixedClock].
//!

use chrono::{Local, NaiveDateTime};
use std::fmt::Debug;

/// Current local wall-clock time.
pub trait Clock: Debug {
    fn now(&self) -> NaiveDateTime;

    /// Current date at midnight.
    fn today(&self) -> NaiveDateTime {
        crate::date_util::start_of_day(self.now())
    }
}

/// Uses the system clock and the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

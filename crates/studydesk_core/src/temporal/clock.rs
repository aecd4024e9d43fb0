//! Injectable reference clock.

use chrono::NaiveDateTime;

/// Source of "now" for derivations.
///
/// Derivation functions never call this themselves; callers read the clock
/// once and pass the instant down.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the machine's local time zone.
///
/// Offset-bearing record dates are parsed into this same zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

//! Date parsing and bounded date windows.
//!
//! # Responsibility
//! - Parse the date strings stored on records into comparable instants.
//! - Select records inside inclusive day windows around a reference time.
//! - Provide date-keyed calendar views over study plans.
//!
//! # Invariants
//! - Every function takes its reference time from the caller.
//! - Records with unparsable dates are excluded, never reported as errors.

pub mod calendar;
pub mod clock;
pub mod parse;
pub mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use parse::{parse_calendar_date, parse_due_date, parse_instant, parse_instant_in};
pub use window::{recent_notes, upcoming_events, windowed, DateWindow};

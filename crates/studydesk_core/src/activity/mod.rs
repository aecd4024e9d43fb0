//! Recent-activity feed for the dashboard.
//!
//! # Invariants
//! - The feed is ordered by timestamp, newest first.
//! - Equal timestamps keep input order: events before notes.

pub mod merge;

pub use merge::{merge_recent, recent_activity, ActivityItem, ActivityKind};

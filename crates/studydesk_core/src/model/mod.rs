//! Domain model for study collections and the reference corpus.
//!
//! # Responsibility
//! - Define the typed records read from the external data store.
//! - Keep wire field names aligned with the store (`camelCase`, `type`).
//!
//! # Invariants
//! - Dates travel as strings and are parsed lazily by derivation code.
//! - `StudyPlan` status and progress only change together.

pub mod document;
pub mod event;
pub mod note;
pub mod plan;
pub mod test_result;
pub mod ticket;

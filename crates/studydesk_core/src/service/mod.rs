//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Compose pure derivations into the summaries each page shows.

pub mod dashboard;
pub mod plan_service;
pub mod ticket_service;

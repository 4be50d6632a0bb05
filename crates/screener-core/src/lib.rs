//! screener-core
//!
//! Pure domain types for the parent-reported ADHD screening questionnaire.
//! No text, no I/O — this is the shared vocabulary of the screener crates.

pub mod error;
pub mod models;

//! screener-instruments
//!
//! The ADHD parent screening instrument: its multilingual question catalog
//! and the rules that turn a completed answer set into a score. Pure data
//! and arithmetic — no I/O beyond parsing the bundled text resource.

pub mod catalog;
pub mod error;
pub mod scoring;

pub use catalog::QuestionCatalog;

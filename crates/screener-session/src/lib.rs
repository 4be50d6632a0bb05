//! screener-session
//!
//! The in-process boundary the presentation layer talks to. It owns the
//! loaded catalog and configuration, hands out everything needed to render
//! the form, and turns a submitted answer set into a score, an export
//! payload and a localized summary.

pub mod config;
pub mod error;
pub mod events;
pub mod screener;
pub mod telemetry;

pub use screener::{FormView, Screener, Submission};

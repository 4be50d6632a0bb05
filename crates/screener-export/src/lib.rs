//! screener-export
//!
//! CSV download of a screening submission, and the plain-text result summary.

pub mod error;
pub mod payload;
pub mod render;
pub mod table;

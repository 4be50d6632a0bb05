use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Interpretation band for a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Band {
    /// Likely typical behavior.
    Low,
    /// Some ADHD-like traits; monitoring recommended.
    Moderate,
    /// Many symptoms; clinical evaluation recommended.
    High,
}

impl Band {
    pub fn key(self) -> &'static str {
        match self {
            Band::Low => "low",
            Band::Moderate => "moderate",
            Band::High => "high",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

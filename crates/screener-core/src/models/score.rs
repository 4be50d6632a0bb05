use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::band::Band;

/// The outcome of scoring one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub total: u16,
    pub band: Band,
    pub timestamp: jiff::Timestamp,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::question::QuestionId;
use super::scale::ScaleLevel;

/// One submission flattened for download: a field per question plus the
/// total and the wall-clock date of submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExportRecord {
    pub fields: Vec<ExportField>,
    pub total: u16,
    #[ts(type = "string")]
    pub date: jiff::civil::DateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExportField {
    #[ts(type = "string")]
    pub question: QuestionId,
    /// `None` for a question left unanswered under the lenient policy.
    #[ts(type = "number | null")]
    pub value: Option<ScaleLevel>,
}

impl ExportRecord {
    pub fn value(&self, id: &QuestionId) -> Option<ScaleLevel> {
        self.fields
            .iter()
            .find(|f| f.question == *id)
            .and_then(|f| f.value)
    }
}

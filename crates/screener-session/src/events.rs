use serde::Serialize;
use tracing::info;

use screener_core::models::band::Band;
use screener_core::models::language::Language;

/// A structured record of one scored submission.
///
/// Carries counts and the outcome only; individual answers are never logged.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionEvent {
    pub instrument_id: String,
    pub language: Language,
    pub total: u16,
    pub band: Band,
    pub answered: usize,
    pub unanswered: usize,
}

impl SubmissionEvent {
    /// Emit this event via tracing.
    pub fn emit(&self) {
        info!(
            submission.instrument = %self.instrument_id,
            submission.language = %self.language,
            submission.total = self.total,
            submission.band = %self.band,
            submission.answered = self.answered,
            submission.unanswered = self.unanswered,
            "submission scored"
        );
    }
}

use thiserror::Error;

use screener_core::models::question::QuestionId;
use screener_export::error::ExportError;
use screener_instruments::error::InstrumentError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("unknown time zone '{name}': {source}")]
    TimeZone { name: String, source: jiff::Error },

    #[error("telemetry error: {0}")]
    Telemetry(String),
}

impl SessionError {
    /// The unanswered questions, when this error rejected an incomplete
    /// submission.
    pub fn missing_answers(&self) -> Option<&[QuestionId]> {
        match self {
            SessionError::Instrument(InstrumentError::MissingAnswers(ids)) => Some(ids),
            _ => None,
        }
    }
}

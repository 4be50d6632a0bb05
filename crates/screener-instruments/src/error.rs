use thiserror::Error;

use screener_core::error::CoreError;
use screener_core::models::question::QuestionId;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("missing answers for {} question(s): {}", .0.len(), join_ids(.0))]
    MissingAnswers(Vec<QuestionId>),

    #[error("answer given for a question not in the catalog: {0}")]
    UnknownQuestion(QuestionId),

    #[error("invalid question bundle: {0}")]
    InvalidBundle(String),

    #[error("bundle parse error: {0}")]
    BundleParse(#[from] serde_json::Error),

    #[error(transparent)]
    Core(CoreError),
}

impl From<CoreError> for InstrumentError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnsupportedLanguage(tag) => InstrumentError::UnsupportedLanguage(tag),
            other => InstrumentError::Core(other),
        }
    }
}

fn join_ids(ids: &[QuestionId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

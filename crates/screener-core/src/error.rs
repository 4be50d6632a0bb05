use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("invalid scale value {0}: expected 0, 1, 2 or 3")]
    InvalidScaleValue(u8),

    #[error("invalid question id: {0}")]
    InvalidQuestionId(String),
}

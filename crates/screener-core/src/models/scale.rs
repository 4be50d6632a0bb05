use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the four ordinal response options. The discriminant is the
/// literal score contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ScaleLevel {
    /// Never or rarely.
    Never = 0,
    Sometimes = 1,
    Often = 2,
    VeryOften = 3,
}

impl ScaleLevel {
    pub const ALL: [ScaleLevel; 4] = [
        ScaleLevel::Never,
        ScaleLevel::Sometimes,
        ScaleLevel::Often,
        ScaleLevel::VeryOften,
    ];

    pub const MAX: ScaleLevel = ScaleLevel::VeryOften;

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ScaleLevel {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ScaleLevel::Never),
            1 => Ok(ScaleLevel::Sometimes),
            2 => Ok(ScaleLevel::Often),
            3 => Ok(ScaleLevel::VeryOften),
            other => Err(CoreError::InvalidScaleValue(other)),
        }
    }
}

impl From<ScaleLevel> for u8 {
    fn from(level: ScaleLevel) -> Self {
        level.value()
    }
}

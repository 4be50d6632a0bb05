use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A language the questionnaire text is available in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Punjabi,
}

impl Language {
    /// All supported languages, in language-menu order.
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Punjabi];

    /// Short tag (e.g. "en").
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Punjabi => "pa",
        }
    }

    /// The language's name written in its own script, as shown in the
    /// language menu.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Punjabi => "ਪੰਜਾਬੀ",
        }
    }

    /// Resolve a tag or native name. Tags match case-insensitively.
    pub fn from_tag(tag: &str) -> Result<Self, CoreError> {
        let trimmed = tag.trim();
        Self::ALL
            .into_iter()
            .find(|lang| {
                lang.tag().eq_ignore_ascii_case(trimmed)
                    || lang.native_name() == trimmed
                    || serde_name(*lang).eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| CoreError::UnsupportedLanguage(tag.to_string()))
    }
}

fn serde_name(lang: Language) -> &'static str {
    match lang {
        Language::English => "english",
        Language::Hindi => "hindi",
        Language::Punjabi => "punjabi",
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

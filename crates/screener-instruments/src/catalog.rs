use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use screener_core::models::band::Band;
use screener_core::models::language::Language;
use screener_core::models::question::{Group, QUESTIONS_PER_GROUP, Question, QuestionId};
use screener_core::models::scale::ScaleLevel;

use crate::error::InstrumentError;

const BUNDLED: &str = include_str!("../data/adhd_parent.json");

/// Display text for one language's screening page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UiText {
    pub title: String,
    pub instructions: String,
    pub inattention_heading: String,
    pub hyperactivity_heading: String,
    pub results_heading: String,
    pub interpretation_heading: String,
    pub download_label: String,
    pub score_label: String,
    pub submit_label: String,
    pub interpretation_low: String,
    pub interpretation_moderate: String,
    pub interpretation_high: String,
}

impl UiText {
    pub fn group_heading(&self, group: Group) -> &str {
        match group {
            Group::Inattention => &self.inattention_heading,
            Group::Hyperactivity => &self.hyperactivity_heading,
        }
    }

    pub fn interpretation(&self, band: Band) -> &str {
        match band {
            Band::Low => &self.interpretation_low,
            Band::Moderate => &self.interpretation_moderate,
            Band::High => &self.interpretation_high,
        }
    }
}

/// A response option paired with its label in one language.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleOption {
    #[ts(type = "number")]
    pub level: ScaleLevel,
    pub label: String,
}

#[derive(Debug, Deserialize)]
struct RawBundle {
    id: String,
    language_prompt: String,
    languages: BTreeMap<Language, RawLanguage>,
}

#[derive(Debug, Deserialize)]
struct RawLanguage {
    text: UiText,
    scale: Vec<String>,
    questions: BTreeMap<Group, Vec<String>>,
}

#[derive(Debug, Clone)]
struct LanguageEntry {
    text: UiText,
    scale: [String; 4],
    inattention: Vec<String>,
    hyperactivity: Vec<String>,
}

impl LanguageEntry {
    fn from_raw(language: Language, mut raw: RawLanguage) -> Result<Self, InstrumentError> {
        let scale: [String; 4] = raw.scale.try_into().map_err(|labels: Vec<String>| {
            InstrumentError::InvalidBundle(format!(
                "{language}: expected 4 scale labels, found {}",
                labels.len()
            ))
        })?;

        let mut take_group = |group: Group| -> Result<Vec<String>, InstrumentError> {
            let prompts = raw.questions.remove(&group).ok_or_else(|| {
                InstrumentError::InvalidBundle(format!(
                    "{language}: missing {} questions",
                    group.column_prefix()
                ))
            })?;
            if prompts.len() != QUESTIONS_PER_GROUP as usize {
                return Err(InstrumentError::InvalidBundle(format!(
                    "{language}: expected {QUESTIONS_PER_GROUP} {} questions, found {}",
                    group.column_prefix(),
                    prompts.len()
                )));
            }
            Ok(prompts)
        };

        Ok(Self {
            inattention: take_group(Group::Inattention)?,
            hyperactivity: take_group(Group::Hyperactivity)?,
            text: raw.text,
            scale,
        })
    }

    fn prompts(&self, group: Group) -> &[String] {
        match group {
            Group::Inattention => &self.inattention,
            Group::Hyperactivity => &self.hyperactivity,
        }
    }
}

/// The fixed, language-indexed question set.
///
/// Every supported language is checked at load time to carry the same
/// question keys and four scale labels, so lookups by [`Language`] are total.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    id: String,
    language_prompt: String,
    english: LanguageEntry,
    hindi: LanguageEntry,
    punjabi: LanguageEntry,
}

impl QuestionCatalog {
    /// The catalog compiled into this crate.
    pub fn bundled() -> Result<Self, InstrumentError> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(json: &str) -> Result<Self, InstrumentError> {
        let raw: RawBundle = serde_json::from_str(json)?;
        let mut languages = raw.languages;

        let mut take = |language: Language| -> Result<LanguageEntry, InstrumentError> {
            let entry = languages.remove(&language).ok_or_else(|| {
                InstrumentError::InvalidBundle(format!("missing language: {language}"))
            })?;
            LanguageEntry::from_raw(language, entry)
        };

        Ok(Self {
            english: take(Language::English)?,
            hindi: take(Language::Hindi)?,
            punjabi: take(Language::Punjabi)?,
            id: raw.id,
            language_prompt: raw.language_prompt,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.english.text.title
    }

    /// Label for the language menu, written in every supported language.
    pub fn language_prompt(&self) -> &str {
        &self.language_prompt
    }

    fn entry(&self, language: Language) -> &LanguageEntry {
        match language {
            Language::English => &self.english,
            Language::Hindi => &self.hindi,
            Language::Punjabi => &self.punjabi,
        }
    }

    /// The language-independent key set, in catalog order.
    pub fn question_ids(&self) -> Vec<QuestionId> {
        QuestionId::all().collect()
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        id.is_valid()
    }

    /// One group's questions, in order.
    pub fn questions(&self, language: Language, group: Group) -> Vec<Question> {
        group
            .question_ids()
            .zip(self.entry(language).prompts(group))
            .map(|(id, prompt)| Question {
                id,
                prompt: prompt.clone(),
            })
            .collect()
    }

    /// Both groups' questions, in catalog order.
    pub fn all_questions(&self, language: Language) -> Vec<Question> {
        Group::ALL
            .into_iter()
            .flat_map(|group| self.questions(language, group))
            .collect()
    }

    pub fn prompt(&self, language: Language, id: &QuestionId) -> Option<&str> {
        let index = usize::from(id.index).checked_sub(1)?;
        self.entry(language)
            .prompts(id.group)
            .get(index)
            .map(String::as_str)
    }

    pub fn scale_levels(&self, language: Language) -> Vec<ScaleOption> {
        ScaleLevel::ALL
            .into_iter()
            .zip(&self.entry(language).scale)
            .map(|(level, label)| ScaleOption {
                level,
                label: label.clone(),
            })
            .collect()
    }

    pub fn text(&self, language: Language) -> &UiText {
        &self.entry(language).text
    }

    pub fn interpretation(&self, language: Language, band: Band) -> &str {
        self.text(language).interpretation(band)
    }

    pub fn questions_for_tag(
        &self,
        tag: &str,
        group: Group,
    ) -> Result<Vec<Question>, InstrumentError> {
        let language = Language::from_tag(tag)?;
        Ok(self.questions(language, group))
    }

    pub fn scale_levels_for_tag(&self, tag: &str) -> Result<Vec<ScaleOption>, InstrumentError> {
        let language = Language::from_tag(tag)?;
        Ok(self.scale_levels(language))
    }
}

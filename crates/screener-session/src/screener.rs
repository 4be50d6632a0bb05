use jiff::Timestamp;
use jiff::tz::TimeZone;
use serde::Serialize;
use tracing::{info, warn};
use ts_rs::TS;

use screener_core::models::answer::AnswerSet;
use screener_core::models::language::Language;
use screener_core::models::question::{Group, Question, QuestionId};
use screener_core::models::score::ScoreResult;
use screener_export::payload::ExportPayload;
use screener_export::render::render_summary;
use screener_instruments::QuestionCatalog;
use screener_instruments::catalog::{ScaleOption, UiText};
use screener_instruments::error::InstrumentError;
use screener_instruments::scoring::{score_at, to_export_record, validate_complete};

use crate::config::{CompletenessPolicy, ScreenerConfig};
use crate::error::SessionError;
use crate::events::SubmissionEvent;

/// An entry in the language menu.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct LanguageOption {
    pub language: Language,
    pub native_name: String,
}

/// One group of questions under its heading.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct FormSection {
    pub group: Group,
    pub heading: String,
    pub questions: Vec<Question>,
}

/// Everything the presentation layer needs to draw the questionnaire in one
/// language.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct FormView {
    pub language: Language,
    pub language_prompt: String,
    pub languages: Vec<LanguageOption>,
    pub text: UiText,
    pub sections: Vec<FormSection>,
    pub scale: Vec<ScaleOption>,
}

/// The outcome of one accepted submission.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Submission {
    pub language: Language,
    pub result: ScoreResult,
    pub interpretation: String,
    /// Questions scored as zero because they were left blank. Always empty
    /// under [`CompletenessPolicy::Strict`].
    #[ts(type = "Array<string>")]
    pub unanswered: Vec<QuestionId>,
    pub export: ExportPayload,
    pub summary: String,
}

#[derive(Debug)]
pub struct Screener {
    catalog: QuestionCatalog,
    config: ScreenerConfig,
    time_zone: TimeZone,
}

impl Screener {
    pub fn new(catalog: QuestionCatalog, config: ScreenerConfig) -> Result<Self, SessionError> {
        let time_zone = config
            .resolve_time_zone()
            .map_err(|source| SessionError::TimeZone {
                name: config.time_zone.clone().unwrap_or_default(),
                source,
            })?;
        info!(
            instrument = catalog.id(),
            completeness = ?config.completeness,
            "screener ready"
        );
        Ok(Self {
            catalog,
            config,
            time_zone,
        })
    }

    /// A screener over the catalog compiled into `screener-instruments`.
    pub fn bundled(config: ScreenerConfig) -> Result<Self, SessionError> {
        Self::new(QuestionCatalog::bundled()?, config)
    }

    /// Override the zone export dates are rendered in.
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ScreenerConfig {
        &self.config
    }

    /// The form for a language tag or native name from the language menu.
    pub fn form(&self, language_tag: &str) -> Result<FormView, SessionError> {
        let language = Language::from_tag(language_tag).map_err(InstrumentError::from)?;
        Ok(self.form_for(language))
    }

    pub fn default_form(&self) -> FormView {
        self.form_for(self.config.default_language)
    }

    pub fn form_for(&self, language: Language) -> FormView {
        let text = self.catalog.text(language);
        let sections = Group::ALL
            .into_iter()
            .map(|group| FormSection {
                group,
                heading: text.group_heading(group).to_string(),
                questions: self.catalog.questions(language, group),
            })
            .collect();

        FormView {
            language,
            language_prompt: self.catalog.language_prompt().to_string(),
            languages: Language::ALL
                .into_iter()
                .map(|language| LanguageOption {
                    language,
                    native_name: language.native_name().to_string(),
                })
                .collect(),
            text: text.clone(),
            sections,
            scale: self.catalog.scale_levels(language),
        }
    }

    pub fn submit(
        &self,
        language: Language,
        answers: &AnswerSet,
    ) -> Result<Submission, SessionError> {
        self.submit_at(language, answers, Timestamp::now())
    }

    pub fn submit_tag(
        &self,
        language_tag: &str,
        answers: &AnswerSet,
    ) -> Result<Submission, SessionError> {
        let language = Language::from_tag(language_tag).map_err(InstrumentError::from)?;
        self.submit(language, answers)
    }

    /// Score, export and summarise a submission stamped with `timestamp`.
    pub fn submit_at(
        &self,
        language: Language,
        answers: &AnswerSet,
        timestamp: Timestamp,
    ) -> Result<Submission, SessionError> {
        let unanswered = self.check_completeness(language, answers)?;

        let result = score_at(answers, timestamp);
        let record = to_export_record(&self.catalog, answers, &result, &self.time_zone);
        let export = ExportPayload::csv(&record)?;
        let text = self.catalog.text(language);
        let summary = render_summary(text, &result, &record.date)?;

        SubmissionEvent {
            instrument_id: self.catalog.id().to_string(),
            language,
            total: result.total,
            band: result.band,
            answered: answers.len(),
            unanswered: unanswered.len(),
        }
        .emit();

        Ok(Submission {
            language,
            interpretation: text.interpretation(result.band).to_string(),
            result,
            unanswered,
            export,
            summary,
        })
    }

    /// Apply the completeness policy, returning the questions that will be
    /// scored as blank.
    fn check_completeness(
        &self,
        language: Language,
        answers: &AnswerSet,
    ) -> Result<Vec<QuestionId>, SessionError> {
        match validate_complete(answers, &self.catalog) {
            Ok(()) => Ok(Vec::new()),
            Err(InstrumentError::MissingAnswers(missing)) => match self.config.completeness {
                CompletenessPolicy::Strict => {
                    info!(
                        language = %language,
                        missing = missing.len(),
                        "submission rejected: unanswered questions"
                    );
                    Err(InstrumentError::MissingAnswers(missing).into())
                }
                CompletenessPolicy::Lenient => {
                    let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
                    warn!(
                        language = %language,
                        missing = missing.len(),
                        questions = %names.join(", "),
                        "scoring incomplete submission: unanswered questions count as zero"
                    );
                    Ok(missing)
                }
            },
            Err(other) => Err(other.into()),
        }
    }
}

use jiff::Timestamp;
use jiff::tz::TimeZone;

use screener_core::models::answer::AnswerSet;
use screener_core::models::band::Band;
use screener_core::models::question::QuestionId;
use screener_core::models::record::{ExportField, ExportRecord};
use screener_core::models::score::ScoreResult;

use crate::catalog::QuestionCatalog;
use crate::error::InstrumentError;

/// Highest total still interpreted as [`Band::Low`].
pub const LOW_MAX: u16 = 12;

/// Highest total still interpreted as [`Band::Moderate`].
pub const MODERATE_MAX: u16 = 24;

/// Highest reachable total: 18 questions at 3 points each.
pub const MAX_TOTAL: u16 = 54;

/// Catalog questions with no answer, in catalog order.
pub fn missing_answers(answers: &AnswerSet, catalog: &QuestionCatalog) -> Vec<QuestionId> {
    catalog
        .question_ids()
        .into_iter()
        .filter(|id| !answers.contains(id))
        .collect()
}

/// Check that every catalog question has exactly one answer and that no
/// answer refers to a question outside the catalog.
pub fn validate_complete(
    answers: &AnswerSet,
    catalog: &QuestionCatalog,
) -> Result<(), InstrumentError> {
    if let Some((id, _)) = answers.iter().find(|(id, _)| !catalog.contains(id)) {
        return Err(InstrumentError::UnknownQuestion(id));
    }

    let missing = missing_answers(answers, catalog);
    if !missing.is_empty() {
        return Err(InstrumentError::MissingAnswers(missing));
    }
    Ok(())
}

/// Sum of every answered level, across both groups.
pub fn total(answers: &AnswerSet) -> u16 {
    answers
        .iter()
        .map(|(_, level)| u16::from(level.value()))
        .sum()
}

pub fn interpret(total: u16) -> Band {
    if total <= LOW_MAX {
        Band::Low
    } else if total <= MODERATE_MAX {
        Band::Moderate
    } else {
        Band::High
    }
}

/// Score an answer set, stamped with the current instant.
///
/// Completeness is not checked here; callers run [`validate_complete`]
/// first unless they have opted into lenient scoring.
pub fn score(answers: &AnswerSet) -> ScoreResult {
    score_at(answers, Timestamp::now())
}

pub fn score_at(answers: &AnswerSet, timestamp: Timestamp) -> ScoreResult {
    let total = total(answers);
    ScoreResult {
        total,
        band: interpret(total),
        timestamp,
    }
}

/// Flatten a scored submission into one field per catalog question.
///
/// The date is the result's timestamp as wall-clock time in `tz`.
pub fn to_export_record(
    catalog: &QuestionCatalog,
    answers: &AnswerSet,
    result: &ScoreResult,
    tz: &TimeZone,
) -> ExportRecord {
    let fields = catalog
        .question_ids()
        .into_iter()
        .map(|question| ExportField {
            question,
            value: answers.get(&question),
        })
        .collect();

    ExportRecord {
        fields,
        total: result.total,
        date: result.timestamp.to_zoned(tz.clone()).datetime(),
    }
}

/// Rebuild the answer set an export record was flattened from.
pub fn answers_from_record(record: &ExportRecord) -> AnswerSet {
    record
        .fields
        .iter()
        .filter_map(|f| f.value.map(|level| (f.question, level)))
        .collect()
}

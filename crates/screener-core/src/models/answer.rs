use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use super::question::QuestionId;
use super::scale::ScaleLevel;

/// The answers collected for one submission: at most one level per question.
///
/// Iteration follows catalog order because `QuestionId` orders that way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, ScaleLevel>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every listed question with the same level.
    pub fn uniform(ids: impl IntoIterator<Item = QuestionId>, level: ScaleLevel) -> Self {
        ids.into_iter().map(|id| (id, level)).collect()
    }

    /// Record an answer, returning the one it replaced.
    pub fn record(&mut self, id: QuestionId, level: ScaleLevel) -> Option<ScaleLevel> {
        self.answers.insert(id, level)
    }

    /// Withdraw an answer.
    pub fn clear(&mut self, id: &QuestionId) -> Option<ScaleLevel> {
        self.answers.remove(id)
    }

    pub fn get(&self, id: &QuestionId) -> Option<ScaleLevel> {
        self.answers.get(id).copied()
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.answers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, ScaleLevel)> + '_ {
        self.answers.iter().map(|(id, level)| (*id, *level))
    }
}

impl FromIterator<(QuestionId, ScaleLevel)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, ScaleLevel)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

impl Extend<(QuestionId, ScaleLevel)> for AnswerSet {
    fn extend<I: IntoIterator<Item = (QuestionId, ScaleLevel)>>(&mut self, iter: I) {
        self.answers.extend(iter);
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Number of questions in each symptom group.
pub const QUESTIONS_PER_GROUP: u8 = 9;

/// Number of questions across both groups.
pub const QUESTION_COUNT: usize = 2 * QUESTIONS_PER_GROUP as usize;

/// A symptom group. Declaration order is catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Group {
    Inattention,
    Hyperactivity,
}

impl Group {
    pub const ALL: [Group; 2] = [Group::Inattention, Group::Hyperactivity];

    /// Prefix used in question column names (e.g. "Inattention 3").
    pub fn column_prefix(self) -> &'static str {
        match self {
            Group::Inattention => "Inattention",
            Group::Hyperactivity => "Hyperactivity",
        }
    }

    /// The group's question ids, in order.
    pub fn question_ids(self) -> impl Iterator<Item = QuestionId> {
        (1..=QUESTIONS_PER_GROUP).map(move |index| QuestionId { group: self, index })
    }
}

/// Identity of one question: its group plus a 1-based index within the group.
///
/// Serializes as its column name, so an answer map is a plain JSON object
/// keyed by `"Inattention 1"` .. `"Hyperactivity 9"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId {
    pub group: Group,
    pub index: u8,
}

impl QuestionId {
    pub fn new(group: Group, index: u8) -> Result<Self, CoreError> {
        let id = Self { group, index };
        if !id.is_valid() {
            return Err(CoreError::InvalidQuestionId(id.column_name()));
        }
        Ok(id)
    }

    /// Whether the index names one of the group's questions. Ids built from
    /// the public fields bypass [`QuestionId::new`], so check them here.
    pub fn is_valid(&self) -> bool {
        (1..=QUESTIONS_PER_GROUP).contains(&self.index)
    }

    /// Every question id, in catalog order.
    pub fn all() -> impl Iterator<Item = QuestionId> {
        Group::ALL.into_iter().flat_map(Group::question_ids)
    }

    pub fn column_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.group.column_prefix(), self.index)
    }
}

impl FromStr for QuestionId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidQuestionId(s.to_string());
        let (prefix, index) = s.trim().rsplit_once(' ').ok_or_else(invalid)?;
        let group = Group::ALL
            .into_iter()
            .find(|g| g.column_prefix() == prefix.trim())
            .ok_or_else(invalid)?;
        let index: u8 = index.parse().map_err(|_| invalid())?;
        QuestionId::new(group, index).map_err(|_| invalid())
    }
}

impl TryFrom<String> for QuestionId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.to_string()
    }
}

/// A question with its prompt in one language. Prompt text is display-only.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    #[ts(type = "string")]
    pub id: QuestionId,
    pub prompt: String,
}

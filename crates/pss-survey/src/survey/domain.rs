use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::scoring::{calculate_score, AnswerSheet, ScoringError, StressCategory};

/// Identifier wrapper for persisted responses; the store assigns the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponseId(pub String);

impl std::fmt::Display for ResponseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inbound payload shared by first submission and admin edits: respondent
/// name plus the full answer sheet. Edits always replace both together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveySubmission {
    #[serde(rename = "nama")]
    pub name: String,
    pub answers: AnswerSheet,
}

impl SurveySubmission {
    /// Validate the payload and compute the derived fields.
    ///
    /// This is the single place where `total_score` and `category` come into
    /// existence, so every write path recomputes them from the sheet rather
    /// than trusting values supplied by a caller.
    pub fn validate(self) -> Result<CompletedSurvey, SubmissionError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(SubmissionError::EmptyName);
        }

        let total_score = calculate_score(&self.answers)?;
        let category = StressCategory::from_score(total_score);

        Ok(CompletedSurvey {
            name,
            answers: self.answers,
            total_score,
            category,
        })
    }
}

/// Validation errors for inbound submissions. These are caller-facing and
/// map to a rejected request, never a stored record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("respondent name must not be empty")]
    EmptyName,
    #[error(transparent)]
    Incomplete(#[from] ScoringError),
}

/// A validated submission with its derived fields, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSurvey {
    pub name: String,
    pub answers: AnswerSheet,
    pub total_score: u8,
    pub category: StressCategory,
}

/// A persisted response as the store returns it.
///
/// `total_score` and `category` are denormalized caches of the answer sheet;
/// they stay recomputable because [`SurveySubmission::validate`] is the only
/// producer of stored values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub id: ResponseId,
    #[serde(rename = "nama")]
    pub name: String,
    pub answers: AnswerSheet,
    pub total_score: u8,
    pub category: StressCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

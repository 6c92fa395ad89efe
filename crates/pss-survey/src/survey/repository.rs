use serde::{Deserialize, Serialize};

use super::domain::{CompletedSurvey, ResponseId, ResponseRecord};
use super::scoring::{AnswerSheet, StressCategory};

/// Write payload for the `responses` collection, used verbatim for both
/// insert and full-replace update. The store assigns the id and timestamps.
///
/// Field names on the wire follow the store schema: `nama`, `answers`,
/// `total_score`, `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDraft {
    #[serde(rename = "nama")]
    pub name: String,
    pub answers: AnswerSheet,
    pub total_score: u8,
    pub category: StressCategory,
}

impl From<CompletedSurvey> for ResponseDraft {
    fn from(survey: CompletedSurvey) -> Self {
        Self {
            name: survey.name,
            answers: survey.answers,
            total_score: survey.total_score,
            category: survey.category,
        }
    }
}

/// Storage abstraction over the `responses` collection so the service can be
/// exercised against an in-memory store in tests and the demo.
pub trait ResponseRepository: Send + Sync {
    /// Insert one record; the store assigns `id`, `created_at`, and
    /// `updated_at`.
    fn insert(&self, draft: ResponseDraft) -> Result<ResponseRecord, RepositoryError>;

    /// All records, newest first by `created_at`.
    fn list(&self) -> Result<Vec<ResponseRecord>, RepositoryError>;

    fn fetch(&self, id: &ResponseId) -> Result<Option<ResponseRecord>, RepositoryError>;

    /// Replace the stored fields for `id` and refresh `updated_at`;
    /// `created_at` is preserved.
    fn update(&self, id: &ResponseId, draft: ResponseDraft)
        -> Result<ResponseRecord, RepositoryError>;

    fn delete(&self, id: &ResponseId) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("response not found")]
    NotFound,
    #[error("response store unavailable: {0}")]
    Unavailable(String),
}

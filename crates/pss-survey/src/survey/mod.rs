//! Perceived Stress Scale survey domain: the fixed question catalog, the
//! scoring engine, the response lifecycle behind a storage abstraction, and
//! the admin session flow.

pub mod catalog;
pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use catalog::{questions, scale_labels, Question, QUESTION_COUNT};
pub use domain::{
    CompletedSurvey, ResponseId, ResponseRecord, SubmissionError, SurveySubmission,
};
pub use repository::{RepositoryError, ResponseDraft, ResponseRepository};
pub use router::survey_router;
pub use scoring::{
    calculate_score, category_color, AnswerSheet, AnswerValue, ScoringError, StressCategory,
    MAX_ANSWER, MAX_SCORE,
};
pub use service::{SurveyService, SurveyServiceError};
pub use session::{
    AdminAccess, AdminAccessError, AdminSessionError, AdminSessionService, SessionStore,
    SessionStoreError,
};

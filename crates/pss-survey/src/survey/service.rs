use std::sync::Arc;

use super::domain::{ResponseId, ResponseRecord, SubmissionError, SurveySubmission};
use super::repository::{RepositoryError, ResponseRepository};

/// Service composing submission validation, the scoring engine, and the
/// response store. Every write path goes through
/// [`SurveySubmission::validate`], which keeps the stored `total_score` and
/// `category` consistent with the answer sheet.
pub struct SurveyService<R> {
    repository: Arc<R>,
}

impl<R> SurveyService<R>
where
    R: ResponseRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and persist a new response, returning the stored record.
    pub fn submit(&self, submission: SurveySubmission) -> Result<ResponseRecord, SurveyServiceError> {
        let completed = submission.validate()?;
        let stored = self.repository.insert(completed.into())?;
        Ok(stored)
    }

    /// All responses for the admin dashboard, newest first.
    pub fn list(&self) -> Result<Vec<ResponseRecord>, SurveyServiceError> {
        Ok(self.repository.list()?)
    }

    pub fn get(&self, id: &ResponseId) -> Result<ResponseRecord, SurveyServiceError> {
        let record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Full replace-on-edit: name and answers change together, and the
    /// derived fields are recomputed from the new sheet before the write.
    pub fn edit(
        &self,
        id: &ResponseId,
        submission: SurveySubmission,
    ) -> Result<ResponseRecord, SurveyServiceError> {
        let completed = submission.validate()?;
        let updated = self.repository.update(id, completed.into())?;
        Ok(updated)
    }

    pub fn delete(&self, id: &ResponseId) -> Result<(), SurveyServiceError> {
        self.repository.delete(id)?;
        Ok(())
    }
}

/// Error raised by the survey service.
#[derive(Debug, thiserror::Error)]
pub enum SurveyServiceError {
    #[error(transparent)]
    Validation(#[from] SubmissionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::survey::catalog::QUESTION_COUNT;
use crate::survey::domain::{ResponseId, ResponseRecord, SurveySubmission};
use crate::survey::repository::{RepositoryError, ResponseDraft, ResponseRepository};
use crate::survey::scoring::AnswerSheet;
use crate::survey::service::SurveyService;
use crate::survey::session::{
    AdminAccess, AdminSessionService, SessionStore, SessionStoreError,
};

pub(super) fn answers(values: [u8; QUESTION_COUNT]) -> AnswerSheet {
    AnswerSheet::from_values(values).expect("values within scale")
}

pub(super) fn submission(name: &str, values: [u8; QUESTION_COUNT]) -> SurveySubmission {
    SurveySubmission {
        name: name.to_string(),
        answers: answers(values),
    }
}

/// Uniform midpoint sheet: total 20, category Medium.
pub(super) fn midpoint_submission(name: &str) -> SurveySubmission {
    submission(name, [2; QUESTION_COUNT])
}

pub(super) fn build_service() -> (Arc<SurveyService<MemoryRepository>>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(SurveyService::new(repository.clone()));
    (service, repository)
}

pub(super) fn build_sessions(
    access_code: Option<&str>,
) -> (Arc<AdminSessionService<MemorySessions>>, Arc<MemorySessions>) {
    let store = Arc::new(MemorySessions::default());
    let sessions = Arc::new(AdminSessionService::new(
        AdminAccess::new(access_code.map(str::to_string)),
        store.clone(),
    ));
    (sessions, store)
}

/// Repository over a plain vector with deterministic store-assigned ids and
/// timestamps, so ordering assertions do not race the wall clock.
#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<Vec<ResponseRecord>>,
    sequence: AtomicU64,
}

impl MemoryRepository {
    fn next_stamp(&self) -> (u64, DateTime<Utc>) {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let stamp = DateTime::<Utc>::from_timestamp(1_700_000_000 + seq as i64, 0)
            .expect("timestamp within range");
        (seq, stamp)
    }
}

impl ResponseRepository for MemoryRepository {
    fn insert(&self, draft: ResponseDraft) -> Result<ResponseRecord, RepositoryError> {
        let (seq, stamp) = self.next_stamp();
        let record = ResponseRecord {
            id: ResponseId(format!("resp-{seq:06}")),
            name: draft.name,
            answers: draft.answers,
            total_score: draft.total_score,
            category: draft.category,
            created_at: stamp,
            updated_at: stamp,
        };
        self.records.lock().expect("lock").push(record.clone());
        Ok(record)
    }

    fn list(&self) -> Result<Vec<ResponseRecord>, RepositoryError> {
        let mut all = self.records.lock().expect("lock").clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    fn fetch(&self, id: &ResponseId) -> Result<Option<ResponseRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn update(
        &self,
        id: &ResponseId,
        draft: ResponseDraft,
    ) -> Result<ResponseRecord, RepositoryError> {
        let (_, stamp) = self.next_stamp();
        let mut guard = self.records.lock().expect("lock");
        let record = guard
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or(RepositoryError::NotFound)?;

        record.name = draft.name;
        record.answers = draft.answers;
        record.total_score = draft.total_score;
        record.category = draft.category;
        record.updated_at = stamp;

        Ok(record.clone())
    }

    fn delete(&self, id: &ResponseId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        let before = guard.len();
        guard.retain(|record| &record.id != id);
        if guard.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// Repository stub that reports the backing store as unreachable.
pub(super) struct UnavailableRepository;

impl ResponseRepository for UnavailableRepository {
    fn insert(&self, _draft: ResponseDraft) -> Result<ResponseRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ResponseRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &ResponseId) -> Result<Option<ResponseRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update(
        &self,
        _id: &ResponseId,
        _draft: ResponseDraft,
    ) -> Result<ResponseRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn delete(&self, _id: &ResponseId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

/// In-memory stand-in for the client-local flag store.
#[derive(Default)]
pub(super) struct MemorySessions {
    authenticated: AtomicBool,
}

impl SessionStore for MemorySessions {
    fn set_authenticated(&self, authenticated: bool) -> Result<(), SessionStoreError> {
        self.authenticated.store(authenticated, Ordering::Release);
        Ok(())
    }

    fn is_authenticated(&self) -> Result<bool, SessionStoreError> {
        Ok(self.authenticated.load(Ordering::Acquire))
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        self.authenticated.store(false, Ordering::Release);
        Ok(())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

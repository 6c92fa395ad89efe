use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use pss_survey::survey::{
    AnswerSheet, RepositoryError, ResponseDraft, ResponseId, ResponseRecord, ResponseRepository,
    SessionStore, SessionStoreError, QUESTION_COUNT,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local stand-in for the hosted `responses` collection. Ids and
/// timestamps are store-assigned, matching the hosted-store contract.
#[derive(Default)]
pub(crate) struct InMemoryResponseRepository {
    records: Mutex<Vec<ResponseRecord>>,
    sequence: AtomicU64,
}

impl ResponseRepository for InMemoryResponseRepository {
    fn insert(&self, draft: ResponseDraft) -> Result<ResponseRecord, RepositoryError> {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let now = Utc::now();
        let record = ResponseRecord {
            id: ResponseId(format!("resp-{seq:06}")),
            name: draft.name,
            answers: draft.answers,
            total_score: draft.total_score,
            category: draft.category,
            created_at: now,
            updated_at: now,
        };

        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.push(record.clone());
        Ok(record)
    }

    fn list(&self) -> Result<Vec<ResponseRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut all = guard.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    fn fetch(&self, id: &ResponseId) -> Result<Option<ResponseRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn update(
        &self,
        id: &ResponseId,
        draft: ResponseDraft,
    ) -> Result<ResponseRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let record = guard
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or(RepositoryError::NotFound)?;

        record.name = draft.name;
        record.answers = draft.answers;
        record.total_score = draft.total_score;
        record.category = draft.category;
        record.updated_at = Utc::now();

        Ok(record.clone())
    }

    fn delete(&self, id: &ResponseId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let before = guard.len();
        guard.retain(|record| &record.id != id);
        if guard.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// Process-local stand-in for the client-local admin flag store.
#[derive(Default)]
pub(crate) struct InMemorySessionStore {
    authenticated: AtomicBool,
}

impl SessionStore for InMemorySessionStore {
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

/// Parse a comma-separated answer list ("2,1,0,3,4,2,1,0,2,3") into a
/// complete sheet. Used as a clap value parser.
pub(crate) fn parse_answers(raw: &str) -> Result<AnswerSheet, String> {
    let mut values = [0u8; QUESTION_COUNT];
    let mut count = 0usize;

    for part in raw.split(',') {
        if count == QUESTION_COUNT {
            return Err(format!("expected exactly {QUESTION_COUNT} answers"));
        }
        let value = part
            .trim()
            .parse::<u8>()
            .map_err(|err| format!("failed to parse '{}' as an answer ({err})", part.trim()))?;
        values[count] = value;
        count += 1;
    }

    if count != QUESTION_COUNT {
        return Err(format!(
            "expected exactly {QUESTION_COUNT} answers, found {count}"
        ));
    }

    AnswerSheet::from_values(values).map_err(|err| err.to_string())
}

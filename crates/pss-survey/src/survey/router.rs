use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog;
use super::domain::{ResponseId, SurveySubmission};
use super::repository::{RepositoryError, ResponseRepository};
use super::service::{SurveyService, SurveyServiceError};
use super::session::{AdminAccessError, AdminSessionError, AdminSessionService, SessionStore};

/// Shared handler state: the survey service plus the admin session flow.
pub struct SurveyRouterState<R, S> {
    pub service: Arc<SurveyService<R>>,
    pub sessions: Arc<AdminSessionService<S>>,
}

impl<R, S> Clone for SurveyRouterState<R, S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            sessions: Arc::clone(&self.sessions),
        }
    }
}

/// Router builder exposing the questionnaire, response CRUD, and the admin
/// session endpoints.
pub fn survey_router<R, S>(
    service: Arc<SurveyService<R>>,
    sessions: Arc<AdminSessionService<S>>,
) -> Router
where
    R: ResponseRepository + 'static,
    S: SessionStore + 'static,
{
    let state = SurveyRouterState { service, sessions };

    Router::new()
        .route("/api/v1/questions", get(catalog_handler))
        .route(
            "/api/v1/responses",
            post(submit_handler::<R, S>).get(list_handler::<R, S>),
        )
        .route(
            "/api/v1/responses/:response_id",
            put(edit_handler::<R, S>).delete(delete_handler::<R, S>),
        )
        .route("/api/v1/admin/login", post(login_handler::<R, S>))
        .route("/api/v1/admin/logout", post(logout_handler::<R, S>))
        .route("/api/v1/admin/session", get(session_handler::<R, S>))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AdminLoginRequest {
    pub(crate) access_code: String,
}

pub(crate) async fn catalog_handler() -> Json<serde_json::Value> {
    Json(json!({
        "questions": catalog::questions().as_slice(),
        "scale_labels": catalog::scale_labels().as_slice(),
    }))
}

pub(crate) async fn submit_handler<R, S>(
    State(state): State<SurveyRouterState<R, S>>,
    Json(submission): Json<SurveySubmission>,
) -> Response
where
    R: ResponseRepository + 'static,
    S: SessionStore + 'static,
{
    match state.service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(SurveyServiceError::Validation(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<R, S>(State(state): State<SurveyRouterState<R, S>>) -> Response
where
    R: ResponseRepository + 'static,
    S: SessionStore + 'static,
{
    if let Err(denied) = require_admin(&state.sessions) {
        return denied;
    }

    match state.service.list() {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn edit_handler<R, S>(
    State(state): State<SurveyRouterState<R, S>>,
    Path(response_id): Path<String>,
    Json(submission): Json<SurveySubmission>,
) -> Response
where
    R: ResponseRepository + 'static,
    S: SessionStore + 'static,
{
    if let Err(denied) = require_admin(&state.sessions) {
        return denied;
    }

    let id = ResponseId(response_id);
    match state.service.edit(&id, submission) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(SurveyServiceError::Validation(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(SurveyServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "response not found", "id": id.0 });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn delete_handler<R, S>(
    State(state): State<SurveyRouterState<R, S>>,
    Path(response_id): Path<String>,
) -> Response
where
    R: ResponseRepository + 'static,
    S: SessionStore + 'static,
{
    if let Err(denied) = require_admin(&state.sessions) {
        return denied;
    }

    let id = ResponseId(response_id);
    match state.service.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(SurveyServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "response not found", "id": id.0 });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn login_handler<R, S>(
    State(state): State<SurveyRouterState<R, S>>,
    Json(payload): Json<AdminLoginRequest>,
) -> Response
where
    R: ResponseRepository + 'static,
    S: SessionStore + 'static,
{
    match state.sessions.login(&payload.access_code) {
        Ok(()) => (StatusCode::OK, Json(json!({ "authenticated": true }))).into_response(),
        Err(AdminSessionError::Access(error @ AdminAccessError::InvalidCode)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNAUTHORIZED, Json(payload)).into_response()
        }
        Err(AdminSessionError::Access(error @ AdminAccessError::NotConfigured)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn logout_handler<R, S>(State(state): State<SurveyRouterState<R, S>>) -> Response
where
    R: ResponseRepository + 'static,
    S: SessionStore + 'static,
{
    match state.sessions.logout() {
        Ok(()) => (StatusCode::OK, Json(json!({ "authenticated": false }))).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn session_handler<R, S>(State(state): State<SurveyRouterState<R, S>>) -> Response
where
    R: ResponseRepository + 'static,
    S: SessionStore + 'static,
{
    match state.sessions.is_authenticated() {
        Ok(authenticated) => {
            (StatusCode::OK, Json(json!({ "authenticated": authenticated }))).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

fn require_admin<S>(sessions: &AdminSessionService<S>) -> Result<(), Response>
where
    S: SessionStore + 'static,
{
    match sessions.is_authenticated() {
        Ok(true) => Ok(()),
        Ok(false) => {
            let payload = json!({ "error": "admin session required" });
            Err((StatusCode::UNAUTHORIZED, Json(payload)).into_response())
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response())
        }
    }
}

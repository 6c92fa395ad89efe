use super::common::*;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::survey::router::survey_router;
use crate::survey::scoring::AnswerSheet;

fn build_router(access_code: Option<&str>) -> axum::Router {
    let (service, _repository) = build_service();
    let (sessions, _store) = build_sessions(access_code);
    survey_router(service, sessions)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize")))
        .expect("request")
}

async fn login(router: &axum::Router, code: &str) {
    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/admin/login",
            json!({ "access_code": code }),
        ))
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn questions_endpoint_serves_the_catalog() {
    let router = build_router(Some("s3cret"));

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/questions")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["questions"].as_array().expect("array").len(), 10);
    assert_eq!(payload["scale_labels"].as_array().expect("array").len(), 5);
    assert_eq!(payload["questions"][3]["is_reverse"], json!(true));
}

#[tokio::test]
async fn post_responses_returns_the_scored_record() {
    let router = build_router(Some("s3cret"));

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/responses",
            serde_json::to_value(midpoint_submission("Ardi")).expect("serialize"),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["nama"], json!("Ardi"));
    assert_eq!(payload["total_score"], json!(20));
    assert_eq!(payload["category"], json!("Medium"));
    assert!(payload.get("id").is_some());
    assert!(payload.get("created_at").is_some());
}

#[tokio::test]
async fn post_responses_rejects_incomplete_sheets() {
    let router = build_router(Some("s3cret"));

    let submission = crate::survey::domain::SurveySubmission {
        name: "Sari".to_string(),
        answers: AnswerSheet::empty(),
    };

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/responses",
            serde_json::to_value(&submission).expect("serialize"),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("message")
        .contains("has not been answered"));
}

#[tokio::test]
async fn list_requires_an_admin_session() {
    let router = build_router(Some("s3cret"));

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/responses")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_can_list_after_login() {
    let router = build_router(Some("s3cret"));

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/responses",
            serde_json::to_value(midpoint_submission("Ardi")).expect("serialize"),
        ))
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::CREATED);

    login(&router, "s3cret").await;

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/responses")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let records = payload.as_array().expect("array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["nama"], json!("Ardi"));
}

#[tokio::test]
async fn wrong_access_code_is_unauthorized() {
    let router = build_router(Some("s3cret"));

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/admin/login",
            json!({ "access_code": "wrong" }),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_access_code_configuration_surfaces_at_login() {
    let router = build_router(None);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/admin/login",
            json!({ "access_code": "anything" }),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("message")
        .contains("not configured"));
}

#[tokio::test]
async fn edit_recomputes_the_stored_derived_fields() {
    let router = build_router(Some("s3cret"));

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/responses",
            serde_json::to_value(midpoint_submission("Budi")).expect("serialize"),
        ))
        .await
        .expect("router dispatch");
    let stored = read_json_body(response).await;
    let id = stored["id"].as_str().expect("id").to_string();

    login(&router, "s3cret").await;

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/responses/{id}"),
            serde_json::to_value(submission("Budi", [4, 4, 4, 0, 0, 4, 0, 0, 4, 4]))
                .expect("serialize"),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total_score"], json!(40));
    assert_eq!(payload["category"], json!("High"));
}

#[tokio::test]
async fn edit_of_unknown_id_is_not_found() {
    let router = build_router(Some("s3cret"));
    login(&router, "s3cret").await;

    let response = router
        .oneshot(json_request(
            "PUT",
            "/api/v1/responses/resp-999999",
            serde_json::to_value(midpoint_submission("Ghost")).expect("serialize"),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_the_response() {
    let router = build_router(Some("s3cret"));

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/responses",
            serde_json::to_value(midpoint_submission("Drop")).expect("serialize"),
        ))
        .await
        .expect("router dispatch");
    let stored = read_json_body(response).await;
    let id = stored["id"].as_str().expect("id").to_string();

    login(&router, "s3cret").await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/responses/{id}"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/responses")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    let payload = read_json_body(response).await;
    assert!(payload.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn logout_drops_the_admin_session() {
    let router = build_router(Some("s3cret"));
    login(&router, "s3cret").await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/admin/logout")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/admin/session")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    let payload = read_json_body(response).await;
    assert_eq!(payload["authenticated"], json!(false));
}

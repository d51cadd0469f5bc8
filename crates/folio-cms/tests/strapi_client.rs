//! StrapiClient against a stub content API.

mod common;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{TimeZone, Utc};
use common::{dead_base_url, serve, Seen};
use folio_cms::{ContentApi, StrapiClient};
use folio_common::{ContactSubmission, FolioError};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn projects_body() -> Value {
    json!({
        "data": [
            {
                "id": 1,
                "title": "Projet Web",
                "description": "Site vitrine moderne",
                "link": "https://example.com/web",
                "cover": { "formats": { "medium": { "url": "/uploads/medium_web.png" } } },
                "categories": [{ "id": 1, "name": "Web" }]
            },
            {
                "id": 2,
                "title": "Projet Mobile",
                "description": "Application React Native",
                "link": "https://example.com/mobile",
                "cover": { "formats": { "medium": { "url": "/uploads/medium_mobile.png" } } },
                "categories": [{ "id": 2, "name": "Mobile" }]
            }
        ],
        "meta": {}
    })
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Bonjour".into(),
        message: "Un message".into(),
        date: Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap(),
    }
}

#[tokio::test]
async fn list_projects_requests_expanded_relations() {
    let seen = Seen::default();
    let router = Router::new()
        .route(
            "/api/projets",
            get(|State(seen): State<Seen>, RawQuery(q): RawQuery| async move {
                seen.lock().unwrap().push(Value::from(q.unwrap_or_default()));
                Json(projects_body())
            }),
        )
        .with_state(seen.clone());
    let base = serve(router).await;

    let projects = StrapiClient::new(base).list_projects().await.unwrap();

    let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Projet Web", "Projet Mobile"]);
    assert_eq!(
        seen.lock().unwrap().clone(),
        vec![Value::from("populate=cover&populate=categories")]
    );
}

#[tokio::test]
async fn list_projects_non_success_is_status_error() {
    let router = Router::new().route(
        "/api/projets",
        get(|| async { (StatusCode::FORBIDDEN, Json(json!({"error": {"message": "Forbidden"}}))) }),
    );
    let base = serve(router).await;

    let err = StrapiClient::new(base).list_projects().await.unwrap_err();
    match err {
        FolioError::Status { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Forbidden");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn list_projects_with_changed_shape_fails_clearly() {
    let router = Router::new().route(
        "/api/projets",
        get(|| async {
            Json(json!({"data": [{"id": 4, "title": "t", "link": "l", "cover": {"formats": {}}}]}))
        }),
    );
    let base = serve(router).await;

    let err = StrapiClient::new(base).list_projects().await.unwrap_err();
    assert!(matches!(err, FolioError::Decode { path: "cover.formats.medium", .. }), "got {err:?}");
}

#[tokio::test]
async fn list_projects_transport_failure_is_http_error() {
    let err = StrapiClient::new(dead_base_url().await).list_projects().await.unwrap_err();
    assert!(matches!(err, FolioError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn create_contact_posts_data_envelope() {
    let seen = Seen::default();
    let router = Router::new()
        .route(
            "/api/contacts",
            post(|State(seen): State<Seen>, Json(body): Json<Value>| async move {
                seen.lock().unwrap().push(body);
                (StatusCode::CREATED, Json(json!({"data": {"id": 42}, "meta": {}})))
            }),
        )
        .with_state(seen.clone());
    let base = serve(router).await;

    let persisted = StrapiClient::new(base).create_contact(&submission()).await.unwrap();

    assert_eq!(persisted.id, Some(42));
    assert_eq!(
        seen.lock().unwrap().clone(),
        vec![json!({
            "data": {
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Bonjour",
                "message": "Un message",
                "date": "2024-06-01T09:30:00.000Z"
            }
        })]
    );
}

#[tokio::test]
async fn create_contact_rejection_carries_strapi_message() {
    let router = Router::new().route(
        "/api/contacts",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"data": null, "error": {"status": 400, "name": "ValidationError", "message": "email must be a valid email"}})),
            )
        }),
    );
    let base = serve(router).await;

    let err = StrapiClient::new(base).create_contact(&submission()).await.unwrap_err();
    assert_eq!(err.service_message().as_deref(), Some("email must be a valid email"));
}

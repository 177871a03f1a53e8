//! HTTP server for the Roster record service.
//!
//! Exposes create, read, update, delete and list over a single in-memory
//! [`RecordStore`](roster_store::RecordStore), plus health and info probes.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::HealthResponse;
pub use router::{build_router, endpoints, AppState};
pub use server::RosterServer;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use roster_store::InMemoryRecordStore;
    use roster_types::{Record, Status};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn app() -> Router {
        build_router(Arc::new(InMemoryRecordStore::new()))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(v) => builder
                .header("content-type", "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> StatusCode {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.clone().oneshot(request).await.unwrap().status()
    }

    /// A draft written as a JSON array in field order.
    const POSITIONAL_DRAFT: &str = r#"["jdoe","Jane Doe",16,"10","bg","suspended"]"#;

    fn jane() -> Value {
        json!({
            "username": "jdoe",
            "name": "Jane Doe",
            "age": 16,
            "grade": "10",
            "status": "new"
        })
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn info_endpoint_counts_records() {
        let app = app();
        send(&app, Method::POST, "/records", Some(jane())).await;
        let (status, body) = send(&app, Method::GET, "/info", None).await;
        assert_eq!(status, StatusCode::OK);
        let info: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(info["name"], "roster-server");
        assert_eq!(info["records"], 1);
    }

    // -----------------------------------------------------------------------
    // Record lifecycle
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn create_update_delete_lifecycle() {
        let app = app();

        let (status, body) = send(&app, Method::POST, "/records", Some(jane())).await;
        assert_eq!(status, StatusCode::OK);
        let created: Record = serde_json::from_slice(&body).unwrap();
        assert!(!created.id.is_zero());
        assert_eq!(created.status, Status::New);
        assert_eq!(created.created_at, created.updated_at);

        let mut suspended = jane();
        suspended["status"] = json!("suspended");
        let uri = format!("/records/{}", created.id);
        let (status, body) = send(&app, Method::PUT, &uri, Some(suspended)).await;
        assert_eq!(status, StatusCode::OK);
        let updated: Record = serde_json::from_slice(&body).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.status, Status::Suspended);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.enrollment_date, created.enrollment_date);
        assert!(updated.updated_at > created.updated_at);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            String::from_utf8(body).unwrap(),
            format!("record not found: {}", created.id)
        );
    }

    #[tokio::test]
    async fn get_returns_created_record() {
        let app = app();
        let (_, body) = send(&app, Method::POST, "/records", Some(jane())).await;
        let created: Record = serde_json::from_slice(&body).unwrap();

        let (status, body) = send(&app, Method::GET, &format!("/records/{}", created.id), None).await;
        assert_eq!(status, StatusCode::OK);
        let fetched: Record = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn client_supplied_id_and_timestamps_are_ignored() {
        let app = app();
        let mut body = jane();
        body["id"] = json!(0);
        body["created_at"] = json!("1999-01-01T00:00:00Z");
        let (status, bytes) = send(&app, Method::POST, "/records", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        let created: Record = serde_json::from_slice(&bytes).unwrap();
        assert!(!created.id.is_zero());
        assert_ne!(created.created_at.to_rfc3339(), "1999-01-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn list_reflects_creates_and_deletes() {
        let app = app();
        let mut ids = Vec::new();
        for _ in 0..3 {
            let (_, body) = send(&app, Method::POST, "/records", Some(jane())).await;
            let rec: Record = serde_json::from_slice(&body).unwrap();
            ids.push(rec.id);
        }
        send(&app, Method::DELETE, &format!("/records/{}", ids[1]), None).await;

        let (status, body) = send(&app, Method::GET, "/records", None).await;
        assert_eq!(status, StatusCode::OK);
        let listed: Vec<Record> = serde_json::from_slice(&body).unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|r| r.id != ids[1]));
    }

    #[tokio::test]
    async fn empty_list_is_json_array() {
        let (status, body) = send(&app(), Method::GET, "/records", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"[]");
    }

    // -----------------------------------------------------------------------
    // Error mapping
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn missing_record_is_404_for_every_verb() {
        let app = app();
        let (status, _) = send(&app, Method::GET, "/records/424242", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, Method::PUT, "/records/424242", Some(jane())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, Method::DELETE, "/records/424242", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_of_missing_record_does_not_create_it() {
        let app = app();
        send(&app, Method::PUT, "/records/5", Some(jane())).await;
        let (_, body) = send(&app, Method::GET, "/records", None).await;
        assert_eq!(body, b"[]");
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let app = app();
        assert_eq!(
            send_raw(&app, Method::POST, "/records", "{not json").await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            send_raw(&app, Method::POST, "/records", r#"{"age":"sixteen"}"#).await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            send_raw(&app, Method::POST, "/records", r#"{"status":"expelled"}"#).await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            send_raw(&app, Method::POST, "/records", "[]").await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            send_raw(&app, Method::POST, "/records", POSITIONAL_DRAFT).await,
            StatusCode::BAD_REQUEST
        );
        let (_, body) = send(&app, Method::GET, "/records", None).await;
        assert_eq!(body, b"[]");
    }

    #[tokio::test]
    async fn malformed_update_leaves_record_untouched() {
        let app = app();
        let (_, body) = send(&app, Method::POST, "/records", Some(jane())).await;
        let created: Record = serde_json::from_slice(&body).unwrap();
        let uri = format!("/records/{}", created.id);

        assert_eq!(
            send_raw(&app, Method::PUT, &uri, "42").await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            send_raw(&app, Method::PUT, &uri, "[]").await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            send_raw(&app, Method::PUT, &uri, POSITIONAL_DRAFT).await,
            StatusCode::BAD_REQUEST
        );
        let (_, body) = send(&app, Method::GET, &uri, None).await;
        let fetched: Record = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn missing_content_type_is_400() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/records")
            .body(Body::from(jane().to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_numeric_id_is_400() {
        let app = app();
        let (status, _) = send(&app, Method::GET, "/records/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = send(&app, Method::DELETE, "/records/-1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = send(&app, Method::PUT, "/records/abc", Some(jane())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn exhausted_id_space_is_500() {
        let store = InMemoryRecordStore::with_config(roster_store::StoreConfig {
            id_space: 1,
            ..Default::default()
        });
        let app = build_router(Arc::new(store));
        let (status, _) = send(&app, Method::POST, "/records", Some(jane())).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, Method::POST, "/records", Some(jane())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_yield_distinct_ids() {
        let app = app();
        let tasks: Vec<_> = (0..64)
            .map(|_| {
                let app = app.clone();
                tokio::spawn(async move {
                    let (status, body) = send(&app, Method::POST, "/records", Some(jane())).await;
                    assert_eq!(status, StatusCode::OK);
                    serde_json::from_slice::<Record>(&body).unwrap().id
                })
            })
            .collect();

        let mut ids = std::collections::HashSet::new();
        for task in tasks {
            assert!(ids.insert(task.await.unwrap()));
        }
        let (_, body) = send(&app, Method::GET, "/records", None).await;
        let listed: Vec<Record> = serde_json::from_slice(&body).unwrap();
        assert_eq!(listed.len(), 64);
    }
}

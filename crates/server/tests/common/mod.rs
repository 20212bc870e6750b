#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Method, Request, StatusCode, header};
use hackathons_server::api::{AppState, create_router};
use hackathons_server::config::ServerConfig;
use hackathons_server::db::init_pool_and_migrate;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@hackathonspain.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const PUBLIC_BASE_URL: &str = "http://test.local";

pub async fn setup_test_db() -> DatabaseConnection {
    init_pool_and_migrate("sqlite::memory:")
        .await
        .expect("in-memory database should migrate")
}

pub struct TestApp {
    pub router: Router,
    pub uploads: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let uploads = tempfile::tempdir().expect("create upload dir");

        let mut config = ServerConfig::default();
        config.database_url = "sqlite::memory:".to_string();
        config.uploads.dir = uploads.path().to_path_buf();
        config.uploads.public_base_url = PUBLIC_BASE_URL.to_string();

        let db = setup_test_db().await;
        let state = Arc::new(AppState::new(db, &config).expect("build app state"));
        let router = create_router(state, &config);

        Self { router, uploads }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Bytes) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read response body");
        (status, body)
    }

    pub async fn json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        let (status, bytes) = self.send(request).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response should be JSON")
        };
        (status, value)
    }

    /// Sends `body` as-is, with an optional content type, and decodes the
    /// JSON response.
    pub async fn raw(
        &self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder
            .body(Body::from(body.to_string()))
            .expect("build request");

        let (status, bytes) = self.send(request).await;
        let value = serde_json::from_slice(&bytes).expect("response should be JSON");
        (status, value)
    }

    pub async fn login(&self) -> String {
        let (status, body) = self
            .json(
                Method::POST,
                "/api/admin/login",
                None,
                Some(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "admin login failed: {body}");
        body["token"]
            .as_str()
            .expect("login should return a token")
            .to_string()
    }

    /// Submits a hackathon and returns the created row.
    pub async fn submit(&self, body: Value) -> Value {
        let (status, response) = self
            .json(Method::POST, "/api/hackathons", None, Some(body))
            .await;
        assert_eq!(status, StatusCode::CREATED, "submission failed: {response}");
        response["hackathon"].clone()
    }

    pub async fn set_status(&self, token: &str, id: i64, status: &str) -> Value {
        let (code, response) = self
            .json(
                Method::PATCH,
                &format!("/api/hackathons/{id}"),
                Some(token),
                Some(json!({ "status": status })),
            )
            .await;
        assert_eq!(code, StatusCode::OK, "status change failed: {response}");
        response["hackathon"].clone()
    }
}

pub fn devfest() -> Value {
    json!({
        "name": "DevFest",
        "start_date": "2025-03-01",
        "end_date": "2025-03-02",
        "location": "Asunción",
        "venue": "Tech Hub",
        "organizer_name": "Ana",
        "organizer_email": "ana@example.com"
    })
}

pub fn hackathon_named(name: &str, start: &str, end: &str) -> Value {
    let mut body = devfest();
    body["name"] = json!(name);
    body["start_date"] = json!(start);
    body["end_date"] = json!(end);
    body
}

pub fn multipart_body(boundary: &str, file_name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(data.len() + 256);
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

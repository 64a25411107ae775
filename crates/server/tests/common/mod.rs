//! Common test utilities for exercising the API in-process.
//!
//! The fixture writes a real catalog source file into a temp directory,
//! loads it through the normal startup path, and wires the router exactly
//! as `main` does, without a network listener.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use viewdiful_core::{Catalog, CatalogConfig, Config, VideoRecord};
use viewdiful_server::api::create_router;
use viewdiful_server::state::AppState;

/// In-process test server.
pub struct TestFixture {
    /// The axum router for testing
    pub router: Router,
    /// Holds the catalog source file for the fixture's lifetime
    #[allow(dead_code)]
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Raw body text (plain-text error bodies, sitemap XML)
    pub text: String,
    /// Body parsed as JSON, `Value::Null` when not JSON
    pub body: Value,
}

impl TestFixture {
    /// Fixture over the three-record scenario catalog.
    pub fn new() -> Self {
        Self::with_records(fixtures::scenario_records())
    }

    /// Fixture over an arbitrary set of records.
    pub fn with_records(records: Vec<VideoRecord>) -> Self {
        let source = serde_json::to_string(&records).expect("Failed to serialize records");
        Self::with_source(&source)
    }

    /// Fixture over a raw catalog source string (e.g. "[]").
    pub fn with_source(source: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let catalog_path = temp_dir.path().join("videos.json");
        std::fs::write(&catalog_path, source).expect("Failed to write catalog source");

        let config = Config {
            catalog: CatalogConfig {
                path: catalog_path.clone(),
            },
            ..Config::default()
        };

        let catalog = Catalog::load(&catalog_path).expect("Failed to load catalog");
        let state = Arc::new(AppState::new(config, catalog));
        let router = create_router(state);

        Self { router, temp_dir }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.request(request).await
    }

    /// Send a GET request carrying an Origin header (CORS checks).
    #[allow(dead_code)]
    pub async fn get_with_origin(&self, path: &str, origin: &str) -> TestResponse {
        let request = Request::builder()
            .uri(path)
            .header("Origin", origin)
            .body(Body::empty())
            .unwrap();
        self.request(request).await
    }

    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            text,
            body,
        }
    }
}

/// Catalog fixtures shared by the integration tests.
pub mod fixtures {
    use viewdiful_core::{Segment, VideoRecord};

    pub fn record(id: &str, title: &str) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            title: title.to_string(),
            total_duration_seconds: 0,
            segments: Vec::new(),
            thumbnail_url: String::new(),
        }
    }

    /// Three records: a1 "Cats", a2 "Dogs", a3 "cat video".
    pub fn scenario_records() -> Vec<VideoRecord> {
        let mut cats = record("a1", "Cats");
        cats.total_duration_seconds = 300;
        cats.segments = vec![Segment {
            part: 1,
            start_seconds: 0,
            duration_seconds: 300,
        }];
        cats.thumbnail_url = "https://cdn.example.com/a1.jpg".to_string();

        vec![cats, record("a2", "Dogs"), record("a3", "cat video")]
    }

    /// `n` records with ids "v0".."v{n-1}".
    #[allow(dead_code)]
    pub fn bulk_records(n: usize) -> Vec<VideoRecord> {
        (0..n)
            .map(|i| record(&format!("v{}", i), &format!("Video {}", i)))
            .collect()
    }
}

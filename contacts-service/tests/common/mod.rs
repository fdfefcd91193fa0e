#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use contacts_service::config::ContactsConfig;
use contacts_service::services::{ContactStore, MockContactStore};
use contacts_service::startup::{build_router, Application};
use contacts_service::AppState;
use serde_json::Value;
use service_core::config::Environment;
use std::sync::Arc;
use tower::util::ServiceExt;

pub fn test_config() -> ContactsConfig {
    let mut config = ContactsConfig::from_env().expect("Failed to load configuration");
    config.common.port = 0; // Random port for testing
    config.environment = Environment::Development;
    config.mongodb.uri = None;
    config
}

pub fn router_with(store: Arc<dyn ContactStore>) -> Router {
    build_router(AppState::new(test_config(), store))
}

pub fn mock_router() -> (Router, Arc<MockContactStore>) {
    let store = Arc::new(MockContactStore::new());
    (router_with(store.clone()), store)
}

/// Sends one request through the router and returns status and JSON body
/// (`Value::Null` for an empty or non-JSON body).
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<MockContactStore>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store = Arc::new(MockContactStore::new());
        let app = Application::build(test_config(), store.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
        }
    }

    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }
}

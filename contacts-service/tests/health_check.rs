mod common;

use common::TestApp;
use serde_json::Value;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "OK");
    assert_eq!(body["environment"], "development");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
}

#[tokio::test]
async fn root_returns_plain_text_banner() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .get(&app.address)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(response.text().await.unwrap(), "CSE341 Contact API is running");
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .get(format!("{}/nope/nothing-here", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Route not found");
    assert!(body["error"].as_str().unwrap().contains("/nope/nothing-here"));
}

#[tokio::test]
async fn unsupported_method_on_known_path_is_json_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .patch(format!("{}/contacts", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Route not found");
    assert!(body["error"].as_str().unwrap().contains("/contacts"));
}

#[tokio::test]
async fn bare_options_request_is_ok() {
    let app = TestApp::spawn().await;

    for path in ["/contacts", "/contacts/60564fcb5450ae0015b90570", "/nowhere"] {
        let response = app
            .client()
            .request(reqwest::Method::OPTIONS, format!("{}{}", app.address, path))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 200, "OPTIONS {}", path);
    }
}

#[tokio::test]
async fn openapi_document_describes_contact_routes() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .get(format!("{}/openapi.json", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let doc: Value = response.json().await.unwrap();
    assert_eq!(doc["info"]["title"], "Contact API");
    assert!(doc["paths"]["/contacts"]["get"].is_object());
    assert!(doc["paths"]["/contacts"]["post"].is_object());
    assert!(doc["paths"]["/contacts/{id}"]["put"].is_object());
    assert!(doc["paths"]["/contacts/{id}"]["delete"].is_object());
    assert!(doc["components"]["schemas"]["ContactPayload"].is_object());
    assert!(doc["components"]["schemas"]["Contact"].is_object());
}

#[tokio::test]
async fn swagger_ui_is_served() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .get(format!("{}/api-docs/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains("swagger"));
}

#[tokio::test]
async fn request_id_is_echoed() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .get(format!("{}/health", app.address))
        .header("x-request-id", "test-request-42")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.headers()["x-request-id"], "test-request-42");
}

#[tokio::test]
async fn request_id_is_generated_when_absent() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    let request_id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .request(reqwest::Method::OPTIONS, format!("{}/contacts", app.address))
        .header("origin", "http://example.com")
        .header("access-control-request-method", "PUT")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    let methods = response.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .to_string();
    assert!(methods.contains("PUT"));
    assert!(methods.contains("DELETE"));
}

#[tokio::test]
async fn metrics_endpoint_is_plain_text() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .get(format!("{}/metrics", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn contacts_round_trip_over_http() {
    let app = TestApp::spawn().await;
    let client = app.client();

    let created: Value = client
        .post(format!("{}/contacts", app.address))
        .json(&serde_json::json!({
            "firstName": "Alice",
            "lastName": "Johnson",
            "email": "alice.johnson@example.com",
            "favoriteColor": "Red",
            "birthday": "1992-09-10"
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    let id = created["contactId"].as_str().unwrap();
    assert_eq!(app.store.len(), 1);

    let fetched: Value = client
        .get(format!("{}/contacts/{}", app.address, id))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["_id"], id);
    assert_eq!(fetched["favoriteColor"], "Red");
}

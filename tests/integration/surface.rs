//! Integration tests for the service routes and CORS

use super::*;
use reqwest::{Method, StatusCode};

#[tokio::test]
async fn test_root_lists_routes() {
    let anthropic = MockServer::start().await;
    let gateway = spawn_gateway(&anthropic, None, Duration::from_secs(5)).await;

    let body: Value = gateway
        .client
        .get(gateway.url("/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
    let paths: Vec<&str> = body["routes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|route| route["path"].as_str().unwrap())
        .collect();
    assert!(paths.contains(&"/api/quiz"));
    assert!(paths.contains(&"/api/text-to-speech"));
}

#[tokio::test]
async fn test_config_reports_keys() {
    let anthropic = MockServer::start().await;
    let openai = MockServer::start().await;

    let without_openai = spawn_gateway(&anthropic, None, Duration::from_secs(5)).await;
    let body: Value = without_openai
        .client
        .get(without_openai.url("/api/test-config"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"openai_key_set": false, "anthropic_key_set": true}));

    let with_openai = spawn_gateway(&anthropic, Some(&openai), Duration::from_secs(5)).await;
    let body: Value = with_openai
        .client
        .get(with_openai.url("/api/test-config"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"openai_key_set": true, "anthropic_key_set": true}));
}

#[tokio::test]
async fn test_cors_allows_frontend_origin() {
    let anthropic = MockServer::start().await;
    let gateway = spawn_gateway(&anthropic, None, Duration::from_secs(5)).await;

    let response = gateway
        .client
        .request(Method::OPTIONS, gateway.url("/api/chat"))
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type,x-session")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://localhost:3000"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(
        headers["access-control-allow-headers"],
        "content-type,x-session"
    );
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let anthropic = MockServer::start().await;
    let gateway = spawn_gateway(&anthropic, None, Duration::from_secs(5)).await;

    let response = gateway
        .client
        .get(gateway.url("/api/test-config"))
        .header("origin", "https://evil.example")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

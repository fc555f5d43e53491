mod common;

use common::mock_gemini::{safety_block, text_response, MockGemini};
use kawi::config::{RemoteConfig, SecureString};
use kawi::source::{PoemSource, RemoteSource};

fn remote_for(server: &MockGemini) -> RemoteSource {
    let config = RemoteConfig {
        base_url: server.base_url.clone(),
        ..RemoteConfig::default()
    };
    RemoteSource::new(&config, SecureString::new("test-key".to_string()))
}

#[tokio::test]
async fn well_formed_response_yields_the_generated_text() {
    let server = MockGemini::spawn(200, text_response("บทกวีจากโมเดล")).await;
    let source = remote_for(&server);

    let poem = source
        .generate("north", &["ดอกไม้".to_string()])
        .await
        .unwrap();
    assert_eq!(poem, "บทกวีจากโมเดล");
}

#[tokio::test]
async fn request_carries_prompt_path_and_api_key() {
    let server = MockGemini::spawn(200, text_response("ok")).await;
    let source = remote_for(&server);

    source
        .generate("north", &["มิตรภาพ".to_string()])
        .await
        .unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    assert_eq!(request.path, "/v1/models/gemini-pro:generateContent");
    assert_eq!(request.api_key.as_deref(), Some("test-key"));

    let text = request.body["contents"][0]["parts"][0]["text"]
        .as_str()
        .expect("prompt text missing");
    assert!(text.contains("short rhyming"));
    assert!(text.contains("northern thailand"));
    assert!(text.contains("มิตรภาพ"));
}

#[tokio::test]
async fn safety_block_maps_to_failure_with_reason() {
    let server = MockGemini::spawn(200, safety_block("SAFETY", "blocked by filter")).await;
    let source = remote_for(&server);

    let error = source.generate("south", &[]).await.unwrap_err();
    let message = error.to_string();
    assert!(message.contains("SAFETY"));
    assert!(message.contains("blocked by filter"));
}

#[tokio::test]
async fn empty_response_maps_to_unknown_block() {
    let server = MockGemini::spawn(200, serde_json::json!({})).await;
    let source = remote_for(&server);

    let error = source.generate("south", &[]).await.unwrap_err();
    assert!(error.to_string().contains("unknown"));
}

#[tokio::test]
async fn http_error_status_is_surfaced() {
    let server = MockGemini::spawn(401, serde_json::json!({"error": "bad key"})).await;
    let source = remote_for(&server);

    let error = source.generate("central", &[]).await.unwrap_err();
    assert!(error.to_string().contains("401"));
}

#[tokio::test]
async fn connection_failure_maps_to_transport_error() {
    // Bind then drop a listener so the port is free but unserved.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = RemoteConfig {
        base_url: format!("http://{}", addr),
        connect_timeout_seconds: 1,
        ..RemoteConfig::default()
    };
    let source = RemoteSource::new(&config, SecureString::new("test-key".to_string()));

    assert!(source.generate("north", &[]).await.is_err());
}

#[tokio::test]
async fn exactly_one_request_per_attempt_even_on_failure() {
    let server = MockGemini::spawn(500, serde_json::json!({"error": "boom"})).await;
    let source = remote_for(&server);

    let _ = source.generate("north", &[]).await;
    assert_eq!(server.requests().len(), 1, "no retry is expected");
}

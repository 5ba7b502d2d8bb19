//! Integration tests for phrase and letter generation.
//!
//! These tests inject the mock text provider, so no Gemini credentials
//! are needed; MongoDB must still be running.
//! Run with: cargo test -p card-service --test generation_test

use card_service::config::CardConfig;
use card_service::services::providers::mock::MockTextProvider;
use card_service::startup::Application;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Spawn the application with the mock provider and return the port.
async fn spawn_app() -> u16 {
    std::env::set_var("ENVIRONMENT", "test");
    std::env::set_var("APP__PORT", "0");
    std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");
    std::env::set_var("MONGODB_DATABASE", "card_test_db");
    std::env::set_var("GOOGLE_API_KEY", "test-api-key");
    std::env::set_var("CARD_TEXT_MODEL", "gemini-1.5-flash");

    let config = CardConfig::load().expect("Failed to load config");
    let app = Application::build_with_provider(config, Arc::new(MockTextProvider::new(true)))
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn create_phrase_echoes_client_image_url() {
    if std::env::var("SKIP_MONGO_TESTS").is_ok() {
        eprintln!("Skipping test: SKIP_MONGO_TESTS is set");
        return;
    }

    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/create/phrase", port))
        .json(&json!({
            "target": "어머니",
            "sentiment": "고마움",
            "type": "문구",
            "image_url": "https://cards.example.com/a.png"
        }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let phrase = body["phrase"].as_str().expect("phrase not a string");
    assert!(phrase.starts_with("Mock response for:"));
    assert_eq!(body["imgURL"], "https://cards.example.com/a.png");
}

#[tokio::test]
async fn create_phrase_looks_up_image_when_none_given() {
    if std::env::var("SKIP_MONGO_TESTS").is_ok() {
        eprintln!("Skipping test: SKIP_MONGO_TESTS is set");
        return;
    }

    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/create/phrase", port))
        .json(&json!({
            "target": "동생",
            "sentiment": "기쁨",
            "type": "문구"
        }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    // The bucket may or may not be stocked; either way the field is a
    // string, never a fault.
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["imgURL"].is_string());
}

#[tokio::test]
async fn create_phrase_rejects_blank_fields() {
    if std::env::var("SKIP_MONGO_TESTS").is_ok() {
        eprintln!("Skipping test: SKIP_MONGO_TESTS is set");
        return;
    }

    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/create/phrase", port))
        .json(&json!({
            "target": "",
            "sentiment": "고마움",
            "type": "문구"
        }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn create_letter_ai_returns_letter() {
    if std::env::var("SKIP_MONGO_TESTS").is_ok() {
        eprintln!("Skipping test: SKIP_MONGO_TESTS is set");
        return;
    }

    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/create/letter/AI", port))
        .json(&json!({ "context": "첫 출근을 축하하는 편지" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let letter = body["letter"].as_str().expect("letter not a string");
    assert!(letter.starts_with("Mock response for:"));
}

#[tokio::test]
async fn create_letter_custom_returns_letter() {
    if std::env::var("SKIP_MONGO_TESTS").is_ok() {
        eprintln!("Skipping test: SKIP_MONGO_TESTS is set");
        return;
    }

    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/create/letter/custom", port))
        .json(&json!({ "context": "고마워요 항상" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["letter"].is_string());
}

#[tokio::test]
async fn create_letter_rejects_unknown_type() {
    if std::env::var("SKIP_MONGO_TESTS").is_ok() {
        eprintln!("Skipping test: SKIP_MONGO_TESTS is set");
        return;
    }

    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/create/letter/fancy", port))
        .json(&json!({ "context": "아무 내용" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn create_letter_rejects_missing_context() {
    if std::env::var("SKIP_MONGO_TESTS").is_ok() {
        eprintln!("Skipping test: SKIP_MONGO_TESTS is set");
        return;
    }

    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/create/letter/AI", port))
        .json(&json!({ "context": "" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 422);
}

use std::collections::HashMap;

use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::TestApp;

fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({ "choices": [{ "message": { "content": content } }] })
}

#[tokio::test]
async fn generate_copy_returns_the_generated_text() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(path("/v1/chat/completions"))
        .and(method("POST"))
        .and(header_exists("Authorization"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body("  Launch faster.  ")),
        )
        .expect(1)
        .mount(&test_app.copy_server)
        .await;

    let response = test_app
        .post_copy(HashMap::from([
            ("companyName", "Acme"),
            ("field", "headline"),
        ]))
        .await;

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to parse the response body.");

    assert_eq!(body["text"], serde_json::json!("Launch faster."));
}

#[tokio::test]
async fn generate_copy_returns_400_and_calls_nothing_when_company_name_is_missing() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.copy_server)
        .await;

    let test_cases: Vec<(HashMap<&str, &str>, &str)> = vec![
        (
            HashMap::from([("field", "headline")]),
            "missing company name",
        ),
        (
            HashMap::from([("companyName", ""), ("field", "headline")]),
            "empty company name",
        ),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = test_app.post_copy(invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 status when payload was {}",
            error_message
        );
    }
}

#[tokio::test]
async fn generate_copy_returns_400_when_the_field_is_unknown() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.copy_server)
        .await;

    let response = test_app
        .post_copy(HashMap::from([
            ("companyName", "Acme"),
            ("field", "slogan"),
        ]))
        .await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn generate_copy_returns_500_when_no_api_key_is_configured() {
    let test_app = TestApp::spawn_app_without_copy_key().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.copy_server)
        .await;

    let response = test_app
        .post_copy(HashMap::from([
            ("companyName", "Acme"),
            ("field", "headline"),
        ]))
        .await;

    assert_eq!(500, response.status().as_u16());

    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to parse the response body.");

    assert_eq!(
        body["error"],
        serde_json::json!("Copy generation is not configured")
    );
}

#[tokio::test]
async fn generate_copy_returns_500_when_the_generator_fails() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(path("/v1/chat/completions"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test_app.copy_server)
        .await;

    let response = test_app
        .post_copy(HashMap::from([
            ("companyName", "Acme"),
            ("field", "description"),
        ]))
        .await;

    assert_eq!(500, response.status().as_u16());

    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to parse the response body.");

    assert_eq!(body["error"], serde_json::json!("Failed to generate copy"));
}

#[tokio::test]
async fn generate_copy_returns_an_empty_text_when_there_is_no_candidate() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(path("/v1/chat/completions"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })))
        .expect(1)
        .mount(&test_app.copy_server)
        .await;

    let response = test_app
        .post_copy(HashMap::from([
            ("companyName", "Acme"),
            ("field", "headline"),
        ]))
        .await;

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to parse the response body.");

    assert_eq!(body["text"], serde_json::json!(""));
}

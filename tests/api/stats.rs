use std::collections::HashMap;

use crate::helpers::TestApp;

#[tokio::test]
async fn stats_over_an_empty_store_are_all_zero() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app.get_signup_stats().await;

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to parse the response body.");

    assert_eq!(body["total"], serde_json::json!(0));
    assert_eq!(body["today"], serde_json::json!(0));
    assert_eq!(body["thisWeek"], serde_json::json!(0));
    assert_eq!(body["sources"], serde_json::json!({}));
}

#[tokio::test]
async fn stats_count_fresh_signups_in_every_window() {
    let test_app = TestApp::spawn_app().await;

    test_app
        .post_signup(HashMap::from([("email", "first@test.com")]))
        .await;
    test_app
        .post_signup(HashMap::from([
            ("email", "second@test.com"),
            ("source", "product-hunt"),
        ]))
        .await;

    let response = test_app.get_signup_stats().await;

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to parse the response body.");

    // Both signups were recorded moments ago, so they land in every bucket
    assert_eq!(body["total"], serde_json::json!(2));
    assert_eq!(body["today"], serde_json::json!(2));
    assert_eq!(body["thisWeek"], serde_json::json!(2));
    assert_eq!(body["sources"]["direct"], serde_json::json!(1));
    assert_eq!(body["sources"]["product-hunt"], serde_json::json!(1));
}

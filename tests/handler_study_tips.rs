mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use course_enrollment::api::handlers::study_tips_handler;
use course_enrollment::infrastructure::genai::{GroqSettings, GroqTipsProvider};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn groq(api_url: String) -> Arc<GroqTipsProvider> {
    Arc::new(
        GroqTipsProvider::new(GroqSettings {
            api_key: "test-key".to_string(),
            api_url,
            model: "llama-3.1-8b-instant".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap(),
    )
}

fn tips_routes(state: course_enrollment::AppState) -> Router {
    Router::new()
        .route("/genai/study-tips", post(study_tips_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_default_tips_without_provider() {
    let pool = common::test_pool().await;
    let server = TestServer::new(tips_routes(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/genai/study-tips")
        .json(&json!({ "course_title": "Physics", "credit_units": 4 }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let tips = json["tips"].as_array().unwrap();
    assert_eq!(tips.len(), 5);
    assert_eq!(tips[0], "Study Physics for 4 hours weekly");
}

#[tokio::test]
async fn test_generated_tips_are_parsed() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "Here are some tips:\n1. Read the chapter before each lecture\n2. **Work** problems every single day\n- Form a weekly study group\n* Review mistakes from quizzes"
                }
            }]
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let pool = common::test_pool().await;
    let state = common::create_test_state_with_provider(pool, groq(upstream.uri()));
    let server = TestServer::new(tips_routes(state)).unwrap();

    let response = server
        .post("/genai/study-tips")
        .json(&json!({ "course_title": "Physics", "credit_units": 4 }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let tips: Vec<&str> = json["tips"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap())
        .collect();
    assert_eq!(tips.len(), 5);
    assert_eq!(tips[1], "Read the chapter before each lecture");
    assert!(tips.contains(&"Form a weekly study group"));
}

#[tokio::test]
async fn test_upstream_failure_falls_back() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&upstream)
        .await;

    let pool = common::test_pool().await;
    let state = common::create_test_state_with_provider(pool, groq(upstream.uri()));
    let server = TestServer::new(tips_routes(state)).unwrap();

    let response = server
        .post("/genai/study-tips")
        .json(&json!({ "course_title": "Chemistry", "credit_units": 3 }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["tips"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_study_tips_validation() {
    let pool = common::test_pool().await;
    let server = TestServer::new(tips_routes(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/genai/study-tips")
        .json(&json!({ "course_title": "", "credit_units": 4 }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_study_tips_rejects_long_title_and_negative_credits() {
    let pool = common::test_pool().await;
    let server = TestServer::new(tips_routes(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/genai/study-tips")
        .json(&json!({ "course_title": "T".repeat(201), "credit_units": -2 }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert!(json["error"]["details"].get("course_title").is_some());
    assert!(json["error"]["details"].get("credit_units").is_some());
}

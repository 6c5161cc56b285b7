use axum::{Router, routing::get};
use axum_test::TestServer;
use course_enrollment::api::handlers::{endpoints_handler, index_handler};

#[tokio::test]
async fn test_index() {
    let app = Router::new().route("/", get(index_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Course Enrollment API is running!");
    assert_eq!(json["endpoints"]["students"], "/students");
    assert_eq!(json["endpoints"]["study_tips"], "/genai/study-tips");
}

#[tokio::test]
async fn test_debug_endpoints_lists_routes() {
    let app = Router::new().route("/debug/endpoints", get(endpoints_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/debug/endpoints").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let routes = json.as_array().unwrap();
    assert_eq!(routes.len(), 12);

    let students = routes
        .iter()
        .find(|r| r["path"] == "/students")
        .unwrap();
    assert_eq!(students["methods"], serde_json::json!(["GET", "POST"]));
}

mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use course_enrollment::api::handlers::{enroll_handler, list_enrollments_handler};

fn enrollment_routes(state: course_enrollment::AppState) -> Router {
    Router::new()
        .route("/enroll", post(enroll_handler))
        .route("/enrollments", get(list_enrollments_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_enroll_success() {
    let pool = common::test_pool().await;
    let student = common::create_test_student(&pool, "John Doe", "john@example.com").await;
    let course = common::create_test_course(&pool, "Math", "M101", 3).await;
    let server = TestServer::new(enrollment_routes(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/enroll")
        .json(&json!({ "student_id": student, "course_id": course }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({
            "message": "Enrolled successfully",
            "student_id": student,
            "course_id": course
        })
    );
}

#[tokio::test]
async fn test_enroll_duplicate() {
    let pool = common::test_pool().await;
    let student = common::create_test_student(&pool, "John Doe", "john@example.com").await;
    let course = common::create_test_course(&pool, "Math", "M101", 3).await;
    let server = TestServer::new(enrollment_routes(common::create_test_state(pool))).unwrap();

    let body = json!({ "student_id": student, "course_id": course });

    server.post("/enroll").json(&body).await.assert_status(axum::http::StatusCode::CREATED);

    let response = server.post("/enroll").json(&body).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(
        json["error"]["message"],
        "Student already enrolled in this course"
    );
}

#[tokio::test]
async fn test_enroll_unknown_student() {
    let pool = common::test_pool().await;
    let course = common::create_test_course(&pool, "Math", "M101", 3).await;
    let server = TestServer::new(enrollment_routes(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/enroll")
        .json(&json!({ "student_id": 99, "course_id": course }))
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "Student not found"
    );
}

#[tokio::test]
async fn test_enroll_checks_student_before_course() {
    let pool = common::test_pool().await;
    let server = TestServer::new(enrollment_routes(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/enroll")
        .json(&json!({ "student_id": 1, "course_id": 1 }))
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "Student not found"
    );
}

#[tokio::test]
async fn test_enroll_unknown_course() {
    let pool = common::test_pool().await;
    let student = common::create_test_student(&pool, "John Doe", "john@example.com").await;
    let server = TestServer::new(enrollment_routes(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/enroll")
        .json(&json!({ "student_id": student, "course_id": 5 }))
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "Course not found"
    );
}

#[tokio::test]
async fn test_list_enrollments() {
    let pool = common::test_pool().await;
    let ada = common::create_test_student(&pool, "Ada", "ada@example.com").await;
    let alan = common::create_test_student(&pool, "Alan", "alan@example.com").await;
    let course = common::create_test_course(&pool, "Math", "M101", 3).await;
    common::create_test_enrollment(&pool, ada, course).await;
    common::create_test_enrollment(&pool, alan, course).await;
    let server = TestServer::new(enrollment_routes(common::create_test_state(pool))).unwrap();

    let response = server.get("/enrollments").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["student_id"], ada);
    assert_eq!(items[1]["student_id"], alan);
    assert_eq!(items[1]["course_id"], course);
}

#[tokio::test]
async fn test_enroll_wrong_field_type_uses_error_envelope() {
    let pool = common::test_pool().await;
    let server = TestServer::new(enrollment_routes(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/enroll")
        .json(&json!({ "student_id": "one", "course_id": 1 }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "Invalid request body"
    );
}

mod common;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Method, Request, StatusCode, header};
use course_enrollment::api::routes::ENDPOINTS;
use course_enrollment::routes::{RouterOptions, app_router};
use serde_json::json;
use std::net::SocketAddr;
use tower::ServiceExt;

fn options() -> RouterOptions {
    RouterOptions {
        cors_allowed_origins: vec!["http://localhost:5173".to_string()],
        genai_rate_limit: None,
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_trailing_slash_is_ignored() {
    let pool = common::test_pool().await;
    common::create_test_student(&pool, "Ada", "ada@example.com").await;
    let app = app_router(common::create_test_state(pool), &options()).unwrap();

    let with_slash = app
        .clone()
        .oneshot(Request::get("/students/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(with_slash.status(), StatusCode::OK);

    let without_slash = app
        .oneshot(Request::get("/students").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(without_slash.status(), StatusCode::OK);

    assert_eq!(body_json(with_slash).await, body_json(without_slash).await);
}

#[tokio::test]
async fn test_end_to_end_enrollment() {
    let pool = common::test_pool().await;
    let app = app_router(common::create_test_state(pool), &options()).unwrap();

    let post = |uri: &str, body: serde_json::Value| {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    };

    let student = app
        .clone()
        .oneshot(post(
            "/students",
            serde_json::json!({ "name": "Ada", "email": "ada@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(student.status(), StatusCode::CREATED);
    let student_id = body_json(student).await["id"].as_i64().unwrap();

    let course = app
        .clone()
        .oneshot(post(
            "/courses/",
            serde_json::json!({ "title": "Calculus", "code": "MATH101", "credit_units": 4 }),
        ))
        .await
        .unwrap();
    assert_eq!(course.status(), StatusCode::CREATED);
    let course_id = body_json(course).await["id"].as_i64().unwrap();

    let enroll = app
        .clone()
        .oneshot(post(
            "/enroll",
            serde_json::json!({ "student_id": student_id, "course_id": course_id }),
        ))
        .await
        .unwrap();
    assert_eq!(enroll.status(), StatusCode::CREATED);

    let courses = app
        .oneshot(
            Request::get(format!("/students/{student_id}/courses"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(courses.status(), StatusCode::OK);
    assert_eq!(body_json(courses).await[0]["code"], "MATH101");
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let pool = common::test_pool().await;
    let app = app_router(common::create_test_state(pool), &options()).unwrap();

    let response = app
        .oneshot(
            Request::get("/")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let pool = common::test_pool().await;
    let app = app_router(common::create_test_state(pool), &options()).unwrap();

    let response = app
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

fn study_tips_from(peer: SocketAddr) -> Request<Body> {
    Request::post("/genai/study-tips")
        .header(header::CONTENT_TYPE, "application/json")
        .extension(ConnectInfo(peer))
        .body(Body::from(
            json!({ "course_title": "Physics", "credit_units": 4 }).to_string(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_study_tips_rate_limited_per_ip() {
    let pool = common::test_pool().await;
    let options = RouterOptions {
        genai_rate_limit: Some((1, 2)),
        ..options()
    };
    let app = app_router(common::create_test_state(pool), &options).unwrap();

    let first: SocketAddr = "1.2.3.4:5000".parse().unwrap();
    let mut statuses = Vec::new();
    for _ in 0..4 {
        let response = app.clone().oneshot(study_tips_from(first)).await.unwrap();
        statuses.push(response.status());
    }

    assert_eq!(
        statuses,
        vec![
            StatusCode::OK,
            StatusCode::OK,
            StatusCode::TOO_MANY_REQUESTS,
            StatusCode::TOO_MANY_REQUESTS,
        ]
    );

    let second: SocketAddr = "5.6.7.8:5000".parse().unwrap();
    let response = app.oneshot(study_tips_from(second)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_resource_routes_not_rate_limited() {
    let pool = common::test_pool().await;
    let options = RouterOptions {
        genai_rate_limit: Some((1, 1)),
        ..options()
    };
    let app = app_router(common::create_test_state(pool), &options).unwrap();

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(Request::get("/students").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_every_listed_endpoint_is_routed() {
    let pool = common::test_pool().await;
    let student_id = common::create_test_student(&pool, "Ada", "ada@example.com").await;
    let course_id = common::create_test_course(&pool, "Calculus", "MATH101", 4).await;
    let app = app_router(common::create_test_state(pool), &options()).unwrap();

    for (path, methods) in ENDPOINTS {
        let uri = path
            .replace("{student_id}", &student_id.to_string())
            .replace("{course_id}", &course_id.to_string());

        for method in *methods {
            let method: Method = method.parse().unwrap();
            let body = match (method.as_str(), *path) {
                ("POST", "/students") => json!({ "name": "Alan", "email": "alan@example.com" }),
                ("POST", "/courses") => {
                    json!({ "title": "Poetry", "code": "LIT200", "credit_units": 2 })
                }
                ("POST", "/enroll") => json!({ "student_id": student_id, "course_id": course_id }),
                ("POST", "/genai/study-tips") => {
                    json!({ "course_title": "Calculus", "credit_units": 4 })
                }
                _ => serde_json::Value::Null,
            };

            let request = if body.is_null() {
                Request::builder()
                    .method(method.clone())
                    .uri(&uri)
                    .body(Body::empty())
                    .unwrap()
            } else {
                Request::builder()
                    .method(method.clone())
                    .uri(&uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap()
            };

            let response = app.clone().oneshot(request).await.unwrap();

            assert!(
                response.status().is_success(),
                "{method} {uri} returned {}",
                response.status()
            );
        }
    }
}

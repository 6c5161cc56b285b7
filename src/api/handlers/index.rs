//! Handler for the service index.

use axum::Json;

use crate::api::dto::index::IndexResponse;

/// Describes the service and its main resources.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<IndexResponse> {
    let endpoints = [
        ("students", "/students"),
        ("courses", "/courses"),
        ("enrollments", "/enroll"),
        ("study_tips", "/genai/study-tips"),
        ("health", "/health"),
        ("routes", "/debug/endpoints"),
    ]
    .into_iter()
    .map(|(name, path)| (name.to_string(), path.to_string()))
    .collect();

    Json(IndexResponse {
        message: "Course Enrollment API is running!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

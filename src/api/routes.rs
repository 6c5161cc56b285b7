//! API route configuration.

use crate::api::handlers::{
    course_students_handler, create_course_handler, create_student_handler, endpoints_handler,
    enroll_handler, get_course_handler, get_student_handler, health_handler, index_handler,
    list_courses_handler, list_enrollments_handler, list_students_handler, student_courses_handler,
    study_tips_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Every registered route and its methods, as reported by `GET /debug/endpoints`.
///
/// Must stay in sync with [`resource_routes`] and [`genai_routes`].
pub const ENDPOINTS: &[(&str, &[&str])] = &[
    ("/", &["GET"]),
    ("/health", &["GET"]),
    ("/students", &["GET", "POST"]),
    ("/students/{student_id}", &["GET"]),
    ("/students/{student_id}/courses", &["GET"]),
    ("/courses", &["GET", "POST"]),
    ("/courses/{course_id}", &["GET"]),
    ("/courses/{course_id}/students", &["GET"]),
    ("/enroll", &["POST"]),
    ("/enrollments", &["GET"]),
    ("/genai/study-tips", &["POST"]),
    ("/debug/endpoints", &["GET"]),
];

/// Index, health, student, course and enrollment routes.
///
/// # Endpoints
///
/// - `GET  /`                              - Service index
/// - `GET  /health`                        - Health check
/// - `GET  /students`, `POST /students`    - List / register students
/// - `GET  /students/{id}`                 - Single student
/// - `GET  /students/{id}/courses`         - Courses of a student
/// - `GET  /courses`, `POST /courses`      - List / create courses
/// - `GET  /courses/{id}`                  - Single course
/// - `GET  /courses/{id}/students`         - Roster of a course
/// - `POST /enroll`                        - Enroll a student
/// - `GET  /enrollments`                   - All enrollments
/// - `GET  /debug/endpoints`               - Route listing
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route(
            "/students",
            get(list_students_handler).post(create_student_handler),
        )
        .route("/students/{student_id}", get(get_student_handler))
        .route(
            "/students/{student_id}/courses",
            get(student_courses_handler),
        )
        .route(
            "/courses",
            get(list_courses_handler).post(create_course_handler),
        )
        .route("/courses/{course_id}", get(get_course_handler))
        .route("/courses/{course_id}/students", get(course_students_handler))
        .route("/enroll", post(enroll_handler))
        .route("/enrollments", get(list_enrollments_handler))
        .route("/debug/endpoints", get(endpoints_handler))
}

/// Generative routes, rate limited separately.
///
/// - `POST /genai/study-tips` - Study tips for a course
pub fn genai_routes() -> Router<AppState> {
    Router::new().route("/genai/study-tips", post(study_tips_handler))
}

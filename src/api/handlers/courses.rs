//! Handlers for course endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::course::{CourseResponse, CreateCourseRequest};
use crate::api::dto::student::StudentResponse;
use crate::api::extract::{ApiJson, ApiPath};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a course.
///
/// # Endpoint
///
/// `POST /courses`
///
/// # Request Body
///
/// ```json
/// { "title": "Math", "code": "M101", "credit_units": 3, "description": null }
/// ```
///
/// # Errors
///
/// Returns 400 if the input is invalid or the code is already taken.
pub async fn create_course_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), AppError> {
    payload.validate()?;

    let course = state.course_service.create_course(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(course.into())))
}

/// Lists all courses.
///
/// # Endpoint
///
/// `GET /courses`
pub async fn list_courses_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let courses = state.course_service.list_courses().await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// Returns a single course.
///
/// # Endpoint
///
/// `GET /courses/{course_id}`
///
/// # Errors
///
/// Returns 404 if the course does not exist.
pub async fn get_course_handler(
    ApiPath(course_id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = state.course_service.get_course(course_id).await?;
    Ok(Json(course.into()))
}

/// Lists the students enrolled in a course.
///
/// # Endpoint
///
/// `GET /courses/{course_id}/students`
///
/// # Errors
///
/// Returns 404 if the course does not exist.
pub async fn course_students_handler(
    ApiPath(course_id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = state
        .enrollment_service
        .students_for_course(course_id)
        .await?;

    Ok(Json(students.into_iter().map(Into::into).collect()))
}

//! Handlers for student endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::course::CourseResponse;
use crate::api::dto::student::{CreateStudentRequest, StudentResponse};
use crate::api::extract::{ApiJson, ApiPath};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a student.
///
/// # Endpoint
///
/// `POST /students`
///
/// # Errors
///
/// Returns 400 if the input is invalid or the email is already registered.
pub async fn create_student_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    payload.validate()?;

    let student = state
        .student_service
        .create_student(payload.name, payload.email)
        .await?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Lists all students.
///
/// # Endpoint
///
/// `GET /students`
pub async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = state.student_service.list_students().await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Returns a single student.
///
/// # Endpoint
///
/// `GET /students/{student_id}`
///
/// # Errors
///
/// Returns 404 if the student does not exist.
pub async fn get_student_handler(
    ApiPath(student_id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = state.student_service.get_student(student_id).await?;
    Ok(Json(student.into()))
}

/// Lists the courses a student is enrolled in.
///
/// # Endpoint
///
/// `GET /students/{student_id}/courses`
///
/// # Errors
///
/// Returns 404 if the student does not exist.
pub async fn student_courses_handler(
    ApiPath(student_id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let courses = state
        .enrollment_service
        .courses_for_student(student_id)
        .await?;

    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

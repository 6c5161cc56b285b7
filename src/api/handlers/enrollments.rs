//! Handlers for enrollment endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::enrollment::{EnrollRequest, EnrollResponse, EnrollmentItem};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Enrolls a student in a course.
///
/// # Endpoint
///
/// `POST /enroll`
///
/// # Response
///
/// ```json
/// { "message": "Enrolled successfully", "student_id": 1, "course_id": 2 }
/// ```
///
/// # Errors
///
/// Returns 404 if the student or course does not exist.
/// Returns 400 if the student is already enrolled in the course.
pub async fn enroll_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EnrollRequest>,
) -> Result<(StatusCode, Json<EnrollResponse>), AppError> {
    let enrollment = state
        .enrollment_service
        .enroll(payload.student_id, payload.course_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(EnrollResponse {
            message: "Enrolled successfully".to_string(),
            student_id: enrollment.student_id,
            course_id: enrollment.course_id,
        }),
    ))
}

/// Lists all enrollments.
///
/// # Endpoint
///
/// `GET /enrollments`
pub async fn list_enrollments_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<EnrollmentItem>>, AppError> {
    let enrollments = state.enrollment_service.list_enrollments().await?;
    Ok(Json(enrollments.into_iter().map(Into::into).collect()))
}

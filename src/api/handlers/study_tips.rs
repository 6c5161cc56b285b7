//! Handler for the study tips endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::study_tips::{StudyTipsRequest, StudyTipsResponse};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Returns study tips for a course.
///
/// # Endpoint
///
/// `POST /genai/study-tips`
///
/// Always answers 200 for valid input: generation failures fall back to
/// generic tips.
pub async fn study_tips_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<StudyTipsRequest>,
) -> Result<Json<StudyTipsResponse>, AppError> {
    payload.validate()?;

    let tips = state
        .study_tips_service
        .study_tips(&payload.course_title, payload.credit_units)
        .await;

    Ok(Json(StudyTipsResponse { tips }))
}

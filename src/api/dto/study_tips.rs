//! DTOs for the study tips endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for study tips.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StudyTipsRequest {
    #[validate(length(min = 1, max = 200))]
    pub course_title: String,

    #[validate(range(min = 0))]
    pub credit_units: i64,
}

/// Generated or fallback tips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyTipsResponse {
    pub tips: Vec<String>,
}

//! DTOs for course endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Course, NewCourse};

/// Request to create a course.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 200, message = "Title must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, max = 32, message = "Code must be 1-32 characters"))]
    pub code: String,

    #[validate(range(min = 0, message = "Credit units must not be negative"))]
    pub credit_units: i64,

    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(r: CreateCourseRequest) -> Self {
        Self {
            title: r.title,
            code: r.code,
            credit_units: r.credit_units,
            description: r.description,
        }
    }
}

/// Course as returned by the API. `description` is always present, possibly `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub code: String,
    pub credit_units: i64,
    pub description: Option<String>,
}

impl From<Course> for CourseResponse {
    fn from(c: Course) -> Self {
        Self {
            id: c.id,
            title: c.title,
            code: c.code,
            credit_units: c.credit_units,
            description: c.description,
        }
    }
}

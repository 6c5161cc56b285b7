//! DTOs for enrollment endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Enrollment;

/// Request to enroll a student in a course.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnrollRequest {
    pub student_id: i64,
    pub course_id: i64,
}

/// Confirmation returned by `POST /enroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollResponse {
    pub message: String,
    pub student_id: i64,
    pub course_id: i64,
}

/// Enrollment record as listed by `GET /enrollments`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentItem {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
}

impl From<Enrollment> for EnrollmentItem {
    fn from(e: Enrollment) -> Self {
        Self {
            id: e.id,
            student_id: e.student_id,
            course_id: e.course_id,
        }
    }
}

//! Repository trait for enrollments.

use crate::domain::entities::{Enrollment, NewEnrollment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for student/course enrollments.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteEnrollmentRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Inserts a new enrollment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the pair is already enrolled.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_enrollment: NewEnrollment) -> Result<Enrollment, AppError>;

    /// Returns true if the student is already enrolled in the course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, student_id: i64, course_id: i64) -> Result<bool, AppError>;

    /// Lists all enrollments ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Enrollment>, AppError>;
}

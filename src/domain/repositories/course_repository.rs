//! Repository trait for courses.

use crate::domain::entities::{Course, NewCourse};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the course catalogue.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCourseRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Inserts a new course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the course code is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError>;

    /// Finds a course by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;

    /// Finds a course by its code (e.g., "M101").
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Course>, AppError>;

    /// Lists all courses ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Course>, AppError>;

    /// Lists the courses a student is enrolled in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_student(&self, student_id: i64) -> Result<Vec<Course>, AppError>;
}

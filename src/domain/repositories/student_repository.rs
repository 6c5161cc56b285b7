//! Repository trait for students.

use crate::domain::entities::{NewStudent, Student};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing students.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteStudentRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Inserts a new student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_student: NewStudent) -> Result<Student, AppError>;

    /// Finds a student by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;

    /// Finds a student by email address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, AppError>;

    /// Lists all students ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Student>, AppError>;

    /// Lists the students enrolled in a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_course(&self, course_id: i64) -> Result<Vec<Student>, AppError>;

    /// Counts registered students.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}

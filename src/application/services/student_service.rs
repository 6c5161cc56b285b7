//! Student registration service.

use crate::domain::entities::{NewStudent, Student};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for registering and looking up students.
///
/// Enforces unique email addresses before touching the database; the unique
/// index still guards against concurrent registrations.
pub struct StudentService<R: StudentRepository> {
    repository: Arc<R>,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a new student service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_student(&self, name: String, email: String) -> Result<Student, AppError> {
        tracing::info!("Creating student: {} ({})", name, email);

        if self.repository.find_by_email(&email).await?.is_some() {
            tracing::warn!("Student with email {} already exists", email);
            return Err(email_taken(&email));
        }

        let student = self
            .repository
            .create(NewStudent {
                name,
                email: email.clone(),
            })
            .await
            .map_err(|e| match e {
                // Lost a race against a concurrent registration.
                AppError::Validation { .. } => email_taken(&email),
                other => other,
            })?;

        tracing::info!("Student created successfully with ID: {}", student.id);
        Ok(student)
    }

    /// Lists all students.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        let students = self.repository.list().await?;
        tracing::info!("Retrieved {} students", students.len());
        Ok(students)
    }

    /// Retrieves a student by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_student(&self, id: i64) -> Result<Student, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!("Student with ID {} not found", id);
            AppError::not_found("Student not found", json!({ "id": id }))
        })
    }

    /// Counts registered students. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_students(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn email_taken(email: &str) -> AppError {
    AppError::bad_request(
        "Student with this email already exists",
        json!({ "email": email }),
    )
}

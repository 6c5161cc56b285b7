//! Course catalogue service.

use crate::domain::entities::{Course, NewCourse};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing the course catalogue.
pub struct CourseService<R: CourseRepository> {
    repository: Arc<R>,
}

impl<R: CourseRepository> CourseService<R> {
    /// Creates a new course service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the course code is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_course(&self, new_course: NewCourse) -> Result<Course, AppError> {
        tracing::info!("Creating course: {} ({})", new_course.title, new_course.code);

        if self
            .repository
            .find_by_code(&new_course.code)
            .await?
            .is_some()
        {
            tracing::warn!("Course with code {} already exists", new_course.code);
            return Err(code_taken(&new_course.code));
        }

        let code = new_course.code.clone();
        let course = self
            .repository
            .create(new_course)
            .await
            .map_err(|e| match e {
                // Lost a race against a concurrent creation.
                AppError::Validation { .. } => code_taken(&code),
                other => other,
            })?;

        tracing::info!("Course created successfully with ID: {}", course.id);
        Ok(course)
    }

    /// Lists all courses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        let courses = self.repository.list().await?;
        tracing::info!("Retrieved {} courses", courses.len());
        Ok(courses)
    }

    /// Retrieves a course by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_course(&self, id: i64) -> Result<Course, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!("Course with ID {} not found", id);
            AppError::not_found("Course not found", json!({ "id": id }))
        })
    }
}

fn code_taken(code: &str) -> AppError {
    AppError::bad_request(
        "Course with this code already exists",
        json!({ "code": code }),
    )
}

//! SQLite implementation of the enrollment repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Enrollment, NewEnrollment};
use crate::domain::repositories::EnrollmentRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct EnrollmentRow {
    id: i64,
    student_id: i64,
    course_id: i64,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(r: EnrollmentRow) -> Self {
        Enrollment {
            id: r.id,
            student_id: r.student_id,
            course_id: r.course_id,
        }
    }
}

/// SQLite repository for enrollments.
///
/// The `unique_enrollment` constraint backs the duplicate check done by the
/// service, so concurrent duplicates still fail with a validation error.
pub struct SqliteEnrollmentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteEnrollmentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for SqliteEnrollmentRepository {
    async fn create(&self, new_enrollment: NewEnrollment) -> Result<Enrollment, AppError> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            INSERT INTO enrollments (student_id, course_id)
            VALUES (?1, ?2)
            RETURNING id, student_id, course_id
            "#,
        )
        .bind(new_enrollment.student_id)
        .bind(new_enrollment.course_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn exists(&self, student_id: i64, course_id: i64) -> Result<bool, AppError> {
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM enrollments WHERE student_id = ?1 AND course_id = ?2)",
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(found != 0)
    }

    async fn list(&self) -> Result<Vec<Enrollment>, AppError> {
        let rows = sqlx::query_as::<_, EnrollmentRow>(
            "SELECT id, student_id, course_id FROM enrollments ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Enrollment::from).collect())
    }
}

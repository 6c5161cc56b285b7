//! SQLite implementation of the course repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Course, NewCourse};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct CourseRow {
    id: i64,
    title: String,
    code: String,
    credit_units: i64,
    description: Option<String>,
}

impl From<CourseRow> for Course {
    fn from(r: CourseRow) -> Self {
        Course::new(r.id, r.title, r.code, r.credit_units, r.description)
    }
}

/// SQLite repository for the course catalogue.
pub struct SqliteCourseRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for SqliteCourseRepository {
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO courses (title, code, credit_units, description)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, title, code, credit_units, description
            "#,
        )
        .bind(new_course.title)
        .bind(new_course.code)
        .bind(new_course.credit_units)
        .bind(new_course.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            "SELECT id, title, code, credit_units, description FROM courses WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Course::from))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Course>, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            "SELECT id, title, code, credit_units, description FROM courses WHERE code = ?1",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Course::from))
    }

    async fn list(&self) -> Result<Vec<Course>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            "SELECT id, title, code, credit_units, description FROM courses ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn list_by_student(&self, student_id: i64) -> Result<Vec<Course>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT c.id, c.title, c.code, c.credit_units, c.description
            FROM courses c
            JOIN enrollments e ON e.course_id = c.id
            WHERE e.student_id = ?1
            ORDER BY c.id
            "#,
        )
        .bind(student_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }
}

//! SQLite implementation of the student repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{NewStudent, Student};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    email: String,
}

impl From<StudentRow> for Student {
    fn from(r: StudentRow) -> Self {
        Student::new(r.id, r.name, r.email)
    }
}

/// SQLite repository for students.
pub struct SqliteStudentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStudentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn create(&self, new_student: NewStudent) -> Result<Student, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            INSERT INTO students (name, email)
            VALUES (?1, ?2)
            RETURNING id, name, email
            "#,
        )
        .bind(new_student.name)
        .bind(new_student.email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            "SELECT id, name, email FROM students WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Student::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            "SELECT id, name, email FROM students WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Student::from))
    }

    async fn list(&self) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, StudentRow>("SELECT id, name, email FROM students ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn list_by_course(&self, course_id: i64) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT s.id, s.name, s.email
            FROM students s
            JOIN enrollments e ON e.student_id = s.id
            WHERE e.course_id = ?1
            ORDER BY s.id
            "#,
        )
        .bind(course_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

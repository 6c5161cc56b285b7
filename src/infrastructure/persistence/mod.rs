//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries. The schema lives in `migrations/` and is embedded at compile time.
//!
//! # Repositories
//!
//! - [`SqliteStudentRepository`] - Student storage and lookup
//! - [`SqliteCourseRepository`] - Course catalogue
//! - [`SqliteEnrollmentRepository`] - Enrollments

pub mod sqlite_course_repository;
pub mod sqlite_enrollment_repository;
pub mod sqlite_student_repository;

pub use sqlite_course_repository::SqliteCourseRepository;
pub use sqlite_enrollment_repository::SqliteEnrollmentRepository;
pub use sqlite_student_repository::SqliteStudentRepository;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Opens a connection pool, creating the database file if it does not exist.
///
/// Foreign key enforcement is enabled on every connection.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid DATABASE_URL '{database_url}'"))?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .context("Failed to open database")
}

/// Opens a private in-memory database with the schema applied.
///
/// The pool holds a single connection that is never recycled, since every
/// SQLite in-memory connection is a separate database.
pub async fn connect_in_memory() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("Failed to open in-memory database")?;

    migrate(&pool).await?;
    Ok(pool)
}

/// Applies embedded migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")
}

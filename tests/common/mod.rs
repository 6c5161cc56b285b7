#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;
use course_enrollment::application::services::StudyTipsService;
use course_enrollment::domain::tips_provider::TipsProvider;
use course_enrollment::infrastructure::persistence::connect_in_memory;
use course_enrollment::state::AppState;

pub async fn test_pool() -> SqlitePool {
    connect_in_memory().await.unwrap()
}

pub async fn create_test_student(pool: &SqlitePool, name: &str, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO students (name, email) VALUES (?1, ?2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_course(pool: &SqlitePool, title: &str, code: &str, credit_units: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO courses (title, code, credit_units) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(title)
    .bind(code)
    .bind(credit_units)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_enrollment(pool: &SqlitePool, student_id: i64, course_id: i64) {
    sqlx::query("INSERT INTO enrollments (student_id, course_id) VALUES (?1, ?2)")
        .bind(student_id)
        .bind(course_id)
        .execute(pool)
        .await
        .unwrap();
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), StudyTipsService::new(None))
}

pub fn create_test_state_with_provider(
    pool: SqlitePool,
    provider: Arc<dyn TipsProvider>,
) -> AppState {
    AppState::new(Arc::new(pool), StudyTipsService::new(Some(provider)))
}

//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    CourseService, EnrollmentService, StudentService, StudyTipsService,
};
use crate::infrastructure::persistence::{
    SqliteCourseRepository, SqliteEnrollmentRepository, SqliteStudentRepository,
};

pub type SqliteEnrollmentService =
    EnrollmentService<SqliteEnrollmentRepository, SqliteStudentRepository, SqliteCourseRepository>;

#[derive(Clone)]
pub struct AppState {
    pub student_service: Arc<StudentService<SqliteStudentRepository>>,
    pub course_service: Arc<CourseService<SqliteCourseRepository>>,
    pub enrollment_service: Arc<SqliteEnrollmentService>,
    pub study_tips_service: Arc<StudyTipsService>,
}

impl AppState {
    /// Wires repositories and services over one connection pool.
    pub fn new(pool: Arc<sqlx::SqlitePool>, study_tips_service: StudyTipsService) -> Self {
        let student_repo = Arc::new(SqliteStudentRepository::new(pool.clone()));
        let course_repo = Arc::new(SqliteCourseRepository::new(pool.clone()));
        let enrollment_repo = Arc::new(SqliteEnrollmentRepository::new(pool));

        Self {
            student_service: Arc::new(StudentService::new(student_repo.clone())),
            course_service: Arc::new(CourseService::new(course_repo.clone())),
            enrollment_service: Arc::new(EnrollmentService::new(
                enrollment_repo,
                student_repo,
                course_repo,
            )),
            study_tips_service: Arc::new(study_tips_service),
        }
    }
}

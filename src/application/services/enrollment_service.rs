//! Enrollment service.

use crate::domain::entities::{Course, Enrollment, NewEnrollment, Student};
use crate::domain::repositories::{CourseRepository, EnrollmentRepository, StudentRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service enrolling students in courses and answering roster queries.
///
/// Enrolling checks, in order: the student exists, the course exists, the
/// pair is not already enrolled.
pub struct EnrollmentService<E, S, C>
where
    E: EnrollmentRepository,
    S: StudentRepository,
    C: CourseRepository,
{
    enrollments: Arc<E>,
    students: Arc<S>,
    courses: Arc<C>,
}

impl<E, S, C> EnrollmentService<E, S, C>
where
    E: EnrollmentRepository,
    S: StudentRepository,
    C: CourseRepository,
{
    /// Creates a new enrollment service.
    pub fn new(enrollments: Arc<E>, students: Arc<S>, courses: Arc<C>) -> Self {
        Self {
            enrollments,
            students,
            courses,
        }
    }

    /// Enrolls a student in a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student or the course does not exist.
    /// Returns [`AppError::Validation`] if the student is already enrolled.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn enroll(&self, student_id: i64, course_id: i64) -> Result<Enrollment, AppError> {
        tracing::info!("Enrolling student {} in course {}", student_id, course_id);

        self.require_student(student_id).await?;
        self.require_course(course_id).await?;

        if self.enrollments.exists(student_id, course_id).await? {
            tracing::warn!(
                "Student {} already enrolled in course {}",
                student_id,
                course_id
            );
            return Err(already_enrolled(student_id, course_id));
        }

        let enrollment = self
            .enrollments
            .create(NewEnrollment {
                student_id,
                course_id,
            })
            .await
            .map_err(|e| match e {
                // Lost a race against a concurrent identical enrollment.
                AppError::Validation { .. } => already_enrolled(student_id, course_id),
                other => other,
            })?;

        tracing::info!(
            "Enrollment successful: student {} in course {}",
            student_id,
            course_id
        );
        Ok(enrollment)
    }

    /// Lists every enrollment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_enrollments(&self) -> Result<Vec<Enrollment>, AppError> {
        self.enrollments.list().await
    }

    /// Lists the courses a student is enrolled in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn courses_for_student(&self, student_id: i64) -> Result<Vec<Course>, AppError> {
        tracing::info!("Fetching courses for student {}", student_id);

        self.require_student(student_id).await?;
        let courses = self.courses.list_by_student(student_id).await?;

        tracing::info!(
            "Found {} courses for student {}",
            courses.len(),
            student_id
        );
        Ok(courses)
    }

    /// Lists the students enrolled in a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn students_for_course(&self, course_id: i64) -> Result<Vec<Student>, AppError> {
        tracing::info!("Fetching students for course {}", course_id);

        self.require_course(course_id).await?;
        let students = self.students.list_by_course(course_id).await?;

        tracing::info!(
            "Found {} students for course {}",
            students.len(),
            course_id
        );
        Ok(students)
    }

    async fn require_student(&self, student_id: i64) -> Result<Student, AppError> {
        self.students.find_by_id(student_id).await?.ok_or_else(|| {
            tracing::warn!("Student with ID {} not found", student_id);
            AppError::not_found("Student not found", json!({ "id": student_id }))
        })
    }

    async fn require_course(&self, course_id: i64) -> Result<Course, AppError> {
        self.courses.find_by_id(course_id).await?.ok_or_else(|| {
            tracing::warn!("Course with ID {} not found", course_id);
            AppError::not_found("Course not found", json!({ "id": course_id }))
        })
    }
}

fn already_enrolled(student_id: i64, course_id: i64) -> AppError {
    AppError::bad_request(
        "Student already enrolled in this course",
        json!({ "student_id": student_id, "course_id": course_id }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{
        MockCourseRepository, MockEnrollmentRepository, MockStudentRepository,
    };

    fn student(id: i64) -> Student {
        Student::new(id, "John Doe".to_string(), "john@example.com".to_string())
    }

    fn course(id: i64) -> Course {
        Course::new(id, "Math".to_string(), "M101".to_string(), 3, None)
    }

    fn service(
        enrollments: MockEnrollmentRepository,
        students: MockStudentRepository,
        courses: MockCourseRepository,
    ) -> EnrollmentService<MockEnrollmentRepository, MockStudentRepository, MockCourseRepository>
    {
        EnrollmentService::new(Arc::new(enrollments), Arc::new(students), Arc::new(courses))
    }

    #[tokio::test]
    async fn test_enroll_success() {
        let mut students = MockStudentRepository::new();
        students
            .expect_find_by_id()
            .returning(|id| Ok(Some(student(id))));

        let mut courses = MockCourseRepository::new();
        courses
            .expect_find_by_id()
            .returning(|id| Ok(Some(course(id))));

        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_exists()
            .withf(|s, c| *s == 1 && *c == 2)
            .times(1)
            .returning(|_, _| Ok(false));
        enrollments.expect_create().times(1).returning(|e| {
            Ok(Enrollment {
                id: 10,
                student_id: e.student_id,
                course_id: e.course_id,
            })
        });

        let enrollment = service(enrollments, students, courses)
            .enroll(1, 2)
            .await
            .unwrap();

        assert_eq!(enrollment.id, 10);
        assert_eq!(enrollment.student_id, 1);
        assert_eq!(enrollment.course_id, 2);
    }

    #[tokio::test]
    async fn test_enroll_unknown_student_checked_first() {
        let mut students = MockStudentRepository::new();
        students.expect_find_by_id().returning(|_| Ok(None));

        let mut courses = MockCourseRepository::new();
        courses.expect_find_by_id().never();

        let enrollments = MockEnrollmentRepository::new();

        let err = service(enrollments, students, courses)
            .enroll(1, 2)
            .await
            .unwrap_err();

        match err {
            AppError::NotFound { message, .. } => assert_eq!(message, "Student not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_enroll_unknown_course() {
        let mut students = MockStudentRepository::new();
        students
            .expect_find_by_id()
            .returning(|id| Ok(Some(student(id))));

        let mut courses = MockCourseRepository::new();
        courses.expect_find_by_id().returning(|_| Ok(None));

        let mut enrollments = MockEnrollmentRepository::new();
        enrollments.expect_exists().never();

        let err = service(enrollments, students, courses)
            .enroll(1, 2)
            .await
            .unwrap_err();

        match err {
            AppError::NotFound { message, .. } => assert_eq!(message, "Course not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_enroll_duplicate() {
        let mut students = MockStudentRepository::new();
        students
            .expect_find_by_id()
            .returning(|id| Ok(Some(student(id))));

        let mut courses = MockCourseRepository::new();
        courses
            .expect_find_by_id()
            .returning(|id| Ok(Some(course(id))));

        let mut enrollments = MockEnrollmentRepository::new();
        enrollments.expect_exists().returning(|_, _| Ok(true));
        enrollments.expect_create().never();

        let err = service(enrollments, students, courses)
            .enroll(1, 2)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_enroll_race_maps_unique_violation() {
        let mut students = MockStudentRepository::new();
        students
            .expect_find_by_id()
            .returning(|id| Ok(Some(student(id))));

        let mut courses = MockCourseRepository::new();
        courses
            .expect_find_by_id()
            .returning(|id| Ok(Some(course(id))));

        let mut enrollments = MockEnrollmentRepository::new();
        enrollments.expect_exists().returning(|_, _| Ok(false));
        enrollments
            .expect_create()
            .returning(|_| Err(AppError::bad_request("Record already exists", json!({}))));

        let err = service(enrollments, students, courses)
            .enroll(1, 2)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Student already enrolled in this course");
    }

    #[tokio::test]
    async fn test_courses_for_unknown_student() {
        let mut students = MockStudentRepository::new();
        students.expect_find_by_id().returning(|_| Ok(None));

        let mut courses = MockCourseRepository::new();
        courses.expect_list_by_student().never();

        let err = service(MockEnrollmentRepository::new(), students, courses)
            .courses_for_student(5)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_students_for_course() {
        let mut courses = MockCourseRepository::new();
        courses
            .expect_find_by_id()
            .returning(|id| Ok(Some(course(id))));

        let mut students = MockStudentRepository::new();
        students
            .expect_list_by_course()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| Ok(vec![student(1), student(2)]));

        let roster = service(MockEnrollmentRepository::new(), students, courses)
            .students_for_course(3)
            .await
            .unwrap();

        assert_eq!(roster.len(), 2);
    }
}

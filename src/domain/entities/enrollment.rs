//! Enrollment entity linking a student to a course.

/// A student's enrollment in a course.
///
/// A given (student, course) pair can be enrolled at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
}

/// Input data for enrolling a student in a course.
#[derive(Debug, Clone, Copy)]
pub struct NewEnrollment {
    pub student_id: i64,
    pub course_id: i64,
}

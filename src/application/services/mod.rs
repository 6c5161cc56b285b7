//! Business logic services for the application layer.

pub mod course_service;
pub mod enrollment_service;
pub mod student_service;
pub mod study_tips_service;

pub use course_service::CourseService;
pub use enrollment_service::EnrollmentService;
pub use student_service::StudentService;
pub use study_tips_service::StudyTipsService;

//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod courses;
pub mod debug;
pub mod enrollments;
pub mod health;
pub mod index;
pub mod students;
pub mod study_tips;

pub use courses::{
    course_students_handler, create_course_handler, get_course_handler, list_courses_handler,
};
pub use debug::endpoints_handler;
pub use enrollments::{enroll_handler, list_enrollments_handler};
pub use health::health_handler;
pub use index::index_handler;
pub use students::{
    create_student_handler, get_student_handler, list_students_handler, student_courses_handler,
};
pub use study_tips::study_tips_handler;

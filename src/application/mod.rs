//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, validation and business rules and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::student_service::StudentService`] - Student registration and lookup
//! - [`services::course_service::CourseService`] - Course catalogue
//! - [`services::enrollment_service::EnrollmentService`] - Enrollment rules and rosters
//! - [`services::study_tips_service::StudyTipsService`] - Generated study tips with fallbacks

pub mod services;

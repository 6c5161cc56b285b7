//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization and validator for input
//! validation. They derive both directions so the terminal client in
//! [`crate::frontend`] decodes exactly what the handlers encode.

pub mod course;
pub mod enrollment;
pub mod health;
pub mod index;
pub mod student;
pub mod study_tips;

pub use course::{CourseResponse, CreateCourseRequest};
pub use enrollment::{EnrollRequest, EnrollResponse, EnrollmentItem};
pub use health::{CheckStatus, HealthChecks, HealthResponse};
pub use index::{EndpointInfo, IndexResponse};
pub use student::{CreateStudentRequest, StudentResponse};
pub use study_tips::{StudyTipsRequest, StudyTipsResponse};

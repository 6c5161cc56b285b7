//! Core domain entities representing the enrollment data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Student`] - A person who can enroll in courses
//! - [`Course`] - A course identified by a unique code
//! - [`Enrollment`] - The link between a student and a course
//!
//! Creation inputs use separate structs: `NewStudent`, `NewCourse`, `NewEnrollment`.

pub mod course;
pub mod enrollment;
pub mod student;

pub use course::{Course, NewCourse};
pub use enrollment::{Enrollment, NewEnrollment};
pub use student::{NewStudent, Student};

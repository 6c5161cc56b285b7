//! # Course Enrollment
//!
//! A course enrollment service built with Axum and SQLite, plus a thin client
//! that talks to it.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Students, courses, enrollments and repository traits
//! - **Application Layer** ([`application`]) - Business rules and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence and the Groq client
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Frontend** ([`frontend`]) - HTTP client configuration, bootstrap and root view
//!
//! ## Features
//!
//! - Student registration with unique emails
//! - Course catalogue with unique course codes
//! - Enrollment with duplicate detection
//! - Generated study tips with offline fallbacks
//! - Per-IP rate limiting on generative routes
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: enable generated study tips
//! export GROQ_API_KEY="gsk_..."
//!
//! # Start the service (creates enrollment.db and applies migrations)
//! cargo run
//!
//! # Talk to it
//! cargo run --bin enroll -- students list
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod frontend;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CourseService, EnrollmentService, StudentService, StudyTipsService,
    };
    pub use crate::domain::entities::{Course, Enrollment, NewCourse, Student};
    pub use crate::error::AppError;
    pub use crate::frontend::{ApiClient, ClientConfig, configure_http_client, initialize};
    pub use crate::state::AppState;
}

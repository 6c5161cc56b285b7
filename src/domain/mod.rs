//! Domain layer containing business entities and contracts.
//!
//! This module defines the core data model of the enrollment service and the
//! interfaces the application layer depends on. It has no dependencies on the
//! infrastructure or presentation layers.
//!
//! # Architecture
//!
//! - [`entities`] - Students, courses and enrollments
//! - [`repositories`] - Data access trait definitions
//! - [`tips_provider`] - Contract for generative study tip backends
//!
//! # Design Principles
//!
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Business rules live in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod tips_provider;

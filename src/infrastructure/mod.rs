//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite repository implementations and pool setup
//! - [`genai`] - Generative study tip providers

pub mod genai;
pub mod persistence;

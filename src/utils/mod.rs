//! Utility functions shared across layers.
//!
//! - [`tips_parser`] - Turns free-form completion text into a list of tips

pub mod tips_parser;

//! Generative study tip providers.
//!
//! - [`GroqTipsProvider`] - OpenAI-compatible chat completions served by Groq

pub mod groq;

pub use groq::{GroqSettings, GroqTipsProvider};

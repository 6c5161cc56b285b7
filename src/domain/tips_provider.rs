//! Contract for generative study tip backends.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a tips provider.
///
/// Never reaches API clients: the study tips service degrades to canned tips.
#[derive(Debug, Error)]
pub enum TipsProviderError {
    #[error("request to completion API failed: {0}")]
    Transport(String),

    #[error("completion API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("completion API returned no content")]
    EmptyCompletion,
}

/// A backend that turns a prompt into free-form study advice.
///
/// # Implementations
///
/// - [`crate::infrastructure::genai::GroqTipsProvider`] - Groq chat completions
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TipsProvider: Send + Sync {
    /// Sends the prompt and returns the raw completion text.
    async fn complete(&self, prompt: &str) -> Result<String, TipsProviderError>;
}

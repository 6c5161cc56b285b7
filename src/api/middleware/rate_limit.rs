//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-IP rate limiter.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The client
/// IP comes from the socket peer address, so the server must be started with
/// connect info.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/genai/study-tips", post(study_tips_handler))
///     .layer(rate_limit::layer(1, 10)?);
/// ```
///
/// # Errors
///
/// Returns an error if `per_second` or `burst` is zero.
pub fn layer(
    per_second: u64,
    burst: u32,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(per_second)
        .burst_size(burst)
        .finish()
        .context("Rate limit requires non-zero period and burst size")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

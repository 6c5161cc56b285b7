//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - Resource routes (students, courses, enrollments, health, index)
//! - `POST /genai/study-tips` - rate limited per client IP
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured browser origins, with credentials
//! - **Rate limiting** - Per-IP token bucket on generative routes
//! - **Path normalization** - `/students/` and `/students` are the same route

use crate::api;
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Router options derived from [`crate::config::Config`].
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub cors_allowed_origins: Vec<String>,
    /// `(per_second, burst)` for the generative routes; `None` disables limiting.
    pub genai_rate_limit: Option<(u64, u32)>,
}

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if a CORS origin or the rate limit settings are invalid.
pub fn app_router(state: AppState, options: &RouterOptions) -> Result<NormalizePath<Router>> {
    let genai_router = match options.genai_rate_limit {
        Some((per_second, burst)) => {
            api::routes::genai_routes().layer(rate_limit::layer(per_second, burst)?)
        }
        None => api::routes::genai_routes(),
    };

    let router = Router::new()
        .merge(api::routes::resource_routes())
        .merge(genai_router)
        .with_state(state)
        .layer(cors::layer(&options.cors_allowed_origins)?)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

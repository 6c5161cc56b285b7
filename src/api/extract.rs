//! Extractors whose rejections render as [`AppError`] bodies.
//!
//! Axum's own `Json` and `Path` reject with plain-text responses (and 422 for
//! JSON that does not match the target type). These wrappers turn every
//! rejection into a 400 with the usual `{"error": {...}}` envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

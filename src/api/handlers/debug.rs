//! Handler listing the registered routes.

use axum::Json;

use crate::api::dto::index::EndpointInfo;
use crate::api::routes::ENDPOINTS;

/// Lists every route with its allowed methods.
///
/// # Endpoint
///
/// `GET /debug/endpoints`
pub async fn endpoints_handler() -> Json<Vec<EndpointInfo>> {
    Json(
        ENDPOINTS
            .iter()
            .map(|(path, methods)| EndpointInfo {
                path: (*path).to_string(),
                methods: methods.iter().map(|m| (*m).to_string()).collect(),
            })
            .collect(),
    )
}

//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database check failed
///
/// The study tips check is informational: without an API key the endpoint
/// still answers with canned tips, so it never degrades the status.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "message": "API is running successfully",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 3 students registered" },
///     "study_tips": { "status": "ok", "message": "Generative provider configured" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let tips_check = check_study_tips(&state);

    let healthy = db_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        message: if healthy {
            "API is running successfully"
        } else {
            "Database unavailable"
        }
        .to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            study_tips: tips_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity by counting students.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.student_service.count_students().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Connected, {count} students registered")),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Database error: {}", e)),
        },
    }
}

/// Reports whether generated tips are available.
fn check_study_tips(state: &AppState) -> CheckStatus {
    let message = if state.study_tips_service.is_enabled() {
        "Generative provider configured"
    } else {
        "No API key, serving default tips"
    };

    CheckStatus {
        status: "ok".to_string(),
        message: Some(message.to_string()),
    }
}

//! DTOs for the service index and route listing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    pub message: String,
    pub version: String,
    /// Resource name to path, e.g. `"students" -> "/students"`.
    pub endpoints: BTreeMap<String, String>,
}

/// One entry of `GET /debug/endpoints`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointInfo {
    pub path: String,
    pub methods: Vec<String>,
}

use serde::{Deserialize, Serialize};
use crate::core::projection::{AccountView, ProfileView};
use crate::models::domain::{MatchRequest, StoreStats};

/// Response for register and login
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub account: AccountView,
}

/// Response for profile create and update
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub profile: ProfileView,
}

/// Response for a newly sent interest request
#[derive(Debug, Clone, Serialize)]
pub struct MatchRequestResponse {
    pub message: String,
    #[serde(rename = "matchRequest")]
    pub match_request: MatchRequest,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub records: StoreStats,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

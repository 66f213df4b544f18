use serde::Deserialize;
use validator::Validate;
use crate::models::domain::{ProfileAttributes, ProfileId, ProfilePatch};

/// Request to register a new account
#[derive(Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    #[validate(email)]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub password: String,
}

/// Request to log in with email and password
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub password: String,
}

/// Body of `POST /profiles`
pub type CreateProfileRequest = ProfileAttributes;

/// Body of `PUT /profiles/{id}`
pub type UpdateProfileRequest = ProfilePatch;

/// Request to send interest in a profile
#[derive(Debug, Clone, Deserialize)]
pub struct SendInterestRequest {
    #[serde(rename = "profileId", default)]
    pub profile_id: Option<ProfileId>,
}

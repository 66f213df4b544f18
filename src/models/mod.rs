// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Account, AccountId, Credential, MatchRequest, MatchRequestId, MatchStatus, Profile,
    ProfileAttributes, ProfileId, ProfilePatch, SearchCriteria, StoreStats,
};
pub use requests::{
    CreateProfileRequest, LoginRequest, RegisterRequest, SendInterestRequest, UpdateProfileRequest,
};
pub use responses::{
    AuthResponse, ErrorResponse, HealthResponse, MatchRequestResponse, ProfileResponse,
};

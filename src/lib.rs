//! Matrimony Match - profile, search and interest-request service
//!
//! The data layer keeps accounts, profiles and match requests in memory and
//! answers multi-criterion profile searches. A thin actix-web layer exposes it
//! over HTTP with bearer-token authentication.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CoreError, ProfileQueryEngine, RecordStore, RelationshipTracker};
pub use crate::models::{
    Account, AccountId, MatchRequest, Profile, ProfileAttributes, ProfileId, ProfilePatch,
    SearchCriteria,
};

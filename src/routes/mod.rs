// Route exports
pub mod auth;
pub mod error;
pub mod extract;
pub mod health;
pub mod matches;
pub mod profiles;

use actix_web::web;
use std::sync::Arc;
use crate::core::{ProfileQueryEngine, RecordStore, RelationshipTracker};
use crate::services::{CredentialHasher, TokenService};

pub use error::{handle_json_payload_error, handle_path_error, handle_query_payload_error, ApiError};
pub use extract::AuthenticatedAccount;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub search: ProfileQueryEngine,
    pub relationships: RelationshipTracker,
    pub hasher: CredentialHasher,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(store: Arc<RecordStore>, hasher: CredentialHasher, tokens: TokenService) -> Self {
        Self {
            search: ProfileQueryEngine::new(store.clone()),
            relationships: RelationshipTracker::new(store.clone()),
            store,
            hasher,
            tokens: Arc::new(tokens),
        }
    }
}

/// Register payload error handlers so malformed input gets the shared error body
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::configure)
            .configure(auth::configure)
            .configure(profiles::configure)
            .configure(matches::configure),
    );
}

// Service exports
pub mod auth;

pub use auth::{AuthError, Claims, CredentialHasher, TokenService};

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use crate::models::AccountId;
use crate::routes::{ApiError, AppState};
use crate::services::AuthError;

/// Account identified by the request's bearer token
///
/// Use `Option<AuthenticatedAccount>` on routes where signing in is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedAccount(pub AccountId);

impl AuthenticatedAccount {
    pub fn id(self) -> AccountId {
        self.0
    }
}

impl FromRequest for AuthenticatedAccount {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedAccount, ApiError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| ApiError::Internal("application state is not configured".to_string()))?;

    let token = bearer_token(req).ok_or(AuthError::MissingToken)?;
    let account_id = state.tokens.verify(token)?;

    // Tokens outlive the in-memory store across restarts
    if state.store.find_account_by_id(account_id).is_none() {
        let reason = format!("account {} does not exist", account_id);
        return Err(AuthError::InvalidToken(reason).into());
    }

    Ok(AuthenticatedAccount(account_id))
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

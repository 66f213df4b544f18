use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::{AccountView, CoreError};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::routes::{ApiError, AppState};
use crate::services::AuthError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/auth/register", web::post().to(register))
        .route("/auth/login", web::post().to(login));
}

/// Register endpoint
///
/// POST /api/auth/register
///
/// Request body:
/// ```json
/// { "name": "string", "email": "string", "password": "string" }
/// ```
async fn register(
    state: web::Data<AppState>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate().map_err(CoreError::from)?;
    let RegisterRequest { name, email, password } = req.into_inner();

    // Argon2 is CPU-bound; keep it off the async workers
    let hasher = state.hasher.clone();
    let credential = web::block(move || hasher.hash(&password)).await??;

    let account = state.store.create_account(&email, credential, &name)?;
    let token = state.tokens.issue(&account)?;

    tracing::info!("Registered account {}", account.id);

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        account: AccountView::from(&account),
    }))
}

/// Login endpoint
///
/// POST /api/auth/login
///
/// Unknown email and wrong password produce the same 401 response.
async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate().map_err(CoreError::from)?;
    let LoginRequest { email, password } = req.into_inner();

    let account = state
        .store
        .find_account_by_email(&email)
        .ok_or(AuthError::InvalidCredentials)?;

    let hasher = state.hasher.clone();
    let credential = account.credential.clone();
    let valid = web::block(move || hasher.verify(&password, &credential)).await??;
    if !valid {
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state.tokens.issue(&account)?;

    tracing::info!("Account {} logged in", account.id);

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        account: AccountView::from(&account),
    }))
}

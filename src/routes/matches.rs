use actix_web::{web, HttpResponse};
use crate::core::CoreError;
use crate::models::{MatchRequestResponse, SendInterestRequest};
use crate::routes::{ApiError, AppState, AuthenticatedAccount};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/matches", web::get().to(list_match_requests))
        .route("/matches", web::post().to(send_interest));
}

/// Interest requests sent or received by the caller
///
/// GET /api/matches
async fn list_match_requests(
    state: web::Data<AppState>,
    account: AuthenticatedAccount,
) -> HttpResponse {
    let requests = state.relationships.requests_for(account.id());

    tracing::debug!("Account {} is involved in {} match requests", account.id(), requests.len());

    HttpResponse::Ok().json(requests)
}

/// Send interest in a profile
///
/// POST /api/matches
///
/// Request body:
/// ```json
/// { "profileId": 12 }
/// ```
async fn send_interest(
    state: web::Data<AppState>,
    account: AuthenticatedAccount,
    req: web::Json<SendInterestRequest>,
) -> Result<HttpResponse, ApiError> {
    let profile_id = req
        .profile_id
        .ok_or_else(|| CoreError::missing_field("profileId"))?;

    let match_request = state.relationships.send_interest(account.id(), profile_id)?;

    tracing::info!(
        "Account {} sent interest to account {} (profile {})",
        account.id(),
        match_request.target_id,
        profile_id
    );

    Ok(HttpResponse::Created().json(MatchRequestResponse {
        message: "Match request sent successfully".to_string(),
        match_request,
    }))
}

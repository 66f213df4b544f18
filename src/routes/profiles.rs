use actix_web::{web, HttpResponse};
use std::collections::HashMap;
use validator::Validate;
use crate::core::{CoreError, ProfileView};
use crate::models::{
    CreateProfileRequest, ProfileId, ProfileResponse, SearchCriteria, UpdateProfileRequest,
};
use crate::routes::{ApiError, AppState, AuthenticatedAccount};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/profiles", web::get().to(search_profiles))
        .route("/profiles", web::post().to(create_profile))
        .route("/profiles/me/profile", web::get().to(my_profile))
        .route("/profiles/{id}", web::get().to(get_profile))
        .route("/profiles/{id}", web::put().to(update_profile));
}

/// Search profiles
///
/// GET /api/profiles?gender=&minAge=&maxAge=&religion=&city=
///
/// Without filters every profile is returned. Signing in is optional and only
/// reveals the owner id on the caller's own profile.
async fn search_profiles(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
    viewer: Option<AuthenticatedAccount>,
) -> Result<HttpResponse, ApiError> {
    let criteria = SearchCriteria::from_params(&query)?;
    let profiles = state.search.search(&criteria);

    tracing::info!("Returning {} profiles for criteria {:?}", profiles.len(), criteria);

    let viewer = viewer.map(AuthenticatedAccount::id);
    Ok(HttpResponse::Ok().json(ProfileView::project_all(&profiles, viewer)))
}

/// GET /api/profiles/{id}
async fn get_profile(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    viewer: Option<AuthenticatedAccount>,
) -> Result<HttpResponse, ApiError> {
    let id = ProfileId(path.into_inner());
    let profile = state
        .store
        .find_profile_by_id(id)
        .ok_or_else(|| CoreError::NotFound(format!("profile {}", id)))?;

    let viewer = viewer.map(AuthenticatedAccount::id);
    Ok(HttpResponse::Ok().json(ProfileView::project(&profile, viewer)))
}

/// Create the caller's profile
///
/// POST /api/profiles
async fn create_profile(
    state: web::Data<AppState>,
    account: AuthenticatedAccount,
    req: web::Json<CreateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate().map_err(CoreError::from)?;

    let profile = state.store.create_profile(account.id(), req.into_inner())?;

    tracing::info!("Account {} created profile {}", account.id(), profile.id);

    Ok(HttpResponse::Created().json(ProfileResponse {
        message: "Profile created successfully".to_string(),
        profile: ProfileView::project(&profile, Some(account.id())),
    }))
}

/// Update a profile owned by the caller
///
/// PUT /api/profiles/{id}
async fn update_profile(
    state: web::Data<AppState>,
    account: AuthenticatedAccount,
    path: web::Path<u64>,
    req: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate().map_err(CoreError::from)?;

    let id = ProfileId(path.into_inner());
    let profile = state.store.update_profile_as(account.id(), id, &req)?;

    tracing::info!("Account {} updated profile {}", account.id(), profile.id);

    Ok(HttpResponse::Ok().json(ProfileResponse {
        message: "Profile updated successfully".to_string(),
        profile: ProfileView::project(&profile, Some(account.id())),
    }))
}

/// GET /api/profiles/me/profile
async fn my_profile(
    state: web::Data<AppState>,
    account: AuthenticatedAccount,
) -> Result<HttpResponse, ApiError> {
    let profile = state
        .store
        .find_profile_by_account_id(account.id())
        .ok_or_else(|| CoreError::NotFound(format!("profile of account {}", account.id())))?;

    Ok(HttpResponse::Ok().json(ProfileView::project(&profile, Some(account.id()))))
}

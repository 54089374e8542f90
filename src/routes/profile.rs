use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::{catalog::CanteenMenu, profile::UpdateProfileRequest},
    error::AppResult,
    middleware::auth::CurrentUser,
    models::UserIdentity,
    response::ApiResponse,
    services::profile_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_profile).put(update_profile))
}

pub fn owner_router() -> Router<AppState> {
    Router::new().route("/canteen", get(owner_canteen))
}

#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Current identity", body = ApiResponse<UserIdentity>),
        (status = 401, description = "Not logged in")
    ),
    tag = "Profile"
)]
pub async fn get_profile(user: CurrentUser) -> AppResult<Json<ApiResponse<UserIdentity>>> {
    let resp = profile_service::get_profile(&user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated identity", body = ApiResponse<UserIdentity>),
        (status = 400, description = "Missing fields"),
        (status = 401, description = "Not logged in")
    ),
    tag = "Profile"
)]
pub async fn update_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<UserIdentity>>> {
    let resp = profile_service::update_profile(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/owner/canteen",
    responses(
        (status = 200, description = "The owner's canteen and menu", body = ApiResponse<CanteenMenu>),
        (status = 401, description = "Not logged in"),
        (status = 403, description = "Not a canteen owner")
    ),
    tag = "Profile"
)]
pub async fn owner_canteen(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<CanteenMenu>>> {
    let resp = profile_service::owner_canteen(&state, &user).await?;
    Ok(Json(resp))
}

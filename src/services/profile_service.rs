use crate::{
    audit::log_audit,
    dto::{catalog::CanteenMenu, profile::UpdateProfileRequest},
    error::{AppError, AppResult},
    middleware::auth::{CurrentUser, ensure_role},
    models::{Role, UserIdentity},
    response::{ApiResponse, Meta},
    session::ProfilePatch,
    state::AppState,
};

pub async fn get_profile(user: &CurrentUser) -> AppResult<ApiResponse<UserIdentity>> {
    Ok(ApiResponse::success(
        "OK",
        user.0.clone(),
        Some(Meta::empty()),
    ))
}

/// Changes name, email and phone of the logged-in identity. Role and canteen
/// stay as they are.
pub async fn update_profile(
    state: &AppState,
    user: &CurrentUser,
    payload: UpdateProfileRequest,
) -> AppResult<ApiResponse<UserIdentity>> {
    let UpdateProfileRequest { name, email, phone } = payload;
    if name.is_empty() || email.is_empty() || phone.is_empty() {
        return Err(AppError::BadRequest(
            "Please fill in all required fields.".into(),
        ));
    }

    state.simulate_latency().await;

    let updated = state
        .session
        .lock()
        .await
        .update_profile(ProfilePatch { name, email, phone })
        .ok_or_else(|| AppError::Unauthorized("Please log in first".into()))?;

    log_audit(Some(&user.0.id), "profile_update", Some("session"), None);

    Ok(ApiResponse::success(
        "Your profile has been updated successfully.",
        updated,
        Some(Meta::empty()),
    ))
}

/// The canteen a canteen owner runs, with its full menu.
pub async fn owner_canteen(
    state: &AppState,
    user: &CurrentUser,
) -> AppResult<ApiResponse<CanteenMenu>> {
    ensure_role(user, Role::CanteenOwner)?;
    let canteen_id = user.0.canteen_id.as_deref().ok_or(AppError::Forbidden)?;
    let canteen = state
        .catalog
        .canteen(canteen_id)
        .cloned()
        .ok_or(AppError::NotFound)?;
    let items = state
        .catalog
        .menu(canteen_id, &Default::default())
        .into_iter()
        .cloned()
        .collect();

    Ok(ApiResponse::success(
        "OK",
        CanteenMenu { canteen, items },
        Some(Meta::empty()),
    ))
}

use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::auth::{LoginRequest, LoginResponse, RegisterRequest, SessionStatus},
    error::{AppError, AppResult},
    models::{Role, UserIdentity},
    response::{ApiResponse, Meta},
    state::AppState,
};

fn missing_information() -> AppError {
    AppError::BadRequest("Please fill in all fields.".into())
}

pub async fn login_user(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let LoginRequest { email, password } = payload;
    if email.is_empty() || password.is_empty() {
        return Err(missing_information());
    }

    state.simulate_latency().await;

    let user = state.credentials.authenticate(&email, &password)?;
    let redirect_to = user.landing_path();
    state.session.lock().await.login(user.clone());

    log_audit(
        Some(&user.id),
        "user_login",
        Some("session"),
        Some(serde_json::json!({ "role": user.role })),
    );

    Ok(ApiResponse::success(
        format!("Welcome back, {}!", user.name),
        LoginResponse { user, redirect_to },
        Some(Meta::empty()),
    ))
}

/// Creates a customer identity and logs it in. The new account is not added to
/// the credential table, so it cannot log in again after logout.
pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let RegisterRequest {
        name,
        email,
        password,
        confirm_password,
        phone,
    } = payload;
    if [&name, &email, &password, &confirm_password, &phone]
        .iter()
        .any(|field| field.is_empty())
    {
        return Err(missing_information());
    }
    if password != confirm_password {
        return Err(AppError::BadRequest("Passwords do not match".into()));
    }

    state.simulate_latency().await;

    let user = UserIdentity {
        id: Uuid::new_v4().to_string(),
        name,
        email,
        phone,
        role: Role::Customer,
        canteen_id: None,
    };
    let redirect_to = user.landing_path();
    state.session.lock().await.login(user.clone());

    log_audit(
        Some(&user.id),
        "user_register",
        Some("session"),
        None,
    );

    Ok(ApiResponse::success(
        "Your account has been created.",
        LoginResponse { user, redirect_to },
        Some(Meta::empty()),
    ))
}

pub async fn logout_user(state: &AppState) -> AppResult<ApiResponse<SessionStatus>> {
    let mut session = state.session.lock().await;
    let user_id = session.current().map(|user| user.id.clone());
    session.logout();

    log_audit(user_id.as_deref(), "user_logout", Some("session"), None);

    Ok(ApiResponse::success(
        "Logged out",
        SessionStatus {
            is_logged_in: session.is_logged_in(),
        },
        Some(Meta::empty()),
    ))
}

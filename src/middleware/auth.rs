use axum::extract::FromRequestParts;

use crate::{
    error::AppError,
    models::{Role, UserIdentity},
    state::AppState,
};

/// The identity held by the session store. Rejects when nobody is logged in.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserIdentity);

pub fn ensure_role(user: &CurrentUser, role: Role) -> Result<(), AppError> {
    if user.0.role != role {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state.session.lock().await;
        session
            .current()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| AppError::Unauthorized("Please log in first".into()))
    }
}

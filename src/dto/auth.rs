use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::UserIdentity;

#[derive(Deserialize, Debug, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserIdentity,
    /// Page the client should open next for this role.
    pub redirect_to: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionStatus {
    pub is_logged_in: bool,
}

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};

use crate::{
    dto::checkout::{CheckoutRequest, Confirmation},
    error::AppResult,
    models::OrderDraft,
    response::{ApiResponse, Meta},
    services::checkout_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(checkout))
        .route("/confirmation", get(confirmation))
}

#[utoipa::path(
    post,
    path = "/api/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order draft written", body = ApiResponse<OrderDraft>),
        (status = 400, description = "Cart is empty"),
        (status = 409, description = "Another checkout is in flight")
    ),
    tag = "Checkout"
)]
pub async fn checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<ApiResponse<OrderDraft>>> {
    let resp = checkout_service::submit_order(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/checkout/confirmation",
    responses(
        (status = 200, description = "Pending order draft; the cart is emptied", body = ApiResponse<OrderDraft>),
        (status = 303, description = "No draft, go back to the cart")
    ),
    tag = "Checkout"
)]
pub async fn confirmation(State(state): State<AppState>) -> AppResult<Response> {
    let resp = match checkout_service::confirm_order(&state).await? {
        Confirmation::Confirmed(draft) => Json(ApiResponse::success(
            "Order confirmed",
            draft,
            Some(Meta::empty()),
        ))
        .into_response(),
        Confirmation::RedirectToCart => Redirect::to("/api/cart").into_response(),
    };
    Ok(resp)
}

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch, post},
};

use crate::{
    dto::cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
    error::AppResult,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_view).delete(clear_cart))
        .route("/items", post(add_to_cart))
        .route("/items/{item_id}", patch(update_quantity).delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart lines with total price and item count", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn cart_view(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::view_cart(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart/items",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Add one unit of a food item", body = ApiResponse<CartView>),
        (status = 400, description = "Unknown food item"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::add_to_cart(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/cart/items/{item_id}",
    params(
        ("item_id" = String, Path, description = "Food item ID")
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Set the quantity of a line", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::update_quantity(&state, &item_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cart/items/{item_id}",
    params(
        ("item_id" = String, Path, description = "Food item ID")
    ),
    responses(
        (status = 200, description = "Remove a line", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::remove_from_cart(&state, &item_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    responses(
        (status = 200, description = "Empty the cart", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn clear_cart(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::clear_cart(&state).await?;
    Ok(Json(resp))
}

use crate::{
    audit::log_audit,
    dto::cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn view_cart(state: &AppState) -> AppResult<ApiResponse<CartView>> {
    let cart = state.cart.lock().await;
    Ok(ApiResponse::success(
        "OK",
        CartView::from(cart.cart()),
        Some(Meta::empty()),
    ))
}

pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartView>> {
    let item = state
        .catalog
        .item(&payload.item_id)
        .ok_or_else(|| AppError::BadRequest("food item not found".to_string()))?;

    let user_id = state.current_user_id().await;
    let mut cart = state.cart.lock().await;
    cart.add_item(item);
    let quantity = cart.cart().line(&item.id).map_or(0, |line| line.quantity);

    log_audit(
        user_id.as_deref(),
        "cart_add",
        Some("cart"),
        Some(serde_json::json!({ "item_id": item.id, "quantity": quantity })),
    );

    Ok(ApiResponse::success(
        "Added to cart",
        CartView::from(cart.cart()),
        Some(Meta::empty()),
    ))
}

pub async fn update_quantity(
    state: &AppState,
    item_id: &str,
    payload: UpdateQuantityRequest,
) -> AppResult<ApiResponse<CartView>> {
    let user_id = state.current_user_id().await;
    let mut cart = state.cart.lock().await;
    cart.set_quantity(item_id, payload.quantity);

    log_audit(
        user_id.as_deref(),
        "cart_update",
        Some("cart"),
        Some(serde_json::json!({ "item_id": item_id, "quantity": payload.quantity })),
    );

    Ok(ApiResponse::success(
        "OK",
        CartView::from(cart.cart()),
        Some(Meta::empty()),
    ))
}

/// Removing an item that is not in the cart is not an error.
pub async fn remove_from_cart(
    state: &AppState,
    item_id: &str,
) -> AppResult<ApiResponse<CartView>> {
    let user_id = state.current_user_id().await;
    let mut cart = state.cart.lock().await;
    cart.remove_item(item_id);

    log_audit(
        user_id.as_deref(),
        "cart_remove",
        Some("cart"),
        Some(serde_json::json!({ "item_id": item_id })),
    );

    Ok(ApiResponse::success(
        "Removed from cart",
        CartView::from(cart.cart()),
        Some(Meta::empty()),
    ))
}

pub async fn clear_cart(state: &AppState) -> AppResult<ApiResponse<CartView>> {
    let user_id = state.current_user_id().await;
    let mut cart = state.cart.lock().await;
    cart.clear();

    log_audit(user_id.as_deref(), "cart_clear", Some("cart"), None);

    Ok(ApiResponse::success(
        "Cart cleared",
        CartView::from(cart.cart()),
        Some(Meta::empty()),
    ))
}

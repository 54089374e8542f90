use chrono::Utc;

use crate::{
    audit::log_audit,
    dto::checkout::{CheckoutRequest, Confirmation},
    error::AppResult,
    models::OrderDraft,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Writes an order draft for the current cart.
///
/// The flow stays busy until the simulated latency has passed, so a repeated
/// submit in that window is turned away.
pub async fn submit_order(
    state: &AppState,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<OrderDraft>> {
    let cart = state.cart.lock().await.cart().clone();
    let (draft, guard) = {
        let mut rng = rand::rng();
        state
            .checkout
            .submit(&cart, payload.payment_method, &mut rng, Utc::now())?
    };

    state.simulate_latency().await;
    drop(guard);

    let user_id = state.current_user_id().await;
    log_audit(
        user_id.as_deref(),
        "checkout",
        Some("order_draft"),
        Some(serde_json::json!({
            "order_id": draft.order_id,
            "total": draft.total,
            "payment_method": draft.payment_method,
        })),
    );

    Ok(ApiResponse::success(
        "Order placed",
        draft,
        Some(Meta::empty()),
    ))
}

/// Consumes the pending draft and empties the live cart.
pub async fn confirm_order(state: &AppState) -> AppResult<Confirmation> {
    let draft = {
        let mut rng = rand::rng();
        state.checkout.take_draft(&mut rng)
    };

    let Some(draft) = draft else {
        tracing::debug!("no order draft to confirm");
        return Ok(Confirmation::RedirectToCart);
    };

    state.cart.lock().await.clear();

    let user_id = state.current_user_id().await;
    log_audit(
        user_id.as_deref(),
        "order_confirmed",
        Some("order_draft"),
        Some(serde_json::json!({ "order_id": draft.order_id, "token": draft.token })),
    );

    Ok(Confirmation::Confirmed(draft))
}

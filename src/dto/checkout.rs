use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::{OrderDraft, PaymentMethod};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

/// Outcome of opening the confirmation view.
#[derive(Debug)]
pub enum Confirmation {
    Confirmed(OrderDraft),
    /// Nothing to confirm; the client goes back to the cart.
    RedirectToCart,
}

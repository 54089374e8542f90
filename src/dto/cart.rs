use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{cart::Cart, models::CartLine};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub item_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    /// Zero or less removes the line.
    pub quantity: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub total_price: i64,
    pub item_count: u64,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().to_vec(),
            total_price: cart.total_price(),
            item_count: cart.item_count(),
        }
    }
}

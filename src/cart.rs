use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::{CartLine, FoodItem},
    storage::{Storage, read_json, write_json},
};

/// Durable storage key holding the serialized line sequence.
pub const CART_KEY: &str = "cart";

/// Ordered cart lines, at most one per food item id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Cart {
    #[schema(value_type = Vec<CartLine>)]
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, item_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn add_item(&mut self, item: &FoodItem) {
        match self.lines.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::from_item(item)),
        }
    }

    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|line| line.id != item_id);
    }

    /// Non-positive quantities remove the line. Unknown ids are ignored.
    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(item_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == item_id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total_price(&self) -> i64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

/// A [`Cart`] backed by durable storage. Every mutation writes the full line
/// sequence under [`CART_KEY`].
pub struct CartStore {
    cart: Cart,
    storage: Arc<dyn Storage>,
}

impl CartStore {
    /// Rehydrates from storage, starting empty when the record is missing or malformed.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let cart = read_json::<Cart>(storage.as_ref(), CART_KEY)
            .map(dedupe)
            .unwrap_or_default();
        tracing::debug!(lines = cart.lines().len(), "cart rehydrated");
        Self { cart, storage }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_item(&mut self, item: &FoodItem) {
        self.cart.add_item(item);
        self.persist();
    }

    pub fn remove_item(&mut self, item_id: &str) {
        self.cart.remove_item(item_id);
        self.persist();
    }

    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) {
        self.cart.set_quantity(item_id, quantity);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    pub fn total_price(&self) -> i64 {
        self.cart.total_price()
    }

    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    fn persist(&self) {
        if let Err(err) = write_json(self.storage.as_ref(), CART_KEY, &self.cart) {
            tracing::warn!(error = %err, "cart persist failed");
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore").field("cart", &self.cart).finish()
    }
}

// A hand-edited record may repeat an id or hold zero quantities; fold it back
// into one positive line per id, keeping first-seen order.
fn dedupe(cart: Cart) -> Cart {
    let mut out = Cart::new();
    for line in cart.lines {
        if line.quantity == 0 {
            continue;
        }
        match out.lines.iter_mut().find(|existing| existing.id == line.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => out.lines.push(line),
        }
    }
    out
}

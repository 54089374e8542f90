use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;

use crate::{
    cart::Cart,
    models::{CartLine, OrderDraft, PaymentMethod},
    storage::{Storage, StorageError, read_json, write_json},
};

/// Flat delivery fee added on top of the cart subtotal, in rupees.
pub const DELIVERY_FEE: i64 = 40;

/// Session storage keys the draft is spread across.
pub mod keys {
    pub const ORDER_CART: &str = "orderCart";
    pub const ORDER_TOTAL: &str = "orderTotal";
    pub const PAYMENT_METHOD: &str = "paymentMethod";
    pub const ORDER_ID: &str = "orderId";
    pub const ORDER_TOKEN: &str = "orderToken";
    pub const ORDER_DATE: &str = "orderDate";

    pub const ALL: [&str; 6] = [
        ORDER_CART,
        ORDER_TOTAL,
        PAYMENT_METHOD,
        ORDER_ID,
        ORDER_TOKEN,
        ORDER_DATE,
    ];
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("An order is already being submitted")]
    Busy,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Idle,
    Submitting,
}

/// `ORD` plus a zero-padded number below one million.
pub fn generate_order_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("ORD{:06}", rng.random_range(0..1_000_000u32))
}

/// One uppercase letter and a zero-padded number below one hundred, e.g. `B07`.
/// Always three characters.
pub fn generate_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    let letter = char::from(b'A' + rng.random_range(0..26u8));
    format!("{letter}{:02}", rng.random_range(0..100u8))
}

/// Writes order drafts into session storage and hands them to the
/// confirmation step.
pub struct CheckoutFlow {
    session: Arc<dyn Storage>,
    busy: AtomicBool,
}

/// Holds the flow in [`CheckoutState::Submitting`] until dropped.
#[derive(Debug)]
pub struct SubmitGuard<'a> {
    busy: &'a AtomicBool,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

impl CheckoutFlow {
    pub fn new(session: Arc<dyn Storage>) -> Self {
        Self {
            session,
            busy: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> CheckoutState {
        if self.busy.load(Ordering::Acquire) {
            CheckoutState::Submitting
        } else {
            CheckoutState::Idle
        }
    }

    /// Snapshots `cart` into a draft and writes it to session storage.
    ///
    /// An empty cart is rejected before the flow leaves `Idle`. The returned
    /// guard keeps later submissions out until the caller drops it.
    pub fn submit<R: Rng + ?Sized>(
        &self,
        cart: &Cart,
        payment_method: PaymentMethod,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<(OrderDraft, SubmitGuard<'_>), CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(CheckoutError::Busy);
        }
        let guard = SubmitGuard { busy: &self.busy };

        let subtotal = cart.total_price();
        let draft = OrderDraft {
            order_id: generate_order_id(rng),
            token: generate_token(rng),
            lines: cart.lines().to_vec(),
            subtotal,
            delivery_fee: DELIVERY_FEE,
            total: subtotal + DELIVERY_FEE,
            payment_method,
            created_at: now,
        };

        if let Err(err) = self.write_draft(&draft) {
            self.clear_draft();
            return Err(err.into());
        }

        tracing::debug!(order_id = %draft.order_id, token = %draft.token, "order draft written");
        Ok((draft, guard))
    }

    /// Reads the pending draft and removes it from session storage.
    ///
    /// Returns `None` when no complete draft is present. A missing order id or
    /// token is regenerated.
    pub fn take_draft<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<OrderDraft> {
        let session = self.session.as_ref();
        let lines: Vec<CartLine> = read_json(session, keys::ORDER_CART)?;
        let subtotal = match session.get(keys::ORDER_TOTAL)?.trim().parse::<i64>() {
            Ok(subtotal) => subtotal,
            Err(err) => {
                tracing::warn!(error = %err, "order draft total is not a number");
                return None;
            }
        };

        let payment_method = session
            .get(keys::PAYMENT_METHOD)
            .and_then(|value| PaymentMethod::parse(&value))
            .unwrap_or_default();
        let order_id = session
            .get(keys::ORDER_ID)
            .unwrap_or_else(|| generate_order_id(rng));
        let token = session
            .get(keys::ORDER_TOKEN)
            .unwrap_or_else(|| generate_token(rng));
        let created_at = session
            .get(keys::ORDER_DATE)
            .and_then(|value| DateTime::parse_from_rfc3339(&value).ok())
            .map(|date| date.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);

        self.clear_draft();

        Some(OrderDraft {
            order_id,
            token,
            lines,
            subtotal,
            delivery_fee: DELIVERY_FEE,
            total: subtotal + DELIVERY_FEE,
            payment_method,
            created_at,
        })
    }

    fn write_draft(&self, draft: &OrderDraft) -> Result<(), StorageError> {
        let session = self.session.as_ref();
        write_json(session, keys::ORDER_CART, &draft.lines)?;
        session.set(keys::ORDER_TOTAL, &draft.subtotal.to_string())?;
        session.set(keys::PAYMENT_METHOD, draft.payment_method.as_str())?;
        session.set(keys::ORDER_ID, &draft.order_id)?;
        session.set(keys::ORDER_TOKEN, &draft.token)?;
        session.set(keys::ORDER_DATE, &draft.created_at.to_rfc3339())
    }

    /// Removes every draft key, including those of a partial write.
    fn clear_draft(&self) {
        for key in keys::ALL {
            if let Err(err) = self.session.remove(key) {
                tracing::warn!(key, error = %err, "order draft cleanup failed");
            }
        }
    }
}

impl std::fmt::Debug for CheckoutFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutFlow")
            .field("state", &self.state())
            .finish()
    }
}

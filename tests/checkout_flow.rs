use std::{io, sync::Arc};

use campus_canteen::{
    cart::Cart,
    catalog::Catalog,
    checkout::{
        CheckoutError, CheckoutFlow, CheckoutState, DELIVERY_FEE, generate_order_id,
        generate_token, keys,
    },
    models::PaymentMethod,
    storage::{MemoryStorage, Storage, StorageError},
};
use chrono::{TimeZone, Utc};
use rand::{SeedableRng, rngs::StdRng};

fn sample_cart() -> Cart {
    let catalog = Catalog::builtin();
    let mut cart = Cart::new();
    let dosa = catalog.item("102").expect("item 102");
    cart.add_item(dosa);
    cart.add_item(dosa);
    cart.add_item(catalog.item("303").expect("item 303"));
    cart
}

fn is_order_id(id: &str) -> bool {
    id.len() == 9 && id.starts_with("ORD") && id[3..].bytes().all(|b| b.is_ascii_digit())
}

fn is_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 3
        && bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_digit()
}

#[test]
fn generated_ids_and_tokens_keep_their_shape() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1_000 {
        let id = generate_order_id(&mut rng);
        let token = generate_token(&mut rng);
        assert!(is_order_id(&id), "bad order id {id}");
        assert!(is_token(&token), "bad token {token}");
    }
}

#[test]
fn seeded_rng_gives_repeatable_drafts() {
    let cart = sample_cart();
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();

    let first = {
        let flow = CheckoutFlow::new(Arc::new(MemoryStorage::new()));
        let (draft, _guard) = flow
            .submit(&cart, PaymentMethod::Upi, &mut StdRng::seed_from_u64(9), now)
            .unwrap();
        draft
    };
    let flow = CheckoutFlow::new(Arc::new(MemoryStorage::new()));
    let (second, _guard) = flow
        .submit(&cart, PaymentMethod::Upi, &mut StdRng::seed_from_u64(9), now)
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn empty_cart_is_rejected_without_a_draft() {
    let session: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let flow = CheckoutFlow::new(session.clone());

    let err = flow
        .submit(&Cart::new(), PaymentMethod::Card, &mut StdRng::seed_from_u64(3), Utc::now())
        .unwrap_err();

    assert!(matches!(err, CheckoutError::EmptyCart));
    assert_eq!(flow.state(), CheckoutState::Idle);
    for key in keys::ALL {
        assert!(session.get(key).is_none(), "{key} should not be written");
    }
}

#[test]
fn draft_total_adds_delivery_fee_and_is_written_to_session() {
    let session: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let flow = CheckoutFlow::new(session.clone());
    let cart = sample_cart();
    let now = Utc.with_ymd_and_hms(2024, 3, 18, 12, 15, 0).unwrap();

    let (draft, guard) = flow
        .submit(&cart, PaymentMethod::Wallet, &mut StdRng::seed_from_u64(11), now)
        .unwrap();
    drop(guard);

    assert_eq!(draft.subtotal, 2 * 149 + 69);
    assert_eq!(draft.delivery_fee, DELIVERY_FEE);
    assert_eq!(draft.total, cart.total_price() + 40);
    assert_eq!(draft.lines, cart.lines());
    assert_eq!(draft.created_at, now);

    assert_eq!(session.get(keys::ORDER_TOTAL).as_deref(), Some("367"));
    assert_eq!(session.get(keys::PAYMENT_METHOD).as_deref(), Some("wallet"));
    assert_eq!(session.get(keys::ORDER_ID), Some(draft.order_id.clone()));
    assert_eq!(session.get(keys::ORDER_TOKEN), Some(draft.token.clone()));
    assert!(session.get(keys::ORDER_CART).is_some());
    assert!(session.get(keys::ORDER_DATE).is_some());
}

#[test]
fn second_submit_while_in_flight_is_busy() {
    let flow = CheckoutFlow::new(Arc::new(MemoryStorage::new()));
    let cart = sample_cart();
    let mut rng = StdRng::seed_from_u64(5);

    let (_draft, guard) = flow
        .submit(&cart, PaymentMethod::Card, &mut rng, Utc::now())
        .unwrap();
    assert_eq!(flow.state(), CheckoutState::Submitting);

    let err = flow
        .submit(&cart, PaymentMethod::Card, &mut rng, Utc::now())
        .unwrap_err();
    assert!(matches!(err, CheckoutError::Busy));

    drop(guard);
    assert_eq!(flow.state(), CheckoutState::Idle);
    assert!(flow.submit(&cart, PaymentMethod::Card, &mut rng, Utc::now()).is_ok());
}

#[test]
fn draft_is_taken_exactly_once() {
    let flow = CheckoutFlow::new(Arc::new(MemoryStorage::new()));
    let mut rng = StdRng::seed_from_u64(21);
    let now = Utc.with_ymd_and_hms(2024, 3, 20, 18, 45, 0).unwrap();

    let (written, guard) = flow
        .submit(&sample_cart(), PaymentMethod::Upi, &mut rng, now)
        .unwrap();
    drop(guard);

    let taken = flow.take_draft(&mut rng).expect("draft present");
    assert_eq!(taken, written);
    assert!(flow.take_draft(&mut rng).is_none());
}

#[test]
fn draft_without_cart_or_total_is_absent() {
    let session: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let flow = CheckoutFlow::new(session.clone());
    let mut rng = StdRng::seed_from_u64(2);

    assert!(flow.take_draft(&mut rng).is_none());

    session.set(keys::ORDER_CART, "[]").unwrap();
    assert!(flow.take_draft(&mut rng).is_none());

    session.set(keys::ORDER_TOTAL, "many").unwrap();
    assert!(flow.take_draft(&mut rng).is_none());
}

#[test]
fn missing_id_and_token_are_regenerated() {
    let session: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let flow = CheckoutFlow::new(session.clone());
    session.set(keys::ORDER_CART, "[]").unwrap();
    session.set(keys::ORDER_TOTAL, "120").unwrap();

    let draft = flow
        .take_draft(&mut StdRng::seed_from_u64(8))
        .expect("draft present");
    assert!(is_order_id(&draft.order_id));
    assert!(is_token(&draft.token));
    assert_eq!(draft.total, 160);
    assert_eq!(draft.payment_method, PaymentMethod::Card);
}

/// Session storage that refuses writes to one key.
struct RefusingStorage {
    inner: MemoryStorage,
    refused: &'static str,
}

impl Storage for RefusingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.refused {
            return Err(io::Error::other("quota exceeded").into());
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

#[test]
fn failed_draft_write_leaves_nothing_to_confirm() {
    let session = Arc::new(RefusingStorage {
        inner: MemoryStorage::new(),
        refused: keys::ORDER_ID,
    });
    let flow = CheckoutFlow::new(session.clone());
    let mut rng = StdRng::seed_from_u64(13);

    let err = flow
        .submit(&sample_cart(), PaymentMethod::Card, &mut rng, Utc::now())
        .unwrap_err();
    assert!(matches!(err, CheckoutError::Storage(_)));
    assert_eq!(flow.state(), CheckoutState::Idle);

    for key in keys::ALL {
        assert_eq!(session.get(key), None, "{key} left behind");
    }
    assert!(flow.take_draft(&mut rng).is_none());
}

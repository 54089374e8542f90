use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
    Beverages,
    Others,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Canteen {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub rating: f32,
    pub location: String,
    pub opening_hours: String,
    pub is_open: bool,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Whole rupees.
    pub price: i64,
    pub image: String,
    pub canteen_id: String,
    pub canteen_name: String,
    pub rating: f32,
    pub category: Category,
}

/// A cart entry. Field names match the persisted `cart` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub image: String,
    pub canteen_id: String,
    pub canteen_name: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn from_item(item: &FoodItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            canteen_id: item.canteen_id.clone(),
            canteen_name: item.canteen_name.clone(),
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Admin,
    CanteenOwner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canteen_id: Option<String>,
}

impl UserIdentity {
    /// Canteen owners must carry the id of the canteen they run.
    pub fn is_consistent(&self) -> bool {
        self.role != Role::CanteenOwner || self.canteen_id.is_some()
    }

    /// Where the UI sends this identity right after login.
    pub fn landing_path(&self) -> String {
        match (self.role, self.canteen_id.as_deref()) {
            (Role::Admin, _) => "/admin/dashboard".to_string(),
            (Role::CanteenOwner, Some(canteen_id)) => {
                format!("/canteen-owner/dashboard?canteenId={canteen_id}")
            }
            _ => "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    Wallet,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Wallet => "wallet",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "card" => Some(PaymentMethod::Card),
            "upi" => Some(PaymentMethod::Upi),
            "wallet" => Some(PaymentMethod::Wallet),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderDraft {
    /// `ORD` followed by six digits.
    pub order_id: String,
    /// One uppercase letter and two digits, e.g. `B07`.
    pub token: String,
    pub lines: Vec<CartLine>,
    pub subtotal: i64,
    pub delivery_fee: i64,
    pub total: i64,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

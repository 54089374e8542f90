use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Canteen, FoodItem};

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct CanteenList {
    #[schema(value_type = Vec<Canteen>)]
    pub items: Vec<Canteen>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct FoodItemList {
    #[schema(value_type = Vec<FoodItem>)]
    pub items: Vec<FoodItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CanteenMenu {
    pub canteen: Canteen,
    pub items: Vec<FoodItem>,
}

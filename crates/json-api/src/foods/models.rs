//! Food payloads

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use thali::catalog::{FoodItem, FoodItemUpdate, NewFoodItem};

/// Food Item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FoodResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    pub category: String,
    pub is_available: bool,
    pub is_vegetarian: bool,
}

impl From<FoodItem> for FoodResponse {
    fn from(item: FoodItem) -> Self {
        Self {
            id: item.id.get(),
            name: item.name,
            description: item.description,
            price: item.price,
            image_url: item.image_url,
            category: item.category,
            is_available: item.is_available,
            is_vegetarian: item.is_vegetarian,
        }
    }
}

/// Create Food Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateFoodRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    pub category: String,
    /// Defaults to `true`
    #[serde(default)]
    pub is_available: Option<bool>,
    /// Defaults to `true`
    #[serde(default)]
    pub is_vegetarian: Option<bool>,
}

impl From<CreateFoodRequest> for NewFoodItem {
    fn from(request: CreateFoodRequest) -> Self {
        NewFoodItem {
            name: request.name,
            description: request.description,
            price: request.price,
            image_url: request.image_url,
            category: request.category,
            is_available: request.is_available.unwrap_or(true),
            is_vegetarian: request.is_vegetarian.unwrap_or(true),
        }
    }
}

/// Update Food Request
///
/// Absent fields keep their stored values.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateFoodRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub is_vegetarian: Option<bool>,
}

impl From<UpdateFoodRequest> for FoodItemUpdate {
    fn from(request: UpdateFoodRequest) -> Self {
        FoodItemUpdate {
            name: request.name,
            description: request.description,
            price: request.price,
            image_url: request.image_url,
            category: request.category,
            is_available: request.is_available,
            is_vegetarian: request.is_vegetarian,
        }
    }
}

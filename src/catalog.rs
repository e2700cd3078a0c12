//! Catalog

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    ids::TypedId,
    validation::{Validate, ValidationErrors},
};

/// Food item id
pub type FoodItemId = TypedId<FoodItem>;

/// Reference category vocabulary. Any non-empty category is accepted.
pub mod categories {
    /// South Indian dishes
    pub const SOUTH_INDIAN: &str = "south-indian";

    /// Punjabi dishes
    pub const PUNJABI: &str = "punjabi";

    /// Indo-Chinese dishes
    pub const CHINESE: &str = "chinese";

    /// All reference categories, in menu order.
    pub const ALL: [&str; 3] = [SOUTH_INDIAN, PUNJABI, CHINESE];
}

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Assigned by the catalog store on creation
    pub id: FoodItemId,

    /// Display name
    pub name: String,

    /// Menu description
    pub description: String,

    /// Unit price in whole currency units
    pub price: Decimal,

    /// Image location
    pub image_url: String,

    /// Menu category
    pub category: String,

    /// Whether the dish can currently be ordered
    pub is_available: bool,

    /// Whether the dish is vegetarian
    pub is_vegetarian: bool,
}

/// A food item that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFoodItem {
    /// Display name
    pub name: String,

    /// Menu description
    pub description: String,

    /// Unit price in whole currency units
    pub price: Decimal,

    /// Image location
    pub image_url: String,

    /// Menu category
    pub category: String,

    /// Defaults to `true`
    #[serde(default = "default_true")]
    pub is_available: bool,

    /// Defaults to `true`
    #[serde(default = "default_true")]
    pub is_vegetarian: bool,
}

impl NewFoodItem {
    /// Attach the id assigned by the store.
    #[must_use]
    pub fn into_food_item(self, id: FoodItemId) -> FoodItem {
        FoodItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
            category: self.category,
            is_available: self.is_available,
            is_vegetarian: self.is_vegetarian,
        }
    }
}

impl Validate for NewFoodItem {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require_text("name", &self.name);
        errors.require_text("description", &self.description);
        errors.require_positive("price", self.price);
        errors.require_text("imageUrl", &self.image_url);
        errors.require_text("category", &self.category);

        errors.into_result()
    }
}

/// A partial food item. Only present fields are merged into the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemUpdate {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New menu description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New unit price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,

    /// New image location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// New category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// New availability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,

    /// New vegetarian flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vegetarian: Option<bool>,
}

impl FoodItemUpdate {
    /// Whether the update carries no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the present fields into `item`. The id is never touched.
    pub fn apply_to(self, item: &mut FoodItem) {
        if let Some(name) = self.name {
            item.name = name;
        }

        if let Some(description) = self.description {
            item.description = description;
        }

        if let Some(price) = self.price {
            item.price = price;
        }

        if let Some(image_url) = self.image_url {
            item.image_url = image_url;
        }

        if let Some(category) = self.category {
            item.category = category;
        }

        if let Some(is_available) = self.is_available {
            item.is_available = is_available;
        }

        if let Some(is_vegetarian) = self.is_vegetarian {
            item.is_vegetarian = is_vegetarian;
        }
    }
}

impl Validate for FoodItemUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(name) = &self.name {
            errors.require_text("name", name);
        }

        if let Some(description) = &self.description {
            errors.require_text("description", description);
        }

        if let Some(price) = self.price {
            errors.require_positive("price", price);
        }

        if let Some(image_url) = &self.image_url {
            errors.require_text("imageUrl", image_url);
        }

        if let Some(category) = &self.category {
            errors.require_text("category", category);
        }

        errors.into_result()
    }
}

fn default_true() -> bool {
    true
}

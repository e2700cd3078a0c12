//! Cart
//!
//! The cart is a single aggregate (items plus running totals) driven by a pure
//! reducer. [`Cart`] wraps the reducer with persistence, notifications and
//! sidebar visibility.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{FoodItem, FoodItemId};

mod engine;
pub mod notify;
pub mod storage;

pub use engine::Cart;

/// One distinct dish in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// The food item id
    pub id: FoodItemId,

    /// Name at the time it was added
    pub name: String,

    /// Unit price at the time it was added
    pub price: Decimal,

    /// Image location
    pub image_url: String,

    /// Menu category
    pub category: String,

    /// Portions, always at least 1
    pub quantity: u32,
}

impl CartItem {
    /// `price × quantity`
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Rebuild the catalog view of this line, used when replaying a saved cart.
    fn as_food_item(&self) -> FoodItem {
        FoodItem {
            id: self.id,
            name: self.name.clone(),
            description: String::new(),
            price: self.price,
            image_url: self.image_url.clone(),
            category: self.category.clone(),
            is_available: true,
            is_vegetarian: true,
        }
    }
}

impl From<&FoodItem> for CartItem {
    fn from(item: &FoodItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            image_url: item.image_url.clone(),
            category: item.category.clone(),
            quantity: 1,
        }
    }
}

/// Items in insertion order plus their running totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    items: Vec<CartItem>,
    total_items: u32,
    total_amount: Decimal,
}

impl CartState {
    /// Lines in the order they were first added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    /// Sum of `price × quantity`, the subtotal before fees and tax.
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line for `id`, if present.
    pub fn get(&self, id: FoodItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Totals recomputed from the lines, ignoring the maintained ones.
    pub fn recomputed_totals(&self) -> (u32, Decimal) {
        self.items.iter().fold((0, Decimal::ZERO), |(count, amount), item| {
            (count + item.quantity, amount + item.line_total())
        })
    }
}

/// Every way the cart can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one portion of a dish.
    AddItem(FoodItem),

    /// Drop a line entirely, whatever its quantity.
    RemoveItem(FoodItemId),

    /// Set a line's quantity. Non-positive quantities are ignored.
    UpdateQuantity {
        /// Line to change
        id: FoodItemId,

        /// Requested quantity
        quantity: i64,
    },

    /// Empty the cart.
    ClearCart,
}

/// Apply `action` to `state`.
///
/// Totals are adjusted incrementally and always equal
/// [`CartState::recomputed_totals`]. Actions that do not apply (unknown ids,
/// non-positive quantities) return the state unchanged.
#[must_use]
pub fn reduce(mut state: CartState, action: CartAction) -> CartState {
    match action {
        CartAction::AddItem(food) => {
            let Some(total_items) = state.total_items.checked_add(1) else {
                return state;
            };

            match state.items.iter_mut().find(|item| item.id == food.id) {
                Some(existing) => {
                    existing.quantity += 1;
                    state.total_amount += existing.price;
                }
                None => {
                    state.total_amount += food.price;
                    state.items.push(CartItem::from(&food));
                }
            }

            state.total_items = total_items;
        }
        CartAction::RemoveItem(id) => {
            if let Some(pos) = state.items.iter().position(|item| item.id == id) {
                let removed = state.items.remove(pos);

                state.total_items -= removed.quantity;
                state.total_amount -= removed.line_total();
            }
        }
        CartAction::UpdateQuantity { id, quantity } => {
            let Ok(quantity) = u32::try_from(quantity) else {
                return state;
            };

            if quantity == 0 {
                return state;
            }

            let current = state.total_items;

            if let Some(item) = state.items.iter_mut().find(|item| item.id == id) {
                // The new quantity must still fit in the cart-wide count.
                let Some(total_items) = (current - item.quantity).checked_add(quantity) else {
                    return state;
                };

                let previous = item.quantity;
                item.quantity = quantity;

                state.total_items = total_items;
                state.total_amount +=
                    item.price * (Decimal::from(quantity) - Decimal::from(previous));
            }
        }
        CartAction::ClearCart => {
            state = CartState::default();
        }
    }

    state
}

/// Rebuild a saved cart through the reducer.
///
/// Starting from an empty cart, each saved line is added once and then set to
/// its saved quantity, so the result always satisfies the totals invariant.
pub fn replay(saved: &CartState) -> CartState {
    saved
        .items
        .iter()
        .fold(CartState::default(), |state, item| {
            let state = reduce(state, CartAction::AddItem(item.as_food_item()));

            if item.quantity > 1 {
                reduce(
                    state,
                    CartAction::UpdateQuantity {
                        id: item.id,
                        quantity: i64::from(item.quantity),
                    },
                )
            } else {
                state
            }
        })
}

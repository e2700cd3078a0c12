//! Orders

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    catalog::FoodItemId,
    ids::TypedId,
    users::UserId,
    validation::{Validate, ValidationErrors},
};

/// Order id
pub type OrderId = TypedId<Order>;

/// Order lifecycle status.
///
/// Any value may follow any other; there is no enforced transition order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, awaiting the restaurant
    #[default]
    Pending,

    /// Accepted by the restaurant
    Confirmed,

    /// Handed to the customer
    Delivered,

    /// Abandoned
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown enum value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl FromStr for OrderStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "order status",
                value: s.to_string(),
            })
    }
}

/// How the customer pays on delivery. Payment itself is simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery
    Cash,

    /// Card on delivery
    Card,

    /// UPI transfer
    Upi,
}

impl PaymentMethod {
    /// Every payment method.
    pub const ALL: [Self; 3] = [Self::Cash, Self::Card, Self::Upi];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Upi => "upi",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "payment method",
                value: s.to_string(),
            })
    }
}

/// A frozen snapshot of one cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Ordered dish
    pub food_item_id: FoodItemId,

    /// Number of portions
    pub quantity: u32,

    /// Unit price at the time of ordering
    pub price: Decimal,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Assigned by the order store
    pub id: OrderId,

    /// Customer who placed the order
    pub user_id: UserId,

    /// Line snapshots, in cart order
    pub items: Vec<OrderLine>,

    /// Grand total including delivery fee and tax
    pub total_amount: Decimal,

    /// Current status
    pub status: OrderStatus,

    /// Where to deliver
    pub delivery_address: String,

    /// How the customer pays
    pub payment_method: PaymentMethod,

    /// Contact number for the rider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,

    /// Free-form kitchen or rider notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,

    /// Set once at creation
    pub order_date: Timestamp,
}

/// An order that has not been stored yet.
///
/// The owner always comes from the authenticated session. A `userId` in a
/// request body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Line snapshots
    pub items: Vec<OrderLine>,

    /// Grand total including delivery fee and tax
    pub total_amount: Decimal,

    /// Defaults to pending
    #[serde(default)]
    pub status: OrderStatus,

    /// Where to deliver
    pub delivery_address: String,

    /// How the customer pays
    pub payment_method: PaymentMethod,

    /// Contact number for the rider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

impl NewOrder {
    /// Attach the store-assigned id, the owner and the creation time.
    #[must_use]
    pub fn into_order(self, id: OrderId, user_id: UserId, order_date: Timestamp) -> Order {
        Order {
            id,
            user_id,
            items: self.items,
            total_amount: self.total_amount,
            status: self.status,
            delivery_address: self.delivery_address,
            payment_method: self.payment_method,
            contact_phone: self.contact_phone,
            special_instructions: self.special_instructions,
            order_date,
        }
    }
}

impl Validate for NewOrder {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.items.is_empty() {
            errors.push("items", "must contain at least one line");
        }

        if self.items.iter().any(|line| line.quantity == 0) {
            errors.push("items.quantity", "must be at least 1");
        }

        if self
            .items
            .iter()
            .any(|line| line.price < Decimal::ZERO)
        {
            errors.push("items.price", "must not be negative");
        }

        errors.require_non_negative("totalAmount", self.total_amount);
        errors.require_text("deliveryAddress", &self.delivery_address);

        errors.into_result()
    }
}

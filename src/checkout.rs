//! Checkout
//!
//! Packages the cart into an order request, submits it once and clears the
//! cart only when the order was accepted.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    cart::{Cart, CartState, storage::CartSlot},
    orders::{NewOrder, Order, OrderLine, OrderStatus, PaymentMethod},
    pricing::Pricing,
    validation::{Validate, ValidationErrors},
};

/// Delivery details collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    /// Where to deliver
    pub delivery_address: String,

    /// Contact number for the rider
    pub contact_phone: String,

    /// How the customer pays
    pub payment_method: PaymentMethod,

    /// Free-form notes
    #[serde(default)]
    pub special_instructions: Option<String>,
}

impl Validate for CheckoutForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require_text("deliveryAddress", &self.delivery_address);
        errors.require_text("contactPhone", &self.contact_phone);

        errors.into_result()
    }
}

/// Failure reported by an [`OrderGateway`].
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The order store refused the request.
    #[error("order rejected: {0}")]
    Rejected(String),

    /// The request never completed.
    #[error("order submission failed: {0}")]
    Unavailable(String),
}

/// Checkout failures. The cart is left untouched in every case.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// The form is incomplete.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    /// Submission failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Where order requests are sent.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit `order` and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the order was not stored.
    async fn place_order(&self, order: NewOrder) -> Result<Order, GatewayError>;
}

/// Build the order request for `cart`.
///
/// Lines snapshot the cart prices. The total comes from the same quote the
/// cart summary shows.
///
/// # Errors
///
/// - [`CheckoutError::EmptyCart`]: the cart has no lines.
/// - [`CheckoutError::Invalid`]: the form is missing required fields.
pub fn build_order(
    cart: &CartState,
    form: &CheckoutForm,
    pricing: &Pricing,
) -> Result<NewOrder, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    form.validate()?;

    let items = cart
        .items()
        .iter()
        .map(|item| OrderLine {
            food_item_id: item.id,
            quantity: item.quantity,
            price: item.price,
        })
        .collect();

    Ok(NewOrder {
        items,
        total_amount: pricing.quote(cart.total_amount()).total,
        status: OrderStatus::Pending,
        delivery_address: form.delivery_address.clone(),
        payment_method: form.payment_method,
        contact_phone: Some(form.contact_phone.clone()),
        special_instructions: form
            .special_instructions
            .clone()
            .filter(|notes| !notes.trim().is_empty()),
    })
}

/// Submit the cart as an order.
///
/// On success the cart is cleared and the stored order returned. Nothing is
/// retried.
///
/// # Errors
///
/// Returns [`CheckoutError`] when the cart or form is unusable or the gateway
/// fails. Precondition failures never reach the gateway.
pub async fn place_order<S: CartSlot>(
    cart: &mut Cart<S>,
    form: &CheckoutForm,
    pricing: &Pricing,
    gateway: &dyn OrderGateway,
) -> Result<Order, CheckoutError> {
    let request = build_order(cart.state(), form, pricing)?;

    match gateway.place_order(request).await {
        Ok(order) => {
            info!(order_id = %order.id, total = %order.total_amount, "order placed");
            cart.clear();
            Ok(order)
        }
        Err(err) => {
            warn!(error = %err, "order submission failed, cart kept");
            Err(err.into())
        }
    }
}

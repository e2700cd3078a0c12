//! Order payloads

use rust_decimal::Decimal;
use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use thali::{
    catalog::FoodItemId,
    orders::{NewOrder, Order, OrderLine, OrderStatus, PaymentMethod},
};

use crate::extensions::*;

/// Order line snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderLinePayload {
    pub food_item_id: i64,
    pub quantity: u32,
    /// Unit price at the time of ordering
    pub price: Decimal,
}

impl From<OrderLine> for OrderLinePayload {
    fn from(line: OrderLine) -> Self {
        Self {
            food_item_id: line.food_item_id.get(),
            quantity: line.quantity,
            price: line.price,
        }
    }
}

impl From<OrderLinePayload> for OrderLine {
    fn from(line: OrderLinePayload) -> Self {
        OrderLine {
            food_item_id: FoodItemId::new(line.food_item_id),
            quantity: line.quantity,
            price: line.price,
        }
    }
}

/// Order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub id: i64,
    pub user_id: i64,
    pub items: Vec<OrderLinePayload>,
    pub total_amount: Decimal,
    /// pending, confirmed, delivered, or cancelled
    pub status: String,
    pub delivery_address: String,
    /// cash, card, or upi
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    /// RFC 3339 timestamp
    pub order_date: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.get(),
            user_id: order.user_id.get(),
            items: order.items.into_iter().map(Into::into).collect(),
            total_amount: order.total_amount,
            status: order.status.to_string(),
            delivery_address: order.delivery_address,
            payment_method: order.payment_method.to_string(),
            contact_phone: order.contact_phone,
            special_instructions: order.special_instructions,
            order_date: order.order_date.to_string(),
        }
    }
}

/// Create Order Request
///
/// The owner is always the signed-in account.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrderRequest {
    pub items: Vec<OrderLinePayload>,
    pub total_amount: Decimal,
    /// Defaults to pending
    #[serde(default)]
    pub status: Option<String>,
    pub delivery_address: String,
    pub payment_method: String,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

impl CreateOrderRequest {
    pub(crate) fn into_new_order(self) -> Result<NewOrder, StatusError> {
        let payment_method = self
            .payment_method
            .parse::<PaymentMethod>()
            .or_400("invalid paymentMethod")?;

        let status = self
            .status
            .as_deref()
            .map(str::parse::<OrderStatus>)
            .transpose()
            .or_400("invalid status")?
            .unwrap_or_default();

        Ok(NewOrder {
            items: self.items.into_iter().map(Into::into).collect(),
            total_amount: self.total_amount,
            status,
            delivery_address: self.delivery_address,
            payment_method,
            contact_phone: self.contact_phone,
            special_instructions: self.special_instructions,
        })
    }
}

/// Status Update Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StatusUpdateRequest {
    /// pending, confirmed, delivered, or cancelled
    pub status: String,
}

impl StatusUpdateRequest {
    pub(crate) fn parse(&self) -> Result<OrderStatus, StatusError> {
        self.status.parse::<OrderStatus>().or_400("invalid status")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn request(payment: &str, status: Option<&str>) -> TestResult<CreateOrderRequest> {
        Ok(serde_json::from_value(json!({
            "items": [{ "foodItemId": 1, "quantity": 2, "price": 120 }],
            "totalAmount": 292,
            "status": status,
            "deliveryAddress": "12 MG Road",
            "paymentMethod": payment
        }))?)
    }

    #[test]
    fn missing_status_defaults_to_pending() -> TestResult {
        let order = request("upi", None)?.into_new_order()?;

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_method, PaymentMethod::Upi);
        assert_eq!(order.items.first().map(|line| line.quantity), Some(2));

        Ok(())
    }

    #[test]
    fn unknown_payment_method_is_rejected() -> TestResult {
        assert!(request("cheque", None)?.into_new_order().is_err());
        assert!(request("cash", Some("shipped"))?.into_new_order().is_err());

        Ok(())
    }
}

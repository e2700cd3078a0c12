//! Cart notifications

use std::fmt;

use tracing::info;

use crate::catalog::FoodItemId;

/// A user-facing message raised by the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A portion was added.
    ItemAdded {
        /// Dish that was added
        id: FoodItemId,

        /// Its display name
        name: String,
    },
}

impl Notification {
    /// Short heading
    pub fn title(&self) -> &'static str {
        match self {
            Self::ItemAdded { .. } => "Added to cart",
        }
    }

    /// Body text
    pub fn description(&self) -> String {
        match self {
            Self::ItemAdded { name, .. } => format!("{name} has been added to your cart."),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.description())
    }
}

/// Receives cart notifications. Must not block.
pub trait Notifier: fmt::Debug + Send + Sync {
    /// Deliver `notification`.
    fn notify(&self, notification: Notification);
}

/// Emits notifications as log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        info!(title = notification.title(), "{}", notification.description());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_added_copy() {
        let notification = Notification::ItemAdded {
            id: FoodItemId::new(1),
            name: "Masala Dosa".to_string(),
        };

        assert_eq!(
            notification.to_string(),
            "Added to cart: Masala Dosa has been added to your cart."
        );
    }
}

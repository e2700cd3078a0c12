//! Thali prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{
        Cart, CartAction, CartItem, CartState,
        notify::{Notification, Notifier, TracingNotifier},
        reduce, replay,
        storage::{CART_KEY, CartSlot, FileSlot, MemorySlot, SlotError},
    },
    catalog::{FoodItem, FoodItemId, FoodItemUpdate, NewFoodItem, categories},
    checkout::{CheckoutError, CheckoutForm, GatewayError, OrderGateway, build_order, place_order},
    ids::TypedId,
    menu::{FixtureError, load_menu, parse_menu, reference_menu},
    orders::{NewOrder, Order, OrderId, OrderLine, OrderStatus, PaymentMethod},
    pricing::{Pricing, PricingError, Quote},
    receipt::{CartSummary, ReceiptError},
    users::{Credentials, NewUser, Session, User, UserId},
    validation::{Validate, ValidationError, ValidationErrors},
};

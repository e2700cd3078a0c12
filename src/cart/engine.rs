//! Cart engine

use tracing::{debug, warn};

use crate::{
    cart::{
        CartAction, CartState,
        notify::{Notification, Notifier, TracingNotifier},
        reduce, replay,
        storage::{CART_KEY, CartSlot, MemorySlot, SlotError},
    },
    catalog::{FoodItem, FoodItemId},
    pricing::{Pricing, Quote},
};

/// A persisted cart with sidebar visibility.
///
/// Every state change is written to the slot. Visibility is view state and is
/// never persisted.
#[derive(Debug)]
pub struct Cart<S: CartSlot = MemorySlot> {
    state: CartState,
    slot: S,
    notifier: Box<dyn Notifier>,
    open: bool,
}

impl<S: CartSlot> Cart<S> {
    /// Restore the cart saved in `slot`, or start empty.
    pub fn new(slot: S) -> Self {
        Self::with_notifier(slot, Box::new(TracingNotifier))
    }

    /// Restore the cart saved in `slot`, delivering notifications to `notifier`.
    pub fn with_notifier(slot: S, notifier: Box<dyn Notifier>) -> Self {
        let state = restore(&slot);

        Self {
            state,
            slot,
            notifier,
            open: false,
        }
    }

    /// Current contents and totals
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// The backing slot
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Give back the slot, dropping the in-memory state.
    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Apply `action`, persisting the result when it changed anything.
    pub fn dispatch(&mut self, action: CartAction) {
        let next = reduce(self.state.clone(), action);

        if next == self.state {
            return;
        }

        self.state = next;
        self.persist();
    }

    /// Add one portion of `item` and announce it.
    pub fn add_item(&mut self, item: &FoodItem) {
        self.dispatch(CartAction::AddItem(item.clone()));

        self.notifier.notify(Notification::ItemAdded {
            id: item.id,
            name: item.name.clone(),
        });
    }

    /// Drop the line for `id`.
    pub fn remove_item(&mut self, id: FoodItemId) {
        self.dispatch(CartAction::RemoveItem(id));
    }

    /// Set the quantity for `id`. Non-positive values are ignored.
    pub fn update_quantity(&mut self, id: FoodItemId, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity { id, quantity });
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.dispatch(CartAction::ClearCart);
    }

    /// Price the current subtotal.
    pub fn quote(&self, pricing: &Pricing) -> Quote {
        pricing.quote(self.state.total_amount())
    }

    /// Whether the sidebar is showing
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the sidebar
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the sidebar
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flip sidebar visibility
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.state)
            .map_err(SlotError::from)
            .and_then(|json| self.slot.store(CART_KEY, &json));

        if let Err(err) = result {
            warn!(error = %err, "failed to persist cart");
        }
    }
}

fn restore(slot: &impl CartSlot) -> CartState {
    let raw = match slot.load(CART_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return CartState::default(),
        Err(err) => {
            warn!(error = %err, "failed to read saved cart, starting empty");
            return CartState::default();
        }
    };

    match serde_json::from_str::<CartState>(&raw) {
        Ok(saved) => {
            let state = replay(&saved);
            debug!(items = state.items().len(), "restored saved cart");
            state
        }
        Err(err) => {
            warn!(error = %err, "saved cart is malformed, starting empty");
            CartState::default()
        }
    }
}

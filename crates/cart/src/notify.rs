//! User-facing failure notifications.
//!
//! Cart operations report failures through a [`Notifier`] sink so the cart
//! logic itself never decides how errors reach the shopper. [`NotifiedCart`]
//! is the front end the UI layer talks to: it forwards each operation to the
//! underlying [`CartStore`] and surfaces exactly one notification per
//! failure.

use std::sync::Arc;

use dragonfruit_core::ProductId;

use crate::store::{CartError, CartItem, CartStore};

/// Failure message when a requested quantity exceeds available stock.
pub const OUT_OF_STOCK: &str = "Requested quantity is out of stock.";
/// Failure message for add operations.
pub const ADD_FAILED: &str = "Could not add the product to the cart.";
/// Failure message for remove operations.
pub const REMOVE_FAILED: &str = "Could not remove the product from the cart.";
/// Failure message for quantity updates.
pub const UPDATE_FAILED: &str = "Could not update the product quantity.";

/// Sink for user-facing error notifications.
///
/// Fire-and-forget; implementations must not block and no return value is
/// consumed.
pub trait Notifier: Send + Sync {
    /// Surface `message` to the user.
    fn notify_error(&self, message: &str);
}

/// Notifier that logs through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Cart front end that reports failures to a [`Notifier`].
///
/// Every failed operation produces exactly one notification; successful
/// operations produce none. The underlying result is still returned so
/// callers can branch on the error kind.
pub struct NotifiedCart {
    store: CartStore,
    notifier: Arc<dyn Notifier>,
}

impl NotifiedCart {
    /// Wrap a cart store with a notification sink.
    #[must_use]
    pub fn new(store: CartStore, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Current cart contents, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        self.store.items()
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Add one unit of a product to the cart.
    ///
    /// Any failure - lookup, stock, or persistence - surfaces the generic
    /// add-failure message.
    ///
    /// # Errors
    ///
    /// Same contract as [`CartStore::add_product`].
    pub async fn add_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let result = self.store.add_product(product_id).await;
        if result.is_err() {
            self.notifier.notify_error(ADD_FAILED);
        }
        result
    }

    /// Remove a product from the cart entirely.
    ///
    /// # Errors
    ///
    /// Same contract as [`CartStore::remove_product`].
    pub fn remove_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let result = self.store.remove_product(product_id);
        if result.is_err() {
            self.notifier.notify_error(REMOVE_FAILED);
        }
        result
    }

    /// Request a quantity change for a product already in the cart.
    ///
    /// Stock rejections surface the out-of-stock message; any other failure
    /// surfaces the generic update-failure message.
    ///
    /// # Errors
    ///
    /// Same contract as [`CartStore::update_product_amount`].
    pub async fn update_product_amount(
        &mut self,
        product_id: ProductId,
        delta: i32,
    ) -> Result<(), CartError> {
        let result = self.store.update_product_amount(product_id, delta).await;
        match &result {
            Err(CartError::OutOfStock) => self.notifier.notify_error(OUT_OF_STOCK),
            Err(_) => self.notifier.notify_error(UPDATE_FAILED),
            Ok(()) => {}
        }
        result
    }
}

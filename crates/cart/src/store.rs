//! Cart state management.
//!
//! [`CartStore`] owns the in-memory cart and its persisted snapshot. Every
//! mutation validates against the catalog, writes the snapshot, and only
//! then replaces the in-memory cart - a failed operation changes nothing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{instrument, warn};

use dragonfruit_core::ProductId;

use crate::catalog::{CatalogError, Product, ProductCatalog};
use crate::storage::{KeyValueStore, StorageError};

/// A product line in the cart.
///
/// Serialized with the product fields flattened, so a snapshot entry reads
/// `{id, title, price, imageUrl, amount}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The catalog product.
    #[serde(flatten)]
    pub product: Product,
    /// Quantity currently in the cart. Always at least 1.
    pub amount: u32,
}

/// Errors produced by cart mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// A catalog lookup failed.
    #[error("catalog lookup failed: {0}")]
    Lookup(#[from] CatalogError),

    /// The requested quantity violates available stock.
    #[error("requested quantity is out of stock")]
    OutOfStock,

    /// The product is not in the cart.
    #[error("product {0} is not in the cart")]
    NotFound(ProductId),

    /// The snapshot could not be written.
    #[error("failed to persist cart snapshot: {0}")]
    Persist(#[from] StorageError),
}

/// The shopper's cart.
///
/// Holds an ordered list of [`CartItem`]s, unique by product id, with
/// insertion order preserved for display. Mutations take `&mut self`, so a
/// single handle cannot interleave operations.
pub struct CartStore {
    catalog: Arc<dyn ProductCatalog>,
    storage: Arc<dyn KeyValueStore>,
    snapshot_key: String,
    items: Vec<CartItem>,
}

impl CartStore {
    /// Open the cart persisted under `snapshot_key`.
    ///
    /// An absent or unparseable snapshot yields an empty cart; the
    /// unparseable case is logged and the stored data is left untouched
    /// until the next successful mutation overwrites it.
    #[must_use]
    pub fn load(
        catalog: Arc<dyn ProductCatalog>,
        storage: Arc<dyn KeyValueStore>,
        snapshot_key: impl Into<String>,
    ) -> Self {
        let snapshot_key = snapshot_key.into();
        let items = match storage.get(&snapshot_key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(e) => {
                    warn!(error = %e, "Stored cart snapshot is unparseable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read cart snapshot, starting empty");
                Vec::new()
            }
        };

        Self {
            catalog,
            storage,
            snapshot_key,
            items,
        }
    }

    /// Current cart contents, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a product to the cart.
    ///
    /// A product not yet in the cart is appended with amount 1. A product
    /// already in the cart has its amount incremented, unless that amount
    /// already equals the fetched stock count.
    ///
    /// # Errors
    ///
    /// `Lookup` if either catalog fetch fails, `OutOfStock` if the cart
    /// already holds the full stock amount, `Persist` if the snapshot write
    /// fails. The cart is unchanged on any error.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let product = self.catalog.product(product_id).await?;
        let stock = self.catalog.stock(product_id).await?;

        let mut next = self.items.clone();
        match next.iter_mut().find(|item| item.product.id == product_id) {
            Some(item) => {
                // Equality check only: an amount already above the stock
                // count (stale snapshot) still increments.
                if item.amount == stock.amount {
                    return Err(CartError::OutOfStock);
                }
                item.amount += 1;
            }
            None => next.push(CartItem { product, amount: 1 }),
        }

        self.commit(next)
    }

    /// Remove a product from the cart entirely.
    ///
    /// # Errors
    ///
    /// `NotFound` if the product is not in the cart, `Persist` if the
    /// snapshot write fails. The cart is unchanged on any error.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub fn remove_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let mut next = self.items.clone();
        let index = next
            .iter()
            .position(|item| item.product.id == product_id)
            .ok_or(CartError::NotFound(product_id))?;
        next.remove(index);

        self.commit(next)
    }

    /// Request a quantity change for a product already in the cart.
    ///
    /// `delta` is a signed request. Validation uses the full value: the
    /// change is rejected when `amount + delta` would fall to zero or below,
    /// exceed the fetched stock count, or when the stock count is exactly 1.
    /// An accepted update then steps the stored amount by exactly one unit
    /// in the direction of the request (+1 when `delta > 1`, -1 otherwise),
    /// and never below 1.
    ///
    /// # Errors
    ///
    /// `Lookup` if the stock fetch fails, `OutOfStock` if the product is not
    /// in the cart or validation rejects the change, `Persist` if the
    /// snapshot write fails. The cart is unchanged on any error.
    #[instrument(skip(self), fields(product_id = %product_id, delta))]
    pub async fn update_product_amount(
        &mut self,
        product_id: ProductId,
        delta: i32,
    ) -> Result<(), CartError> {
        let stock = self.catalog.stock(product_id).await?;

        let mut next = self.items.clone();
        let Some(item) = next.iter_mut().find(|item| item.product.id == product_id) else {
            return Err(CartError::OutOfStock);
        };

        let candidate = i64::from(item.amount) + i64::from(delta);
        if candidate <= 0 || candidate > i64::from(stock.amount) || stock.amount == 1 {
            return Err(CartError::OutOfStock);
        }

        let applied = if delta > 1 {
            item.amount + 1
        } else {
            item.amount - 1
        };
        if applied == 0 {
            return Err(CartError::OutOfStock);
        }
        item.amount = applied;

        self.commit(next)
    }

    /// Persist `next` and make it the current cart.
    ///
    /// The snapshot write happens first; if it fails the in-memory cart is
    /// left as it was.
    fn commit(&mut self, next: Vec<CartItem>) -> Result<(), CartError> {
        let snapshot = serde_json::to_string(&next).map_err(StorageError::from)?;
        self.storage.set(&self.snapshot_key, &snapshot)?;
        self.items = next;
        Ok(())
    }
}

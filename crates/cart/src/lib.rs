//! Dragonfruit Cart - client-side shopping-cart state management.
//!
//! Tracks which products a shopper has selected and in what quantities,
//! validates quantity changes against available stock from a remote catalog
//! API, and persists the cart across sessions through a key-value store.
//!
//! # Architecture
//!
//! - [`catalog`] - remote product and stock lookups (`reqwest`, `moka` caching)
//! - [`storage`] - snapshot persistence behind a string key-value interface
//! - [`store`] - the cart itself: three mutations with stock validation
//! - [`notify`] - user-facing failure notifications
//! - [`config`] - environment-based configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use dragonfruit_cart::{
//!     CartConfig, CartStore, FileStore, HttpCatalog, NotifiedCart, TracingNotifier,
//! };
//! use dragonfruit_core::ProductId;
//!
//! let config = CartConfig::from_env()?;
//! let catalog = Arc::new(HttpCatalog::new(config.catalog_base_url.as_str()));
//! let storage = Arc::new(FileStore::new(&config.storage_path));
//! let store = CartStore::load(catalog, storage, &config.storage_key);
//! let mut cart = NotifiedCart::new(store, Arc::new(TracingNotifier));
//!
//! cart.add_product(ProductId::new(1)).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod notify;
pub mod storage;
pub mod store;

pub use catalog::{CatalogError, HttpCatalog, Product, ProductCatalog, StockRecord};
pub use config::{CartConfig, ConfigError};
pub use notify::{NotifiedCart, Notifier, TracingNotifier};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::{CartError, CartItem, CartStore};

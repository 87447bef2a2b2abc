//! Cart subcommand implementations.

use std::sync::Arc;

use dragonfruit_cart::{
    CartConfig, CartStore, ConfigError, FileStore, HttpCatalog, NotifiedCart, TracingNotifier,
};

/// Open the cart described by the environment configuration.
///
/// # Errors
///
/// Returns an error if required environment variables are missing or invalid.
pub fn open() -> Result<NotifiedCart, ConfigError> {
    let config = CartConfig::from_env()?;
    let catalog = Arc::new(HttpCatalog::new(config.catalog_base_url.as_str()));
    let storage = Arc::new(FileStore::new(&config.storage_path));
    let store = CartStore::load(catalog, storage, &config.storage_key);
    Ok(NotifiedCart::new(store, Arc::new(TracingNotifier)))
}

/// Print the cart as a table.
pub fn show(cart: &NotifiedCart) {
    if cart.is_empty() {
        println!("Cart is empty");
        return;
    }

    println!("{:>6}  {:<32} {:>10} {:>7}", "id", "title", "price", "amount");
    for item in cart.items() {
        println!(
            "{:>6}  {:<32} {:>10} {:>7}",
            item.product.id.to_string(),
            item.product.title,
            item.product.price.to_string(),
            item.amount
        );
    }
}

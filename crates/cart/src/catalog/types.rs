//! Domain types for the catalog API.
//!
//! These are the wire shapes served by the catalog's JSON endpoints. Field
//! names follow the API's camelCase convention.

use serde::{Deserialize, Serialize};

use dragonfruit_core::{Price, ProductId};

/// A product as served by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog product id.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Product image URL.
    pub image_url: String,
}

/// Available stock for a product.
///
/// Read-only and fetched on demand; stock counts are never cached so
/// mutations always validate against the catalog's current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    /// Product the count applies to.
    pub product_id: ProductId,
    /// Units available.
    pub amount: u32,
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_product_wire_format_is_camel_case() {
        let product = Product {
            id: ProductId::new(1),
            title: "Trail Runner".to_string(),
            price: Price::new(Decimal::new(17990, 2)),
            image_url: "https://cdn.example.com/shoes/1.jpg".to_string(),
        };

        let json = serde_json::to_value(&product).expect("serialize");
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Trail Runner");
        assert_eq!(json["price"], "179.90");
        assert_eq!(json["imageUrl"], "https://cdn.example.com/shoes/1.jpg");
    }

    #[test]
    fn test_stock_wire_format_is_camel_case() {
        let raw = r#"{"productId": 7, "amount": 3}"#;
        let stock: StockRecord = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(stock.product_id, ProductId::new(7));
        assert_eq!(stock.amount, 3);
    }
}

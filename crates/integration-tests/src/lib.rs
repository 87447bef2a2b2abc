//! Integration tests for Dragonfruit.
//!
//! # Running Tests
//!
//! ```bash
//! # Start a catalog server serving products/{id} and stock/{id}
//! # (any JSON API with the catalog wire format works)
//!
//! # Run integration tests
//! CATALOG_BASE_URL=http://localhost:3333 cargo test -p dragonfruit-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - End-to-end cart mutations against a live catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

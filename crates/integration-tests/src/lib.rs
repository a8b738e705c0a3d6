//! Integration tests for Cardápio.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cardapio-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_sync` - Cross-tab cart synchronization over one shared store
//! - `normalization` - Fix-on-read repair of legacy cart records
//! - `repeat_order` - Repeating historical orders into the cart
//! - `lost_update` - The accepted cross-tab read-then-write race
//!
//! All tests run against in-memory stores; no server or database is
//! involved.

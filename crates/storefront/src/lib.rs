//! Cardápio Storefront - client-side state engine.
//!
//! This crate keeps the storefront's independently-rendered views (cart
//! page, navigation badge, product page, order history) consistent against
//! a single shared mutable cart held in an origin-scoped key-value store.
//!
//! # Architecture
//!
//! Everything ambient in the original design is an explicit value here:
//!
//! - [`store`] - the shared key-value store behind a [`store::StorageBackend`]
//!   trait, handed out as per-tab [`store::StoreHandle`]s with a cross-tab
//!   change feed
//! - [`bus`] - the same-tab broadcast channel fired after every cart mutation
//! - [`cart`] - the cart service: read-normalize-mutate-write-notify
//!   operations plus the repeat-order expansion
//! - [`badge`] - the navigation badge counter, a subscriber of both channels
//! - [`catalog`] - product configuration (sizes, flavors, extras, notes)
//! - [`orders`] - order history and the name-to-price lookup
//! - [`format`] - locale display helpers (BRL currency, phone mask, dates)
//! - [`config`] - environment-based configuration (data file, delivery fee)
//!
//! Two notification channels exist because the store's native change feed
//! reaches other tabs only; the writer's own views rely on the bus. Both
//! must fire or consistency breaks on one side.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod badge;
pub mod bus;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod format;
pub mod orders;
pub mod store;

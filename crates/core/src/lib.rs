//! Cardápio Core - Shared domain types.
//!
//! This crate provides the common types used across all Cardápio components:
//! - `storefront` - The client-side state engine (store, cart, notifications)
//! - `cli` - Command-line consumer of the engine
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no store
//! access, no notification plumbing. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, phone numbers and statuses
//! - [`cart`] - The cart line item and its invariant-preserving operations
//! - [`profile`] - The customer profile and its validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod profile;
pub mod types;

pub use cart::{CartLine, LineDraft};
pub use profile::{Profile, ProfileError};
pub use types::*;

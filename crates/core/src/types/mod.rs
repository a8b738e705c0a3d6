//! Core types for Cardápio.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod phone;
pub mod status;

pub use id::{LineId, ProductId};
pub use phone::{Phone, PhoneError};
pub use status::OrderStatus;

//! The cart line item.
//!
//! A [`CartLine`] is one configured product in the cart. Its serialized
//! field names (`productId`, `lineId`, `unitPrice`, `lineTotal`, ...) are
//! the wire format of the persisted `cart` record and must not change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{LineId, ProductId};

/// One configured product entry in the cart.
///
/// Invariants, upheld by every method here:
/// - `quantity >= 1`
/// - `line_total == unit_price * quantity`
///
/// Display order of a cart is its insertion order; lines carry no ordering
/// field of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Catalog product this line was configured from.
    pub product_id: ProductId,
    /// Stable unique identifier of this row, immutable after creation.
    pub line_id: LineId,
    /// Product display name.
    pub name: String,
    /// Chosen size label; empty when the product has no sizes.
    pub size: String,
    /// Chosen flavors, in selection order.
    pub flavors: Vec<String>,
    /// Chosen extras, in selection order.
    pub extras: Vec<String>,
    /// Free-text notes from the customer.
    pub notes: String,
    /// Number of units, at least 1.
    pub quantity: u32,
    /// Price of a single unit with the chosen size and extras applied.
    pub unit_price: Decimal,
    /// `unit_price * quantity`, recomputed after every mutation.
    pub line_total: Decimal,
}

/// A cart line before it has a [`LineId`].
///
/// Drafts are what product configuration and repeat-order parsing
/// produce; the cart service turns a draft into a [`CartLine`] by
/// assigning a freshly generated ID at append time.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDraft {
    /// Catalog product being added.
    pub product_id: ProductId,
    /// Product display name.
    pub name: String,
    /// Chosen size label; empty when not applicable.
    pub size: String,
    /// Chosen flavors, in selection order.
    pub flavors: Vec<String>,
    /// Chosen extras, in selection order.
    pub extras: Vec<String>,
    /// Free-text notes from the customer.
    pub notes: String,
    /// Requested number of units.
    pub quantity: u32,
    /// Price of a single unit as configured.
    pub unit_price: Decimal,
}

impl LineDraft {
    /// A draft with no customization at all (repeat-order items).
    #[must_use]
    pub fn plain(
        product_id: ProductId,
        name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            size: String::new(),
            flavors: Vec::new(),
            extras: Vec::new(),
            notes: String::new(),
            quantity,
            unit_price,
        }
    }

    /// Materialize the draft with its creation-time ID.
    ///
    /// Quantity is clamped to a minimum of 1 and the line total derived,
    /// so the resulting line satisfies the cart invariants.
    #[must_use]
    pub fn into_line(self, line_id: LineId) -> CartLine {
        let quantity = self.quantity.max(1);
        CartLine {
            product_id: self.product_id,
            line_id,
            name: self.name,
            size: self.size,
            flavors: self.flavors,
            extras: self.extras,
            notes: self.notes,
            quantity,
            unit_price: self.unit_price,
            line_total: self.unit_price * Decimal::from(quantity),
        }
    }
}

impl CartLine {
    /// Create a plain (uncustomized) line: no size, flavors, extras or notes.
    ///
    /// Shorthand for [`LineDraft::plain`] plus [`LineDraft::into_line`].
    #[must_use]
    pub fn new(
        line_id: LineId,
        product_id: ProductId,
        name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Self {
        LineDraft::plain(product_id, name, quantity, unit_price).into_line(line_id)
    }

    /// Increase the quantity by one.
    pub fn increment(&mut self) {
        self.quantity += 1;
        self.recompute_total();
    }

    /// Decrease the quantity by one, never going below 1.
    ///
    /// A no-op at quantity 1.
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
        self.recompute_total();
    }

    /// Add `extra` units to the quantity (repeat-order merge).
    pub fn add_quantity(&mut self, extra: u32) {
        self.quantity += extra;
        self.recompute_total();
    }

    /// Set the quantity, clamping to a minimum of 1.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
        self.recompute_total();
    }

    /// Re-derive `line_total` from `unit_price` and `quantity`.
    pub fn recompute_total(&mut self) {
        self.line_total = self.unit_price * Decimal::from(self.quantity);
    }

    /// Whether this line carries no customization at all.
    ///
    /// Plain lines are the only merge targets for repeat-order: a repeated
    /// item folds into an existing plain line for the same product instead
    /// of creating a duplicate row.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.size.is_empty()
            && self.flavors.is_empty()
            && self.extras.is_empty()
            && self.notes.is_empty()
    }
}

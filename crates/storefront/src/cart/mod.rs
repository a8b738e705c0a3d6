//! The cart service: every mutation of the shared cart record.
//!
//! All operations follow the same logical unit within one tab:
//! read → normalize → mutate → write whole list → notify. The same-tab
//! bus fires only after the store write succeeds; on a failed write the
//! caller still gets the in-memory result and views may be stale until
//! the next read (accepted).
//!
//! Operations never interleave within a tab (everything is synchronous).
//! Across tabs the usual read-then-write race exists and the second
//! write wins; the domain tolerates the occasional lost cart edit.

pub mod normalize;
pub mod repeat;

use std::sync::Arc;

use cardapio_core::{CartLine, LineDraft, LineId};
use rust_decimal::Decimal;

use crate::orders::{Order, PriceTable};
use crate::store::{StoreHandle, keys};

use normalize::{StoredCartLine, normalize};
use repeat::parse_order_line;

/// Source of fresh line identifiers.
///
/// An explicit seam so tests can pin IDs; production uses
/// [`RandomLineIds`].
pub trait LineIdSource: Send + Sync {
    /// Produce the next identifier.
    fn next_id(&self) -> LineId;
}

/// UUID-v4 identifiers, the preferred generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomLineIds;

impl LineIdSource for RandomLineIds {
    fn next_id(&self) -> LineId {
        LineId::generate()
    }
}

/// Timestamp-plus-random identifiers.
///
/// Fallback for hosts without a usable cryptographic RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockLineIds;

impl LineIdSource for ClockLineIds {
    fn next_id(&self) -> LineId {
        LineId::from_clock()
    }
}

/// Totals block of the cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of all line totals.
    pub subtotal: Decimal,
    /// Delivery fee; zero renders as "Grátis".
    pub delivery: Decimal,
    /// `subtotal + delivery`.
    pub total: Decimal,
}

impl CartSummary {
    /// Compute the summary for a cart with the given delivery fee.
    #[must_use]
    pub fn compute(lines: &[CartLine], delivery: Decimal) -> Self {
        let subtotal: Decimal = lines.iter().map(|l| l.line_total).sum();
        Self {
            subtotal,
            delivery,
            total: subtotal + delivery,
        }
    }
}

/// Stateless access to the shared cart record through one tab's handle.
///
/// The service holds no cart in memory; every operation goes back to the
/// store, so independently-created services over the same handle can
/// never disagree.
#[derive(Clone)]
pub struct CartService {
    handle: StoreHandle,
    ids: Arc<dyn LineIdSource>,
}

impl CartService {
    /// Create a service over a tab handle with random line IDs.
    #[must_use]
    pub fn new(handle: StoreHandle) -> Self {
        Self::with_id_source(handle, Arc::new(RandomLineIds))
    }

    /// Create a service with an explicit ID source.
    #[must_use]
    pub fn with_id_source(handle: StoreHandle, ids: Arc<dyn LineIdSource>) -> Self {
        Self { handle, ids }
    }

    /// The tab handle this service works through.
    #[must_use]
    pub const fn handle(&self) -> &StoreHandle {
        &self.handle
    }

    /// Read the current cart, repairing legacy entries.
    ///
    /// When the normalizer assigned any `lineId`, the repaired list is
    /// written back and the same-tab notification fired before the list
    /// is returned (fix on read). Reading an already-normalized cart
    /// performs no write and no notification.
    pub fn read(&self) -> Vec<CartLine> {
        let (lines, repaired) = self.load();
        if repaired {
            self.persist(&lines);
        }
        lines
    }

    /// Append a new line with a freshly generated `lineId`.
    ///
    /// Never merges: adding the same configuration twice yields two rows.
    pub fn add_line(&self, draft: LineDraft) -> Vec<CartLine> {
        let (mut lines, _) = self.load();
        lines.push(draft.into_line(self.ids.next_id()));
        self.persist(&lines);
        lines
    }

    /// Increase the quantity of the matching line by one.
    ///
    /// Unknown IDs fall through without change, error-free.
    pub fn increment(&self, line_id: &LineId) -> Vec<CartLine> {
        self.update_line(line_id, CartLine::increment)
    }

    /// Decrease the quantity of the matching line, never below 1.
    pub fn decrement(&self, line_id: &LineId) -> Vec<CartLine> {
        self.update_line(line_id, CartLine::decrement)
    }

    /// Remove the matching line, preserving the order of the rest.
    pub fn remove(&self, line_id: &LineId) -> Vec<CartLine> {
        let (mut lines, _) = self.load();
        lines.retain(|l| &l.line_id != line_id);
        self.persist(&lines);
        lines
    }

    /// Replace the cart with the empty list.
    pub fn clear(&self) -> Vec<CartLine> {
        let lines = Vec::new();
        self.persist(&lines);
        lines
    }

    /// Add every item of a past order back into the cart.
    ///
    /// Each description line is parsed (see [`repeat`]) and resolved
    /// through the price table. A repeated item folds into an existing
    /// line when product ID and name match and that line carries no
    /// customization; otherwise it is appended as a new plain line. This
    /// merge-by-identity rule is what keeps repeating an order from
    /// piling up duplicate rows for shared items.
    pub fn repeat_order(&self, order: &Order, prices: &PriceTable) -> Vec<CartLine> {
        let (mut lines, _) = self.load();

        for description in &order.items {
            for item in parse_order_line(description) {
                let entry = prices.resolve(&item.name);
                let existing = lines.iter_mut().find(|l| {
                    l.product_id == entry.product_id && l.name == item.name && l.is_plain()
                });
                match existing {
                    Some(line) => line.add_quantity(item.quantity),
                    None => lines.push(
                        LineDraft::plain(
                            entry.product_id,
                            item.name,
                            item.quantity,
                            entry.unit_price,
                        )
                        .into_line(self.ids.next_id()),
                    ),
                }
            }
        }

        self.persist(&lines);
        lines
    }

    /// Sum of all quantities across all lines (the badge number).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.read().iter().map(|l| l.quantity).sum()
    }

    /// Summary with free delivery.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary::compute(&self.read(), Decimal::ZERO)
    }

    /// Read and normalize without applying the fix-on-read write-back;
    /// mutations fold the repair into their own write.
    fn load(&self) -> (Vec<CartLine>, bool) {
        let stored: Vec<StoredCartLine> = match self.handle.read_json(keys::CART) {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("unreadable cart record, treating as empty: {e}");
                Vec::new()
            }
        };
        normalize(stored, self.ids.as_ref())
    }

    /// Write the whole list back; fire the same-tab notification only
    /// when the write succeeded.
    fn persist(&self, lines: &[CartLine]) {
        match self.handle.write_json(keys::CART, lines) {
            Ok(()) => self.handle.bus().publish(),
            Err(e) => {
                tracing::warn!("cart write failed, views may be stale until next read: {e}");
            }
        }
    }

    fn update_line(&self, line_id: &LineId, op: impl Fn(&mut CartLine)) -> Vec<CartLine> {
        let (mut lines, _) = self.load();
        if let Some(line) = lines.iter_mut().find(|l| &l.line_id == line_id) {
            op(line);
        }
        self.persist(&lines);
        lines
    }
}

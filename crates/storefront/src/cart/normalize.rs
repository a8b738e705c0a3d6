//! Fix-on-read repair of legacy cart records.
//!
//! Old clients wrote cart lines without a `lineId` (and under the short
//! field names `id`/`qty`/`total`). [`StoredCartLine`] deserializes those
//! records tolerantly, and [`normalize`] assigns the missing identifiers.
//! Assigning `lineId`s is the only migration performed; quantities and
//! totals are left exactly as stored so the pass is a pure repair, not a
//! rewrite.
//!
//! The caller applies the side effect: when `normalize` reports a change,
//! the repaired list is written back to the store and the same-tab
//! notification fired, before the data is used any further.

use cardapio_core::{CartLine, LineId, ProductId};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::LineIdSource;

/// A cart line as found in the store, fields optional and legacy names
/// accepted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCartLine {
    /// Product ID; legacy records call this `id`.
    #[serde(default, alias = "id")]
    pub product_id: ProductId,
    /// Row identifier; absent or empty in legacy records.
    #[serde(default)]
    pub line_id: Option<LineId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub flavors: Vec<String>,
    #[serde(default)]
    pub extras: Vec<String>,
    #[serde(default)]
    pub notes: String,
    /// Unit count; legacy records call this `qty`.
    #[serde(default, alias = "qty")]
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: Decimal,
    /// Line total; legacy records call this `total`.
    #[serde(default, alias = "total")]
    pub line_total: Decimal,
}

impl From<StoredCartLine> for CartLine {
    /// Carry a stored line over verbatim under the given ID.
    fn from(stored: StoredCartLine) -> Self {
        let line_id = stored.line_id.unwrap_or_else(|| LineId::new(""));
        Self {
            product_id: stored.product_id,
            line_id,
            name: stored.name,
            size: stored.size,
            flavors: stored.flavors,
            extras: stored.extras,
            notes: stored.notes,
            quantity: stored.quantity,
            unit_price: stored.unit_price,
            line_total: stored.line_total,
        }
    }
}

/// Assign a fresh `lineId` to every entry lacking one.
///
/// Pure and idempotent: entries that already carry a non-empty ID pass
/// through untouched, and the returned flag is `false` when nothing was
/// assigned. Running the pass twice changes nothing the second time.
pub fn normalize(
    stored: Vec<StoredCartLine>,
    ids: &dyn LineIdSource,
) -> (Vec<CartLine>, bool) {
    let mut changed = false;
    let lines = stored
        .into_iter()
        .map(|entry| {
            let mut line = CartLine::from(entry);
            if line.line_id.as_str().is_empty() {
                changed = true;
                line.line_id = ids.next_id();
            }
            line
        })
        .collect();
    (lines, changed)
}

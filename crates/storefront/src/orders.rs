//! Order history and the name-to-price lookup used by repeat-order.
//!
//! History entries are display records: item descriptions are
//! human-readable strings (see [`crate::cart::repeat`]) and the total is
//! pre-formatted. Customization detail of the original lines is not
//! preserved, which is why repeated items come back uncustomized.

use std::collections::HashMap;

use cardapio_core::{OrderStatus, ProductId};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One past order, as shown on the order-history page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order number.
    pub id: u32,
    /// When the order was placed.
    pub date: NaiveDateTime,
    /// Item descriptions, e.g. `"1x Item C + 1x Item D"`.
    pub items: Vec<String>,
    /// Pre-formatted order total, display only.
    pub total: String,
    /// Lifecycle status.
    pub status: OrderStatus,
}

/// Catalog data needed to price a repeated item.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceEntry {
    /// Product the item name resolves to.
    pub product_id: ProductId,
    /// Current unit price.
    pub unit_price: Decimal,
}

/// Lookup from item names to products and prices.
///
/// Names missing from the table still resolve: the name itself becomes a
/// symbolic product ID and the price defaults to zero, so a repeated
/// order never fails outright over a retired menu item.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    entries: HashMap<String, PriceEntry>,
}

impl PriceTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name.
    pub fn insert(&mut self, name: impl Into<String>, product_id: ProductId, unit_price: Decimal) {
        self.entries.insert(
            name.into(),
            PriceEntry {
                product_id,
                unit_price,
            },
        );
    }

    /// Resolve an item name, falling back to a zero-priced symbolic entry.
    #[must_use]
    pub fn resolve(&self, name: &str) -> PriceEntry {
        self.entries.get(name).cloned().unwrap_or_else(|| PriceEntry {
            product_id: ProductId::new(name),
            unit_price: Decimal::ZERO,
        })
    }

    /// The demo table matching [`sample_history`].
    #[must_use]
    pub fn sample() -> Self {
        let mut table = Self::new();
        for (name, id, price) in [
            ("Item A", "A", dec!(21)),
            ("Item B", "B", dec!(21)),
            ("Item C", "C", dec!(10)),
            ("Item D", "D", dec!(10)),
            ("Item E", "E", dec!(10)),
            ("Item F", "F", dec!(28)),
            ("Item G", "G", dec!(32)),
            ("Item H", "H", dec!(26)),
            ("Item I", "I", dec!(26)),
            ("Item J", "J", dec!(19.90)),
            ("Item K", "K", dec!(24)),
            ("Item L", "L", dec!(39.90)),
        ] {
            table.insert(name, ProductId::new(id), price);
        }
        table
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

/// The demo order history.
#[must_use]
pub fn sample_history() -> Vec<Order> {
    let order = |id, date, items: &[&str], total: &str, status| Order {
        id,
        date,
        items: items.iter().map(ToString::to_string).collect(),
        total: total.to_owned(),
        status,
    };

    vec![
        order(
            14,
            at(2025, 7, 12, 19, 17),
            &["1x Item A", "1x Item B"],
            "R$ 42,00",
            OrderStatus::Canceled,
        ),
        order(
            52,
            at(2025, 4, 6, 20, 14),
            &["1x Item C + 1x Item D + 1x Item E"],
            "R$ 30,00",
            OrderStatus::Completed,
        ),
        order(
            53,
            at(2025, 3, 19, 19, 10),
            &["1x Item F"],
            "R$ 28,00",
            OrderStatus::Completed,
        ),
        order(
            54,
            at(2025, 3, 10, 21, 2),
            &["2x Item G"],
            "R$ 65,00",
            OrderStatus::Completed,
        ),
        order(
            55,
            at(2025, 2, 18, 18, 40),
            &["1x Item H + 1x Item I"],
            "R$ 52,00",
            OrderStatus::Completed,
        ),
        order(
            56,
            at(2025, 2, 1, 22, 5),
            &["1x Item J"],
            "R$ 19,90",
            OrderStatus::Completed,
        ),
        order(
            57,
            at(2025, 1, 15, 18, 20),
            &["1x Item K"],
            "R$ 24,00",
            OrderStatus::Completed,
        ),
        order(
            58,
            at(2024, 12, 22, 20, 0),
            &["1x Item L"],
            "R$ 39,90",
            OrderStatus::InProgress,
        ),
    ]
}

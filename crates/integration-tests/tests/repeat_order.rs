//! Integration tests for repeating historical orders into the cart.

#![allow(clippy::unwrap_used)]

use cardapio_core::{LineDraft, ProductId};
use cardapio_storefront::badge::CartBadge;
use cardapio_storefront::cart::CartService;
use cardapio_storefront::orders::{Order, PriceTable, sample_history};
use cardapio_storefront::store::{MemoryStore, SharedStore};
use rust_decimal_macros::dec;

fn service() -> CartService {
    CartService::new(SharedStore::new(MemoryStore::new()).open())
}

fn order(id: u32) -> Order {
    sample_history().into_iter().find(|o| o.id == id).unwrap()
}

#[test]
fn test_multi_item_order_expands_into_distinct_lines() {
    let svc = service();

    // Order 52: "1x Item C + 1x Item D + 1x Item E" in a single description.
    let lines = svc.repeat_order(&order(52), &PriceTable::sample());

    let names: Vec<&str> = lines.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Item C", "Item D", "Item E"]);
    assert!(lines.iter().all(|l| l.quantity == 1));
    assert!(lines.iter().all(|l| l.unit_price == dec!(10)));
}

#[test]
fn test_quantity_prefix_carries_into_the_line() {
    let svc = service();

    // Order 54: "2x Item G".
    let lines = svc.repeat_order(&order(54), &PriceTable::sample());

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(lines[0].unit_price, dec!(32));
    assert_eq!(lines[0].line_total, dec!(64));
}

#[test]
fn test_repeat_merges_into_existing_plain_lines() {
    let svc = service();
    let table = PriceTable::sample();

    svc.repeat_order(&order(54), &table);
    let lines = svc.repeat_order(&order(54), &table);

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 4);
}

#[test]
fn test_repeat_leaves_customized_lines_alone() {
    let svc = service();
    let mut customized = LineDraft::plain(ProductId::new("G"), "Item G".to_owned(), 1, dec!(32));
    customized.size = "Tam 3".to_owned();
    svc.add_line(customized);

    let lines = svc.repeat_order(&order(54), &PriceTable::sample());

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].quantity, 1, "customized line untouched");
    assert_eq!(lines[1].quantity, 2, "repeat got its own plain line");
}

#[test]
fn test_repeated_items_resolve_through_the_current_price_table() {
    let svc = service();
    let mut table = PriceTable::sample();
    // Item G's price changed since the order was placed.
    table.insert("Item G", ProductId::new("G"), dec!(35));

    let lines = svc.repeat_order(&order(54), &table);
    assert_eq!(lines[0].unit_price, dec!(35));
    assert_eq!(lines[0].line_total, dec!(70));
}

#[test]
fn test_badge_updates_after_a_repeat() {
    let store = SharedStore::new(MemoryStore::new());
    let this_tab = CartService::new(store.open());
    let other_tab = CartService::new(store.open());
    let badge = CartBadge::attach(&this_tab);

    other_tab.repeat_order(&order(52), &PriceTable::sample());
    assert_eq!(badge.count(), 3);

    this_tab.repeat_order(&order(54), &PriceTable::sample());
    assert_eq!(badge.count(), 5);
}

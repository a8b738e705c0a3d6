//! Integration tests pinning down the accepted cross-tab race.
//!
//! There is no concurrency token on the cart record: every mutation
//! replaces the whole document, and when two tabs write from the same
//! starting point the second write silently discards the first. These
//! tests document that behavior so a future "fix" is a conscious change.

#![allow(clippy::unwrap_used)]

use cardapio_core::{CartLine, LineDraft, ProductId};
use cardapio_storefront::cart::CartService;
use cardapio_storefront::store::{MemoryStore, SharedStore, keys};
use rust_decimal_macros::dec;

fn draft(product: &str) -> LineDraft {
    LineDraft::plain(ProductId::new(product), format!("Item {product}"), 1, dec!(10))
}

#[test]
fn test_concurrent_whole_record_writes_last_one_wins() {
    let store = SharedStore::new(MemoryStore::new());
    let tab_a = store.open();
    let tab_b = store.open();

    // Both tabs computed their next cart from the same (empty) snapshot.
    let a_cart = vec![draft("A").into_line("line-a".into())];
    let b_cart = vec![draft("B").into_line("line-b".into())];

    tab_a.write_json(keys::CART, &a_cart).unwrap();
    tab_b.write_json(keys::CART, &b_cart).unwrap();

    // Tab A's line is gone; nothing merged, nothing failed.
    let stored: Vec<CartLine> = tab_a.read_json(keys::CART).unwrap().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Item B");
}

#[test]
fn test_sequential_cross_tab_mutations_do_not_race() {
    let store = SharedStore::new(MemoryStore::new());
    let tab_a = CartService::new(store.open());
    let tab_b = CartService::new(store.open());

    // Each service call re-reads before writing, so mutations that do not
    // overlap in time always compose.
    tab_a.add_line(draft("A"));
    tab_b.add_line(draft("B"));
    let lines = tab_a.read();

    let names: Vec<&str> = lines.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Item A", "Item B"]);
}

#[test]
fn test_failed_write_leaves_previous_record_intact() {
    // A value that cannot serialize never reaches the backend.
    let store = SharedStore::new(MemoryStore::new());
    let handle = store.open();
    handle.write_json(keys::CART, &vec![draft("A").into_line("a".into())]).unwrap();

    // JSON object keys must be strings; this map cannot serialize.
    let unserializable: std::collections::HashMap<Vec<u8>, u8> =
        std::collections::HashMap::from([(vec![1], 1)]);
    assert!(handle.write_json(keys::CART, &unserializable).is_err());

    let stored: Vec<CartLine> = handle.read_json(keys::CART).unwrap().unwrap();
    assert_eq!(stored[0].name, "Item A");
}

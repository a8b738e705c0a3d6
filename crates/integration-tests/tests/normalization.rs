//! Integration tests for fix-on-read repair of legacy cart records.
//!
//! Carts written by earlier clients lack `lineId`s (and may use the old
//! `id`/`qty`/`total` field names). The first read through the cart
//! service assigns IDs and writes the repaired list back; every later
//! read is a no-op.

#![allow(clippy::unwrap_used)]

use cardapio_storefront::cart::CartService;
use cardapio_storefront::store::{MemoryStore, SharedStore, keys};
use rust_decimal_macros::dec;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

fn legacy_cart() -> serde_json::Value {
    json!([
        { "id": "A", "name": "Item A", "qty": 2, "unitPrice": 21.0, "total": 42.0 },
        { "id": "B", "name": "Item B", "qty": 1, "unitPrice": 10.0, "total": 10.0 }
    ])
}

#[test]
fn test_legacy_cart_gets_line_ids_on_first_read() {
    let store = SharedStore::new(MemoryStore::new());
    store.open().write_json(keys::CART, &legacy_cart()).unwrap();

    let svc = CartService::new(store.open());
    let lines = svc.read();

    assert_eq!(lines.len(), 2);
    let ids: HashSet<&str> = lines.iter().map(|l| l.line_id.as_str()).collect();
    assert_eq!(ids.len(), 2, "assigned IDs must be distinct");
    assert!(ids.iter().all(|id| !id.is_empty()));

    // Amounts come through as stored, untouched by the repair.
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(lines[0].line_total, dec!(42));
}

#[test]
fn test_repair_is_persisted_and_announced_to_other_tabs() {
    let store = SharedStore::new(MemoryStore::new());
    let legacy_tab = store.open();
    legacy_tab.write_json(keys::CART, &legacy_cart()).unwrap();

    let hits = Arc::new(AtomicU32::new(0));
    let _watch = {
        let hits = Arc::clone(&hits);
        legacy_tab.watch(keys::CART, move || {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };

    let svc = CartService::new(store.open());
    let repaired = svc.read();

    // The write-back reached the store and the other tab heard about it.
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    // A later read finds a fully-normalized record: same IDs, no new write.
    let again = svc.read();
    assert_eq!(again, repaired);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_mixed_cart_keeps_existing_ids() {
    let store = SharedStore::new(MemoryStore::new());
    store
        .open()
        .write_json(
            keys::CART,
            &json!([
                { "productId": "A", "lineId": "keep-me", "name": "Item A",
                  "quantity": 1, "unitPrice": 10.0, "lineTotal": 10.0 },
                { "id": "B", "name": "Item B", "qty": 1, "unitPrice": 5.0, "total": 5.0 }
            ]),
        )
        .unwrap();

    let svc = CartService::new(store.open());
    let lines = svc.read();

    assert_eq!(lines[0].line_id.as_str(), "keep-me");
    assert_ne!(lines[1].line_id.as_str(), "");
    assert_ne!(lines[1].line_id, lines[0].line_id);
}

#[test]
fn test_unparseable_record_reads_as_empty_cart() {
    let backend = MemoryStore::new();
    cardapio_storefront::store::StorageBackend::write(&backend, keys::CART, "{{{").unwrap();

    let svc = CartService::new(SharedStore::new(backend).open());
    assert!(svc.read().is_empty());
}

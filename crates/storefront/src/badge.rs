//! The navigation badge counter.
//!
//! A view subscriber: listens on both notification channels and re-reads
//! the cart on every signal, keeping the bottom-navigation badge in step
//! with mutations made anywhere, this tab or another.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::bus::Subscription;
use crate::cart::CartService;
use crate::store::{WatchGuard, keys};

/// Sum-of-quantities counter over the cart.
///
/// The badge shows the total number of units in the cart, not the number
/// of distinct lines; it is hidden entirely when the cart is empty.
pub struct CartBadge {
    count: Arc<AtomicU32>,
    _same_tab: Subscription,
    _cross_tab: WatchGuard,
}

impl CartBadge {
    /// Attach to a cart service: read once now, then re-read on every
    /// same-tab bus event and every cross-tab cart change.
    #[must_use]
    pub fn attach(service: &CartService) -> Self {
        let count = Arc::new(AtomicU32::new(0));

        let refresh: Arc<dyn Fn() + Send + Sync> = {
            let service = service.clone();
            let count = Arc::clone(&count);
            Arc::new(move || {
                count.store(service.total_quantity(), Ordering::SeqCst);
            })
        };
        refresh();

        let same_tab = {
            let refresh = Arc::clone(&refresh);
            service.handle().bus().subscribe(move || refresh())
        };
        let cross_tab = service.handle().watch(keys::CART, move || refresh());

        Self {
            count,
            _same_tab: same_tab,
            _cross_tab: cross_tab,
        }
    }

    /// Current unit count.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }

    /// Badge text, or `None` when the badge is hidden (empty cart).
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self.count() {
            0 => None,
            n => Some(n.to_string()),
        }
    }
}

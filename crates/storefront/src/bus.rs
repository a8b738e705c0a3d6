//! Same-tab change notification.
//!
//! Every [`StoreHandle`](crate::store::StoreHandle) owns one bus. The cart
//! service publishes on it after each successful cart write; views in the
//! same tab subscribe and re-read on receipt. The event carries no payload,
//! subscribers always go back to the store for the current state.
//!
//! Cross-tab propagation is the store's own change feed, not this bus; see
//! [`crate::store`].

use std::sync::{Arc, Mutex, PoisonError, Weak};

type Handler = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// A process-local broadcast channel with no payload.
///
/// Cloning shares the subscriber registry. Handlers run synchronously on
/// the publishing thread; the registry lock is not held while they run, so
/// a handler may freely re-read the store, publish again (the normalizer's
/// idempotent write-back terminates the recursion) or add subscriptions.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<Registry>>,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; it stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, handler: impl Fn() + Send + Sync + 'static) -> Subscription {
        let mut reg = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = reg.next_id;
        reg.next_id += 1;
        reg.handlers.push((id, Arc::new(handler)));
        Subscription {
            registry: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Invoke every currently-registered handler.
    pub fn publish(&self) {
        let snapshot: Vec<Handler> = {
            let reg = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            reg.handlers.iter().map(|(_, h)| Arc::clone(h)).collect()
        };
        for handler in snapshot {
            handler();
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .handlers
            .len()
    }
}

/// Token for one bus subscription; dropping it unregisters the handler.
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut reg = registry.lock().unwrap_or_else(PoisonError::into_inner);
            reg.handlers.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[test]
    fn test_publish_reaches_all_subscribers() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicU32::new(0));

        let a = {
            let hits = Arc::clone(&hits);
            bus.subscribe(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        let b = {
            let hits = Arc::clone(&hits);
            bus.subscribe(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        bus.publish();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        drop((a, b));
    }

    #[test]
    fn test_dropping_subscription_unregisters() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicU32::new(0));

        let sub = {
            let hits = Arc::clone(&hits);
            bus.subscribe(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        assert_eq!(bus.subscriber_count(), 1);

        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);

        bus.publish();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_handler_may_publish_reentrantly() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicU32::new(0));

        let sub = {
            let bus = bus.clone();
            let hits = Arc::clone(&hits);
            bus.clone().subscribe(move || {
                // One re-publish, guarded so the test terminates.
                if hits.fetch_add(1, Ordering::SeqCst) == 0 {
                    bus.publish();
                }
            })
        };

        bus.publish();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        drop(sub);
    }

    #[test]
    fn test_clone_shares_registry() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicU32::new(0));

        let sub = {
            let hits = Arc::clone(&hits);
            bus.subscribe(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        bus.clone().publish();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        drop(sub);
    }
}

//! The shared key-value store and its change feed.
//!
//! The store is the single source of truth for all views. Records are
//! whole JSON documents under well-known [`keys`]; there is no partial
//! update. Every mutation reads the full record, computes the replacement
//! in memory and writes it back whole. No concurrency token exists: a
//! write from one tab silently overwrites a concurrent write from another
//! (accepted, last write wins).
//!
//! [`SharedStore`] wraps a [`StorageBackend`] and hands out per-tab
//! [`StoreHandle`]s. A write through one handle notifies watchers
//! registered by *other* handles only, matching the platform storage
//! event that never fires in the writing tab. The writer's own views are
//! reached through the handle's [`EventBus`] instead.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::bus::EventBus;

/// Well-known storage keys.
pub mod keys {
    /// The customer profile record: `{ "phone": ..., "name": ... }`.
    pub const USER_PROFILE: &str = "userProfile";

    /// The cart record: a JSON array of cart lines.
    pub const CART: &str = "cart";
}

/// Errors from the storage layer.
///
/// All of them are non-fatal to the application: readers fall back to an
/// empty default, writers log and carry on best-effort.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Reading or writing the underlying medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value (or a value being stored) is not valid JSON.
    #[error("malformed stored value: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Raw whole-record access to an origin-scoped key-value store.
///
/// Values are opaque strings (JSON documents); typing happens one layer
/// up in [`StoreHandle`]. Implementations must make each `read`/`write`
/// atomic on its own, nothing more.
pub trait StorageBackend: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

type WatchHandler = Arc<dyn Fn() + Send + Sync>;

struct WatchEntry {
    id: u64,
    tab: u64,
    key: String,
    handler: WatchHandler,
}

#[derive(Default)]
struct Watchers {
    next_id: u64,
    entries: Vec<WatchEntry>,
}

struct StoreInner {
    backend: Box<dyn StorageBackend>,
    next_tab: AtomicU64,
    watchers: Mutex<Watchers>,
}

impl StoreInner {
    /// Deliver a change under `key` to every watcher except the writer's
    /// own tab. The registry lock is released before handlers run.
    fn notify_others(&self, writer_tab: u64, key: &str) {
        let snapshot: Vec<WatchHandler> = {
            let watchers = self.watchers.lock().unwrap_or_else(PoisonError::into_inner);
            watchers
                .entries
                .iter()
                .filter(|e| e.tab != writer_tab && e.key == key)
                .map(|e| Arc::clone(&e.handler))
                .collect()
        };
        for handler in snapshot {
            handler();
        }
    }
}

/// The shared store, one per origin.
///
/// Cheaply cloneable; all clones see the same backend and watcher
/// registry.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<StoreInner>,
}

impl SharedStore {
    /// Wrap a backend.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                backend: Box::new(backend),
                next_tab: AtomicU64::new(0),
                watchers: Mutex::new(Watchers::default()),
            }),
        }
    }

    /// Open a handle, the store's view of one tab.
    ///
    /// Each call models a separate browsing context: handles do not hear
    /// their own writes through the change feed, and each carries its own
    /// same-tab [`EventBus`]. Clone the returned handle to share it among
    /// views of the same tab.
    #[must_use]
    pub fn open(&self) -> StoreHandle {
        StoreHandle {
            tab: self.inner.next_tab.fetch_add(1, Ordering::Relaxed),
            store: Arc::clone(&self.inner),
            bus: EventBus::new(),
        }
    }
}

/// One tab's access to the [`SharedStore`].
#[derive(Clone)]
pub struct StoreHandle {
    tab: u64,
    store: Arc<StoreInner>,
    bus: EventBus,
}

impl StoreHandle {
    /// The same-tab notification bus of this handle.
    #[must_use]
    pub const fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Read and deserialize the record under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored value does not
    /// parse. Callers treat either case as "record absent".
    pub fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.backend.read(key)? {
            None => Ok(None),
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        }
    }

    /// Serialize and write the whole record under `key`, then notify
    /// watchers registered by other handles.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails; no
    /// notification is delivered in that case.
    pub fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.store.backend.write(key, &raw)?;
        self.store.notify_others(self.tab, key);
        Ok(())
    }

    /// Watch `key` for writes made through *other* handles.
    ///
    /// The handler is never invoked for this handle's own writes. It stays
    /// registered until the returned [`WatchGuard`] is dropped.
    pub fn watch(&self, key: &str, handler: impl Fn() + Send + Sync + 'static) -> WatchGuard {
        let mut watchers = self
            .store
            .watchers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let id = watchers.next_id;
        watchers.next_id += 1;
        watchers.entries.push(WatchEntry {
            id,
            tab: self.tab,
            key: key.to_owned(),
            handler: Arc::new(handler),
        });
        WatchGuard {
            store: Arc::downgrade(&self.store),
            id,
        }
    }
}

/// Token for one change-feed watch; dropping it unregisters the handler.
pub struct WatchGuard {
    store: Weak<StoreInner>,
    id: u64,
}

impl Drop for WatchGuard {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            let mut watchers = store.watchers.lock().unwrap_or_else(PoisonError::into_inner);
            watchers.entries.retain(|e| e.id != self.id);
        }
    }
}

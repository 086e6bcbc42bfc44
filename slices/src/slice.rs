//! One store key bound to one cached, typed value.
//!
//! DESIGN
//! ======
//! The cache is authoritative for the running session: `write` updates it
//! first and only then attempts persistence, so a refused write (quota,
//! missing storage) never loses the in-memory value. Each slice owns exactly
//! one key, which is what keeps sibling slices from interfering.
//!
//! TRADE-OFFS
//! ==========
//! Interior mutability is `RefCell`/`Cell` rather than a lock: all reads and
//! writes happen on one UI event loop, one handler at a time.

#[cfg(test)]
#[path = "slice_test.rs"]
mod slice_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::codec::Codec;
use crate::store::KeyedStore;

pub struct PersistedSlice<T, C> {
    store: Rc<dyn KeyedStore>,
    key: String,
    default: T,
    codec: C,
    cache: RefCell<Option<T>>,
    /// Set when the most recent write or reset did not reach the store.
    unsaved: Cell<bool>,
}

impl<T: Clone, C: Codec<T>> PersistedSlice<T, C> {
    pub fn new(store: Rc<dyn KeyedStore>, key: impl Into<String>, default: T, codec: C) -> Self {
        Self {
            store,
            key: key.into(),
            default,
            codec,
            cache: RefCell::new(None),
            unsaved: Cell::new(false),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Current value. The first call decodes from the store and caches.
    #[must_use]
    pub fn read(&self) -> T {
        if let Some(value) = self.cache.borrow().as_ref() {
            return value.clone();
        }
        let value = self.load();
        *self.cache.borrow_mut() = Some(value.clone());
        value
    }

    /// Replace the value and persist it best-effort.
    pub fn write(&self, value: T) {
        let outcome = self.codec.encode(&value);
        *self.cache.borrow_mut() = Some(value);
        let saved = match outcome {
            Ok(Some(raw)) => self.store.set(&self.key, &raw).map_err(|e| e.to_string()),
            Ok(None) => self.store.remove(&self.key).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        self.settle(saved);
    }

    /// Read-modify-write within one handler.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut value = self.read();
        f(&mut value);
        self.write(value);
    }

    /// Re-decode from the store so writes made elsewhere (another tab) become
    /// visible. Keeps the cached value when the last write never persisted.
    pub fn reload(&self) -> T {
        if self.unsaved.get() {
            return self.read();
        }
        let value = self.load();
        *self.cache.borrow_mut() = Some(value.clone());
        value
    }

    /// Remove the key and return to the default.
    pub fn reset(&self) {
        *self.cache.borrow_mut() = Some(self.default.clone());
        let saved = self.store.remove(&self.key).map_err(|e| e.to_string());
        self.settle(saved);
    }

    /// Whether the store reflects the cached value.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        !self.unsaved.get()
    }

    fn load(&self) -> T {
        let raw = self.store.get(&self.key);
        self.codec.decode_or(raw.as_deref(), self.default.clone())
    }

    fn settle(&self, saved: Result<(), String>) {
        match saved {
            Ok(()) => self.unsaved.set(false),
            Err(e) => {
                log::warn!("slice {:?} kept in memory only: {e}", self.key);
                self.unsaved.set(true);
            }
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PersistedSlice<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedSlice")
            .field("key", &self.key)
            .field("cache", &self.cache.borrow())
            .field("unsaved", &self.unsaved.get())
            .finish_non_exhaustive()
    }
}

//! Synchronous string key-value stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`KeyedStore`] is the seam between typed slices and whatever actually holds
//! the bytes: browser `localStorage` in the client, [`MemoryStore`] in tests
//! and during server rendering. Writes may fail; callers decide whether to
//! propagate or swallow the error.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Error returned by [`KeyedStore::set`] and [`KeyedStore::remove`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No backing storage exists in this environment.
    #[error("storage unavailable")]
    Unavailable,
    /// Writing `key` would exceed the storage quota.
    #[error("storage quota exceeded writing {key:?} ({needed} of {limit} bytes)")]
    QuotaExceeded { key: String, needed: usize, limit: usize },
    /// The host refused the operation for another reason.
    #[error("storage rejected operation: {0}")]
    Rejected(String),
}

/// Flat string-to-string store with single-key atomic writes.
pub trait KeyedStore {
    /// Raw value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite `key` unconditionally.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the host refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the host refuses the removal.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyedStore + ?Sized> KeyedStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-process store. An optional byte quota (sum of key and value lengths)
/// simulates the browser's quota errors.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that refuses writes once its contents would exceed `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self { entries: RefCell::default(), quota: Some(bytes) }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Sorted list of stored keys.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyedStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(limit) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > limit {
                return Err(StoreError::QuotaExceeded { key: key.to_owned(), needed, limit });
            }
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// =============================================================================
// NAMESPACED
// =============================================================================

/// Wraps a store so every key is written as `"<namespace>:<key>"`.
#[derive(Debug, Clone)]
pub struct Namespaced<S> {
    inner: S,
    namespace: String,
}

impl<S: KeyedStore> Namespaced<S> {
    pub fn new(inner: S, namespace: impl Into<String>) -> Self {
        Self { inner, namespace: namespace.into() }
    }

    /// Fully qualified key as written to the inner store.
    #[must_use]
    pub fn qualify(&self, key: &str) -> String {
        format!("{}:{key}", self.namespace)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: KeyedStore> KeyedStore for Namespaced<S> {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(&self.qualify(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.set(&self.qualify(key), value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(&self.qualify(key))
    }
}

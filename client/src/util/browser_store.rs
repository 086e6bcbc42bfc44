//! Browser `localStorage` as a [`KeyedStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is a unit struct that looks up `window.localStorage` on every
//! call, so it holds no JS handles and is cheap to share. Outside the
//! `hydrate` build there is no browser: reads miss and writes report
//! [`StoreError::Unavailable`].

#[cfg(test)]
#[path = "browser_store_test.rs"]
mod browser_store_test;

use slices::{KeyedStore, StoreError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn classify(key: &str, value_len: usize, err: &wasm_bindgen::JsValue) -> StoreError {
    use wasm_bindgen::JsCast;

    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) if ex.name() == "QuotaExceededError" => StoreError::QuotaExceeded {
            key: key.to_owned(),
            needed: key.len() + value_len,
            limit: 0,
        },
        Some(ex) => StoreError::Rejected(ex.message()),
        None => StoreError::Rejected(format!("{err:?}")),
    }
}

impl KeyedStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| classify(key, value.len(), &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| classify(key, 0, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }
}

//! Persisted view-state store: typed slices over a string key-value store.
//!
//! This crate owns the persistence model shared by every `client` view. A
//! [`KeyedStore`] holds raw strings, a [`Codec`] converts them to typed values,
//! and a [`PersistedSlice`] binds one key to one cached value. Read-only
//! summaries over several slices implement [`AggregateView`].
//!
//! The crate is UI-framework agnostic and has no browser dependencies so it
//! can be tested natively; the browser `localStorage` store lives in `client`.

pub mod aggregate;
pub mod codec;
pub mod slice;
pub mod store;

pub use aggregate::AggregateView;
pub use codec::{Codec, CodecError, JsonCodec, OptionalTextCodec, TextCodec};
pub use slice::PersistedSlice;
pub use store::{KeyedStore, MemoryStore, Namespaced, StoreError};

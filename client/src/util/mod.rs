//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-facing helpers live here so pages and components stay free of
//! `web_sys` calls. Browser-only paths are gated on the `hydrate` feature.

pub mod browser_store;
pub mod clock;
pub mod media;
pub mod random;
pub mod timer;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `progress`, `messages`, etc.) so
//! individual views depend on small focused models. `site` binds each model
//! to its persisted key; `summary` derives the final-chapter view from them.

pub mod album;
pub mod audio;
pub mod messages;
pub mod progress;
pub mod session;
pub mod site;
pub mod summary;
pub mod ui;

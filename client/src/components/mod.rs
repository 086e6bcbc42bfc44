//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the mini-games while reading/writing
//! shared state from the `UiState` context and the persisted site bundle.

pub mod audio_dock;
pub mod header;
pub mod heart_survey;
pub mod lock_panel;
pub mod memory_match;
pub mod roulette_wheel;

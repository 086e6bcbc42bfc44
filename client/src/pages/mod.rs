//! Page modules for the gate and each site tab.
//!
//! ARCHITECTURE
//! ============
//! `site` decides between the gate and the unlocked layout and mounts the
//! active tab's page. Each page owns its tab's orchestration and delegates
//! game rendering to `components`.

pub mod album;
pub mod finale;
pub mod games;
pub mod gate;
pub mod home;
pub mod messages;
pub mod site;

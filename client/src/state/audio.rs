//! Background music choice and upload policy.
//!
//! DESIGN
//! ======
//! An uploaded track always plays for the current session. It is persisted
//! as a data URL only when small enough to fit comfortably in storage;
//! larger uploads clear any previously stored track so the next visit falls
//! back to the bundled default instead of a stale choice.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

/// Largest upload persisted as a data URL (inclusive).
pub const PERSIST_LIMIT_BYTES: usize = 2 * 1024 * 1024;

/// Bundled track path without extension.
pub const DEFAULT_TRACK_BASE: &str = "/audio/the1999_pagagnini";

/// Default `<source>` list in preference order: `(src, mime)`.
#[must_use]
pub fn default_sources() -> [(String, &'static str); 2] {
    [
        (format!("{DEFAULT_TRACK_BASE}.mp3"), "audio/mpeg"),
        (format!("{DEFAULT_TRACK_BASE}.flac"), "audio/flac"),
    ]
}

/// What to do with the stored choice after an upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadPlan {
    /// Store the data URL.
    Persist,
    /// Play for this session only and remove the stored choice.
    SessionOnly,
}

#[must_use]
pub fn plan_upload(size_bytes: usize) -> UploadPlan {
    if size_bytes <= PERSIST_LIMIT_BYTES {
        UploadPlan::Persist
    } else {
        UploadPlan::SessionOnly
    }
}

/// Single `src` to play: a session blob URL wins over the stored choice.
#[must_use]
pub fn active_source(session: Option<&str>, stored: Option<&str>) -> Option<String> {
    session.or(stored).filter(|s| !s.is_empty()).map(str::to_owned)
}

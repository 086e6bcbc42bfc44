//! Entrance gate and tab selection.
//!
//! DESIGN
//! ======
//! The unlock flag and active tab are persisted slices; query-string launch
//! overrides (`?dev=1`, `?tab=games`) only affect the current session and are
//! never written back.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::str::FromStr;

use crate::content;

/// Top-level views of the unlocked site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveTab {
    #[default]
    Home,
    Memories,
    Games,
    Messages,
    Final,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 5] = [Self::Home, Self::Memories, Self::Games, Self::Messages, Self::Final];

    /// Stable identifier used in storage and query strings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Memories => "memories",
            Self::Games => "games",
            Self::Messages => "messages",
            Self::Final => "final",
        }
    }

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Memories => "Memories",
            Self::Games => "Games",
            Self::Messages => "Messages",
            Self::Final => "Final Chapter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab {0:?}")]
pub struct UnknownTab(pub String);

impl FromStr for ActiveTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| UnknownTab(s.to_owned()))
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Developer/launch overrides read from the query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LaunchOverrides {
    pub force_unlocked: bool,
    pub tab: Option<ActiveTab>,
}

impl LaunchOverrides {
    /// `dev=1` unlocks and opens the games tab; otherwise a valid `tab` wins.
    #[must_use]
    pub fn from_params(dev: Option<&str>, tab: Option<&str>) -> Self {
        if dev == Some("1") {
            return Self { force_unlocked: true, tab: Some(ActiveTab::Games) };
        }
        Self {
            force_unlocked: false,
            tab: tab.and_then(|t| t.trim().parse().ok()),
        }
    }

    /// Combine stored session state with the overrides.
    #[must_use]
    pub fn apply(self, stored_unlocked: bool, stored_tab: ActiveTab) -> (bool, ActiveTab) {
        (stored_unlocked || self.force_unlocked, self.tab.unwrap_or(stored_tab))
    }
}

/// Check a password attempt against the site secret (surrounding whitespace
/// ignored). The error is the user-facing hint.
///
/// # Errors
///
/// Returns the retry hint when the attempt does not match.
pub fn check_password(attempt: &str) -> Result<(), &'static str> {
    if attempt.trim() == content::SITE_PASSWORD {
        Ok(())
    } else {
        Err(content::PASSWORD_HINT)
    }
}

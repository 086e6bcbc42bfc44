//! Message board log and canned auto-replies.
//!
//! DESIGN
//! ======
//! The log is append-only with strictly increasing ids. An id is
//! `max(last_id + 1, now_ms)`: time-derived like a timestamp, but a reply
//! scheduled in the same millisecond as its trigger (or a clock that steps
//! backwards) can never collide with or sort before an earlier entry.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content;
use crate::util::random::{self, RandomSource};

pub const AUTHOR_SYSTEM: &str = "System";
pub const AUTHOR_USER: &str = "You";
pub const AUTHOR_REPLY: &str = "AutoReply";

/// Pause before the auto-reply appears.
pub const REPLY_DELAY: Duration = Duration::from_millis(700);

/// Messages shown in the final-chapter snapshot.
pub const SNAPSHOT_LEN: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub author: String,
    pub text: String,
}

/// Log shown before anything has been posted.
#[must_use]
pub fn welcome_log() -> Vec<Message> {
    vec![Message {
        id: 0,
        author: AUTHOR_SYSTEM.to_owned(),
        text: content::WELCOME_MESSAGE.to_owned(),
    }]
}

/// Shape check for a decoded log: ids must be strictly increasing.
#[must_use]
pub fn checked_log(log: Vec<Message>) -> Option<Vec<Message>> {
    log.windows(2).all(|w| w[0].id < w[1].id).then_some(log)
}

/// Next id for an entry appended at `now_ms`.
#[must_use]
pub fn next_id(log: &[Message], now_ms: u64) -> u64 {
    match log.last() {
        Some(last) => now_ms.max(last.id.saturating_add(1)),
        None => now_ms,
    }
}

/// The last `n` messages, oldest first.
#[must_use]
pub fn recent(log: &[Message], n: usize) -> &[Message] {
    &log[log.len().saturating_sub(n)..]
}

/// Which canned reply a message triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyKind {
    Thanks,
    Birthday,
    Muse,
    Bestie,
    Fallback,
}

impl ReplyKind {
    /// Classify by keyword on the lowercased text; first match wins.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let t = text.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| t.contains(n));
        if has(&["谢谢", "thank"]) {
            Self::Thanks
        } else if has(&["生日", "birthday"]) {
            Self::Birthday
        } else if has(&["灰原", "ai", "haibara"]) {
            Self::Muse
        } else if has(&["bestie", "朋友"]) {
            Self::Bestie
        } else {
            Self::Fallback
        }
    }

    /// Reply text; fallbacks are drawn uniformly from the content table.
    pub fn text(self, rng: &mut dyn RandomSource) -> &'static str {
        match self {
            Self::Thanks => content::REPLY_THANKS,
            Self::Birthday => content::REPLY_BIRTHDAY,
            Self::Muse => content::REPLY_MUSE,
            Self::Bestie => content::REPLY_BESTIE,
            Self::Fallback => random::pick(&content::REPLY_FALLBACKS, rng)
                .copied()
                .unwrap_or(content::REPLY_FALLBACKS[0]),
        }
    }
}

/// A reply waiting for its delay to elapse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply {
    pub trigger: String,
    pub delay: Duration,
}

/// Append a user post. Returns the reply to schedule, or `None` when the
/// trimmed text is empty (nothing is appended).
pub fn post(log: &mut Vec<Message>, text: &str, now_ms: u64) -> Option<PendingReply> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    log.push(Message {
        id: next_id(log, now_ms),
        author: AUTHOR_USER.to_owned(),
        text: text.to_owned(),
    });
    Some(PendingReply { trigger: text.to_owned(), delay: REPLY_DELAY })
}

/// Append the auto-reply for a pending post once its delay has elapsed.
pub fn deliver(log: &mut Vec<Message>, pending: &PendingReply, now_ms: u64, rng: &mut dyn RandomSource) {
    let text = ReplyKind::classify(&pending.trigger).text(rng);
    log.push(Message {
        id: next_id(log, now_ms),
        author: AUTHOR_REPLY.to_owned(),
        text: text.to_owned(),
    });
}

//! Scored chat messages

use serde::{Deserialize, Serialize};

use crate::types::Participant;

/// Penalty breakdown for one message.
///
/// Each flag is stored as its penalty weight, `0` meaning not triggered.
/// `penalty` is always the sum of the three flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageScore {
    /// Total penalty: 0-6
    pub penalty: u32,
    /// One-word reply without `?` (0 or 1)
    pub short_reply: u32,
    /// No `?` anywhere (0 or 2)
    pub no_question: u32,
    /// Avoidance phrase used (0 or 3)
    pub avoidance: u32,
    /// Whitespace-separated token count
    pub word_count: usize,
}

impl MessageScore {
    /// Build a score, deriving `penalty` from the flags
    pub fn new(short_reply: u32, no_question: u32, avoidance: u32, word_count: usize) -> Self {
        Self {
            penalty: short_reply + no_question + avoidance,
            short_reply,
            no_question,
            avoidance,
            word_count,
        }
    }

    pub fn is_short_reply(&self) -> bool {
        self.short_reply > 0
    }

    pub fn lacks_question(&self) -> bool {
        self.no_question > 0
    }

    pub fn used_avoidance(&self) -> bool {
        self.avoidance > 0
    }
}

/// A message as stored in a session. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    sender: String,
    content: String,
    score: MessageScore,
}

impl Message {
    /// Wrap already-scored content
    pub fn new(sender: impl Into<String>, content: impl Into<String>, score: MessageScore) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            score,
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn score(&self) -> &MessageScore {
        &self.score
    }

    /// Known participant who sent this, if any
    pub fn participant(&self) -> Option<Participant> {
        Participant::from_sender(&self.sender)
    }

    /// Whether the raw content contains a question mark
    pub fn asks_question(&self) -> bool {
        self.content.contains('?')
    }
}

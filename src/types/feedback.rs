//! Feedback codes emitted by session reports

use serde::{Deserialize, Serialize};

/// Every feedback line a report can contain.
///
/// F1xx codes come from the whole-session report, F2xx codes from the
/// per-participant report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum FeedbackCode {
    // =========================================================================
    // F1xx: Session
    // =========================================================================
    /// At least one message had no question
    F101_ASK_MORE_QUESTIONS,
    /// At least one avoidance phrase was used
    F102_USE_EMPATHETIC_LANGUAGE,
    /// Only short replies were a problem
    F103_MAKE_CONVERSATION_LONGER,

    // =========================================================================
    // F2xx: Participant
    // =========================================================================
    /// Participant never asked a question
    F201_NEVER_ASKED_QUESTION,
    /// Participant gave short replies
    F202_MANY_SHORT_REPLIES,
    /// Participant used avoidance phrases
    F203_AVOIDANCE_PHRASES_USED,
    /// Participant's messages carry no penalty at all
    F204_VERY_POSITIVE_STYLE,
}

impl FeedbackCode {
    /// Get the code string (for logging and JSON consumers)
    pub fn code(&self) -> &'static str {
        match self {
            Self::F101_ASK_MORE_QUESTIONS => "F101_ASK_MORE_QUESTIONS",
            Self::F102_USE_EMPATHETIC_LANGUAGE => "F102_USE_EMPATHETIC_LANGUAGE",
            Self::F103_MAKE_CONVERSATION_LONGER => "F103_MAKE_CONVERSATION_LONGER",
            Self::F201_NEVER_ASKED_QUESTION => "F201_NEVER_ASKED_QUESTION",
            Self::F202_MANY_SHORT_REPLIES => "F202_MANY_SHORT_REPLIES",
            Self::F203_AVOIDANCE_PHRASES_USED => "F203_AVOIDANCE_PHRASES_USED",
            Self::F204_VERY_POSITIVE_STYLE => "F204_VERY_POSITIVE_STYLE",
        }
    }

    /// Fixed message template shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Self::F101_ASK_MORE_QUESTIONS => "Ask more questions.",
            Self::F102_USE_EMPATHETIC_LANGUAGE => "Use more empathetic language or expressions.",
            Self::F103_MAKE_CONVERSATION_LONGER => "Make the conversation longer.",
            Self::F201_NEVER_ASKED_QUESTION => "Never asked a question; try showing interest.",
            Self::F202_MANY_SHORT_REPLIES => "Many short replies; try elaborating.",
            Self::F203_AVOIDANCE_PHRASES_USED => "Avoidance phrases used; express emotion more.",
            Self::F204_VERY_POSITIVE_STYLE => "Very positive conversational style!",
        }
    }

    /// Whether this is encouragement rather than a problem
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::F204_VERY_POSITIVE_STYLE)
    }
}

impl std::fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Causes that raise the session distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceCause {
    ShortReply,
    NoQuestion,
    Avoidance,
}

impl DistanceCause {
    pub fn label(&self) -> &'static str {
        match self {
            DistanceCause::ShortReply => "Short replies",
            DistanceCause::NoQuestion => "No question",
            DistanceCause::Avoidance => "Avoidance",
        }
    }
}

impl std::fmt::Display for DistanceCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

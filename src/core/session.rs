//! Chat session: ordered scored messages plus per-participant avoidance counters
//!
//! Messages are scored once when added and never reordered. Reports are computed
//! on demand from the live message list.

use crate::core::MessageScorer;
use crate::types::{
    CauseCount, DistanceCause, FeedbackCode, Message, Participant, ParticipantReport,
    PerUserReport, SessionReport, SessionSummary,
};
use crate::{MAX_DISTANCE, MAX_MESSAGE_PENALTY};

/// A single two-party conversation under analysis
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    scorer: MessageScorer,
    messages: Vec<Message>,
    /// Avoidance counters indexed by [`Participant::index`]
    avoid_counts: [u32; 2],
}

impl ChatSession {
    /// Create an empty session scoring with `scorer`
    pub fn new(scorer: MessageScorer) -> Self {
        Self {
            scorer,
            messages: Vec::new(),
            avoid_counts: [0; 2],
        }
    }

    /// Score and append a message.
    ///
    /// Unrecognized senders are stored but leave the counters untouched.
    pub fn add_message(&mut self, sender: impl Into<String>, content: impl Into<String>) {
        let sender = sender.into();
        let content = content.into();
        let score = self.scorer.score(&content);

        if score.used_avoidance() {
            if let Some(participant) = Participant::from_sender(&sender) {
                self.avoid_counts[participant.index()] += 1;
            }
        }

        tracing::debug!(
            sender = %sender,
            penalty = score.penalty,
            short_reply = score.short_reply,
            no_question = score.no_question,
            avoidance = score.avoidance,
            "message scored"
        );

        self.messages.push(Message::new(sender, content, score));
    }

    /// Whole-session distance report
    pub fn analyze_session(&self) -> SessionReport {
        if self.messages.is_empty() {
            return SessionReport::Empty;
        }

        let total_messages = self.messages.len();
        let total_penalty: u64 = self.messages.iter().map(|m| u64::from(m.score().penalty)).sum();
        let max_possible = max_possible_penalty(total_messages);

        let distance = (total_penalty as f64 / max_possible as f64 * 100.0).min(MAX_DISTANCE);

        let short_reply_count = self.messages.iter().filter(|m| m.score().is_short_reply()).count();
        let no_question_count = self.messages.iter().filter(|m| m.score().lacks_question()).count();
        let total_avoidance = self.avoid_counts.iter().sum::<u32>() as usize;

        let causes = [
            (DistanceCause::ShortReply, short_reply_count),
            (DistanceCause::NoQuestion, no_question_count),
            (DistanceCause::Avoidance, total_avoidance),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(cause, count)| CauseCount { cause, count })
        .collect();

        let mut feedback = Vec::new();
        if no_question_count > 0 {
            feedback.push(FeedbackCode::F101_ASK_MORE_QUESTIONS);
        }
        if total_avoidance > 0 {
            feedback.push(FeedbackCode::F102_USE_EMPATHETIC_LANGUAGE);
        }
        if short_reply_count > 0 && no_question_count == 0 && total_avoidance == 0 {
            feedback.push(FeedbackCode::F103_MAKE_CONVERSATION_LONGER);
        }

        SessionReport::Analyzed(SessionSummary {
            total_messages,
            total_penalty,
            max_possible,
            distance: round_one_decimal(distance),
            causes,
            feedback,
        })
    }

    /// Per-participant breakdown, one block per known participant
    pub fn analyze_session_per_user(&self) -> PerUserReport {
        let participants = Participant::ALL
            .iter()
            .map(|&participant| {
                let messages: Vec<&Message> = self
                    .messages
                    .iter()
                    .filter(|m| m.participant() == Some(participant))
                    .collect();
                analyze_participant(participant, &messages, self.avoid_count(participant))
            })
            .collect();

        PerUserReport { participants }
    }

    /// Drop all messages and reset the counters
    pub fn clear(&mut self) {
        self.messages.clear();
        self.avoid_counts = [0; 2];
    }

    /// Stored avoidance counter for a participant
    pub fn avoid_count(&self, participant: Participant) -> u32 {
        self.avoid_counts[participant.index()]
    }

    /// All messages (oldest first)
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Build one participant's report block.
///
/// Questions are counted from the content itself, not from the stored
/// no-question flag; `avoid_count` is taken as given.
pub fn analyze_participant(
    participant: Participant,
    messages: &[&Message],
    avoid_count: u32,
) -> ParticipantReport {
    let total = messages.len();
    let question_count = messages.iter().filter(|m| m.asks_question()).count();
    let score_sum: u32 = messages.iter().map(|m| m.score().penalty).sum();
    let short_count = messages.iter().filter(|m| m.score().is_short_reply()).count();

    let mut feedback = Vec::new();
    if question_count == 0 {
        feedback.push(FeedbackCode::F201_NEVER_ASKED_QUESTION);
    }
    if short_count > 0 {
        feedback.push(FeedbackCode::F202_MANY_SHORT_REPLIES);
    }
    if avoid_count > 0 {
        feedback.push(FeedbackCode::F203_AVOIDANCE_PHRASES_USED);
    }
    if score_sum == 0 {
        feedback.push(FeedbackCode::F204_VERY_POSITIVE_STYLE);
    }

    ParticipantReport {
        participant,
        total,
        question_count,
        score_sum,
        short_count,
        avoid_count,
        feedback,
    }
}

/// Theoretical maximum penalty for `messages` messages
fn max_possible_penalty(messages: usize) -> u64 {
    u64::try_from(messages)
        .unwrap_or(u64::MAX)
        .saturating_mul(u64::from(MAX_MESSAGE_PENALTY))
}

/// Round to one decimal exactly as `{:.1}` displays it (exact ties go to even)
fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

// =============================================================================
// TESTS
// =============================================================================

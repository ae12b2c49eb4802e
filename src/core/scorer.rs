//! Message scorer: penalizes short replies, missing questions and avoidance phrases
//!
//! Three independent rules, each adding its weight:
//! - short reply (1): exactly one word and no `?` in the content
//! - no question (2): no `?` anywhere in the content
//! - avoidance (3): some word equals an avoidance phrase
//!
//! Words are separated by ASCII whitespace only.

use crate::types::{tokenize, AvoidancePhraseSet, MessageScore};
use crate::{PENALTY_AVOIDANCE, PENALTY_NO_QUESTION, PENALTY_SHORT_REPLY};

/// Scores message content against a fixed avoidance phrase set
#[derive(Debug, Clone, Default)]
pub struct MessageScorer {
    phrases: AvoidancePhraseSet,
}

impl MessageScorer {
    /// Create a scorer with the given phrase set
    pub fn new(phrases: AvoidancePhraseSet) -> Self {
        Self { phrases }
    }

    /// Score content. Never fails; empty content is valid input.
    pub fn score(&self, content: &str) -> MessageScore {
        let word_count = tokenize(content).count();
        let has_question = content.contains('?');

        // A one-word message with `?` is not a short reply
        let short_reply = if word_count == 1 && !has_question {
            PENALTY_SHORT_REPLY
        } else {
            0
        };

        let no_question = if has_question { 0 } else { PENALTY_NO_QUESTION };

        let avoidance = match self.phrases.first_match(content) {
            Some(token) => {
                tracing::debug!(token, "avoidance phrase matched");
                PENALTY_AVOIDANCE
            }
            None => 0,
        };

        MessageScore::new(short_reply, no_question, avoidance, word_count)
    }

    /// Quick score - just the total penalty
    pub fn penalty(&self, content: &str) -> u32 {
        self.score(content).penalty
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_MESSAGE_PENALTY;

    fn scorer() -> MessageScorer {
        MessageScorer::new(AvoidancePhraseSet::new(["몰라", "아무거나", "whatever"]))
    }

    #[test]
    fn test_one_word_without_question() {
        let score = scorer().score("ok");
        assert_eq!(score.short_reply, 1);
        assert_eq!(score.no_question, 2);
        assert_eq!(score.avoidance, 0);
        assert_eq!(score.penalty, 3);
        assert_eq!(score.word_count, 1);
    }

    #[test]
    fn test_one_word_with_question_is_not_short() {
        let score = scorer().score("ok?");
        assert_eq!(score.short_reply, 0);
        assert_eq!(score.no_question, 0);
        assert_eq!(score.penalty, 0);
    }

    #[test]
    fn test_one_word_question_can_still_avoid() {
        let score = MessageScorer::new(AvoidancePhraseSet::new(["whatever?"])).score("whatever?");
        assert_eq!(score.short_reply, 0);
        assert_eq!(score.no_question, 0);
        assert_eq!(score.avoidance, 3);
        assert_eq!(score.penalty, 3);
    }

    #[test]
    fn test_first_token_avoidance() {
        let score = scorer().score("몰라 진짜");
        assert_eq!(score.avoidance, 3);
        assert_eq!(score.short_reply, 0);
        assert_eq!(score.no_question, 2);
        assert_eq!(score.penalty, 5);
    }

    #[test]
    fn test_avoidance_counts_once() {
        let score = scorer().score("몰라 아무거나 whatever");
        assert_eq!(score.avoidance, 3);
        assert_eq!(score.penalty, 5);
    }

    #[test]
    fn test_avoidance_needs_exact_token() {
        assert_eq!(scorer().score("Whatever man").avoidance, 0);
        assert_eq!(scorer().score("whatever, man").avoidance, 0);
        assert_eq!(scorer().score("몰라요").avoidance, 0);
    }

    #[test]
    fn test_worst_case_single_word() {
        let score = scorer().score("whatever");
        assert_eq!(score.penalty, MAX_MESSAGE_PENALTY);
    }

    #[test]
    fn test_empty_and_blank_content() {
        for content in ["", "   ", "\t\n"] {
            let score = scorer().score(content);
            assert_eq!(score.word_count, 0);
            assert_eq!(score.short_reply, 0);
            assert_eq!(score.no_question, 2);
            assert_eq!(score.avoidance, 0);
            assert_eq!(score.penalty, 2);
        }
    }

    #[test]
    fn test_unicode_space_does_not_split_words() {
        let score = MessageScorer::new(AvoidancePhraseSet::new(["몰라"])).score("몰라\u{3000}진짜");
        assert_eq!(score.word_count, 1);
        assert_eq!(score.short_reply, 1);
        assert_eq!(score.avoidance, 0);
        assert_eq!(score.penalty, 3);

        let score = scorer().score("ok\u{a0}sure");
        assert_eq!(score.word_count, 1);
        assert_eq!(score.short_reply, 1);
    }

    #[test]
    fn test_question_mark_anywhere() {
        let score = scorer().score("how was your day ? fine");
        assert_eq!(score.no_question, 0);
        assert_eq!(score.short_reply, 0);
    }

    #[test]
    fn test_empty_phrase_set_never_avoids() {
        let scorer = MessageScorer::default();
        assert_eq!(scorer.score("몰라").avoidance, 0);
    }

    #[test]
    fn test_penalty_invariant() {
        let scorer = scorer();
        for content in ["", "ok", "ok?", "몰라", "몰라?", "what do you think?", "fine thanks", "아무거나 좋아"] {
            let s = scorer.score(content);
            assert_eq!(s.penalty, s.short_reply + s.no_question + s.avoidance);
            assert!(s.penalty <= MAX_MESSAGE_PENALTY);
            assert!(s.short_reply == 0 || s.short_reply == 1);
            assert!(s.no_question == 0 || s.no_question == 2);
            assert!(s.avoidance == 0 || s.avoidance == 3);
        }
    }

    #[test]
    fn test_determinism() {
        let scorer = scorer();
        assert_eq!(scorer.score("몰라 진짜"), scorer.score("몰라 진짜"));
        assert_eq!(scorer.penalty("ok"), 3);
    }
}

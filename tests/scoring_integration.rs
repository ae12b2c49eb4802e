//! Integration tests for message scoring
//!
//! Covers the three penalty rules and the one-word-question quirk

use chat_distance::core::MessageScorer;
use chat_distance::types::AvoidancePhraseSet;
use chat_distance::MAX_MESSAGE_PENALTY;

fn korean_scorer() -> MessageScorer {
    MessageScorer::new(AvoidancePhraseSet::parse("몰라\n아무거나\n상관없어\n"))
}

#[test]
fn test_short_reply_without_question() {
    let score = korean_scorer().score("ok");
    assert_eq!(score.short_reply, 1);
    assert_eq!(score.no_question, 2);
    assert!(score.penalty >= 3);
}

#[test]
fn test_short_question_only_avoidance_counts() {
    let score = korean_scorer().score("ok?");
    assert_eq!(score.short_reply, 0);
    assert_eq!(score.no_question, 0);
    assert_eq!(score.penalty, score.avoidance);
}

#[test]
fn test_avoidance_first_token() {
    let score = korean_scorer().score("몰라 진짜");
    assert_eq!(score.avoidance, 3);
}

#[test]
fn test_avoidance_later_token() {
    let score = korean_scorer().score("그냥 아무거나 먹자");
    assert_eq!(score.avoidance, 3);
    assert_eq!(score.penalty, 5);
}

#[test]
fn test_punctuation_blocks_exact_match() {
    let score = korean_scorer().score("몰라. 진짜");
    assert_eq!(score.avoidance, 0);
}

#[test]
fn test_invariant_over_varied_inputs() {
    let scorer = korean_scorer();
    let inputs = [
        "",
        " ",
        "ok",
        "ok?",
        "몰라",
        "몰라?",
        "상관없어 뭐든",
        "what are you doing this weekend?",
        "I went hiking with friends",
        "?",
        "a ? b",
    ];

    for input in inputs {
        let s = scorer.score(input);
        assert_eq!(
            s.penalty,
            s.short_reply + s.no_question + s.avoidance,
            "penalty mismatch for {:?}",
            input
        );
        assert!(s.penalty <= MAX_MESSAGE_PENALTY, "penalty out of range for {:?}", input);
    }
}

#[test]
fn test_scorer_without_phrases() {
    let scorer = MessageScorer::new(AvoidancePhraseSet::empty());
    let score = scorer.score("몰라");
    assert_eq!(score.avoidance, 0);
    assert_eq!(score.penalty, 3);
}

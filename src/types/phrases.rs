//! Avoidance phrase set

use serde::{Deserialize, Serialize};

/// Word separators: space, tab, LF, CR, form feed, vertical tab.
///
/// Unicode spaces such as U+3000 or U+00A0 are part of a word.
const WORD_SEPARATORS: &[char] = &[' ', '\t', '\n', '\r', '\x0c', '\x0b'];

/// Split content into words on ASCII whitespace only
pub fn tokenize(content: &str) -> impl Iterator<Item = &str> {
    content.split(WORD_SEPARATORS).filter(|token| !token.is_empty())
}

/// Ordered list of avoidance phrases.
///
/// Entries are trimmed and never empty. Order is kept and duplicates are allowed;
/// an empty set simply never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvoidancePhraseSet {
    phrases: Vec<String>,
}

impl AvoidancePhraseSet {
    /// Build from any list of strings, trimming and dropping blank entries
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().trim_matches(WORD_SEPARATORS).to_string())
            .filter(|p| !p.is_empty())
            .collect();
        Self { phrases }
    }

    /// Empty set: avoidance detection never fires
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a phrase file body, one phrase per line
    pub fn parse(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, token: &str) -> bool {
        self.phrases.iter().any(|p| p == token)
    }

    /// First whitespace-separated token of `content` that is an avoidance phrase
    pub fn first_match<'a>(&self, content: &'a str) -> Option<&'a str> {
        if self.phrases.is_empty() {
            return None;
        }
        tokenize(content).find(|token| self.contains(token))
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

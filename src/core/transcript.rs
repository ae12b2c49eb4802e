//! Transcript input: `SENDER: content` lines

use std::io::BufRead;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::DistanceError;

lazy_static! {
    // Sender is any run of non-space, non-colon characters before the first colon
    static ref RE_SPEAKER_LINE: Regex = Regex::new(r"^\s*([^\s:]+)\s*:(.*)$").unwrap();
}

/// Split a `SENDER: content` line. `None` when the line has no sender prefix.
pub fn parse_speaker_line(line: &str) -> Option<(String, String)> {
    let caps = RE_SPEAKER_LINE.captures(line)?;
    let sender = caps.get(1)?.as_str().to_string();
    let content = caps.get(2).map(|m| trim_ascii(m.as_str())).unwrap_or_default();
    Some((sender, content.to_string()))
}

/// Read all `(sender, content)` pairs from a transcript.
///
/// Blank lines and `#` comments are ignored; lines without a sender prefix are
/// skipped with a warning.
pub fn read_transcript<R: BufRead>(reader: R) -> Result<Vec<(String, String)>, DistanceError> {
    let mut pairs = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = trim_ascii(&line);
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_speaker_line(trimmed) {
            Some(pair) => pairs.push(pair),
            None => tracing::warn!(line = number + 1, "skipping transcript line without sender"),
        }
    }

    Ok(pairs)
}

/// Trim ASCII whitespace only, so Unicode spaces stay part of the content
fn trim_ascii(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_prefix() {
        assert_eq!(
            parse_speaker_line("A: hello there"),
            Some(("A".to_string(), "hello there".to_string()))
        );
        assert_eq!(
            parse_speaker_line("  B :몰라  "),
            Some(("B".to_string(), "몰라".to_string()))
        );
    }

    #[test]
    fn test_parse_keeps_unknown_sender() {
        assert_eq!(
            parse_speaker_line("Carol: hi?"),
            Some(("Carol".to_string(), "hi?".to_string()))
        );
    }

    #[test]
    fn test_parse_only_first_colon_splits() {
        assert_eq!(
            parse_speaker_line("A: meet at 10:30?"),
            Some(("A".to_string(), "meet at 10:30?".to_string()))
        );
    }

    #[test]
    fn test_parse_keeps_unicode_space_in_content() {
        assert_eq!(
            parse_speaker_line("B: 몰라\u{3000}"),
            Some(("B".to_string(), "몰라\u{3000}".to_string()))
        );
    }

    #[test]
    fn test_parse_empty_content() {
        assert_eq!(parse_speaker_line("A:"), Some(("A".to_string(), String::new())));
    }

    #[test]
    fn test_parse_rejects_unprefixed() {
        assert_eq!(parse_speaker_line("hello there"), None);
        assert_eq!(parse_speaker_line(": nobody"), None);
        assert_eq!(parse_speaker_line(""), None);
    }

    #[test]
    fn test_read_transcript_skips_noise() {
        let input = "# warm-up\nA: hi?\n\nno prefix here\nB: ok\n";
        let pairs = read_transcript(Cursor::new(input)).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("A".to_string(), "hi?".to_string()),
                ("B".to_string(), "ok".to_string()),
            ]
        );
    }
}

//! Core modules for Chat Distance

pub mod scorer;
pub mod session;
pub mod phrase_loader;
pub mod transcript;

pub use scorer::MessageScorer;
pub use session::{ChatSession, analyze_participant};
pub use phrase_loader::{load_avoidance_phrases, load_avoidance_phrases_or_empty};
pub use transcript::{parse_speaker_line, read_transcript};
